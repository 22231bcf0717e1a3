//! Row actions and the submissions they turn into

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prompt attached to every delete action
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Verb::Delete)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One button or link in a row's actions cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    pub label: String,
    /// Route for `GET`, API path otherwise
    pub target: String,
    pub verb: Verb,
    pub confirm: Option<String>,
}

impl RowAction {
    pub fn new(label: impl Into<String>, target: impl Into<String>, verb: Verb) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            verb,
            confirm: None,
        }
    }

    pub fn get(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(label, target, Verb::Get)
    }

    pub fn delete(target: impl Into<String>) -> Self {
        Self::new("Delete", target, Verb::Delete).confirm(DELETE_CONFIRMATION)
    }

    pub fn confirm(mut self, prompt: impl Into<String>) -> Self {
        self.confirm = Some(prompt.into());
        self
    }

    /// Resolve the action into a submission.
    ///
    /// `ask` is only consulted when the action carries a prompt; a declined
    /// prompt yields `None` and nothing happens.
    pub fn submit(&self, ask: impl FnOnce(&str) -> bool) -> Option<Submission> {
        if let Some(prompt) = &self.confirm {
            if !ask(prompt) {
                return None;
            }
        }

        Some(match self.verb {
            Verb::Get => Submission::Navigate(self.target.clone()),
            verb => Submission::Request {
                verb,
                target: self.target.clone(),
            },
        })
    }
}

/// What executing an action asks the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Navigate(String),
    Request { verb: Verb, target: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_navigates_without_prompt() {
        let action = RowAction::get("Edit", "/admin/posts/3/edit");
        let mut asked = false;
        let submission = action.submit(|_| {
            asked = true;
            false
        });
        assert!(!asked);
        assert_eq!(
            submission,
            Some(Submission::Navigate("/admin/posts/3/edit".into()))
        );
    }

    #[test]
    fn test_declined_confirmation_is_a_no_op() {
        let action = RowAction::delete("/posts/3");
        assert_eq!(action.submit(|_| false), None);
    }

    #[test]
    fn test_accepted_confirmation_issues_request() {
        let action = RowAction::delete("/posts/3");
        let submission = action.submit(|prompt| {
            assert_eq!(prompt, DELETE_CONFIRMATION);
            true
        });
        assert_eq!(
            submission,
            Some(Submission::Request {
                verb: Verb::Delete,
                target: "/posts/3".into(),
            })
        );
    }

    #[test]
    fn test_verb_display() {
        assert_eq!(Verb::Post.to_string(), "POST");
        assert!(Verb::Delete.is_destructive());
    }
}
