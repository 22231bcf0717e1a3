//! Validation messages attached by the backend to form fields

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of a validation failure response:
/// `{"message": "...", "errors": {"title": ["The title field is required."]}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// First message for a field, which is what the form shows
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|msgs| msgs.first())
            .map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.first(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Messages keyed by array fields such as `images.0` roll up under `images`
    pub fn first_under(&self, prefix: &str) -> Option<&str> {
        if let Some(msg) = self.first(prefix) {
            return Some(msg);
        }
        let nested = format!("{}.", prefix);
        self.errors
            .iter()
            .find(|(k, v)| k.starts_with(&nested) && !v.is_empty())
            .and_then(|(_, v)| v.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message() {
        let json = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "title": ["The title field is required.", "Too short."],
                "images.1": ["The images.1 must be an image."]
            }
        }"#;
        let errors: FieldErrors = serde_json::from_str(json).unwrap();
        assert_eq!(errors.first("title"), Some("The title field is required."));
        assert_eq!(errors.first("slug"), None);
        assert!(errors.has("title"));
        assert_eq!(
            errors.first_under("images"),
            Some("The images.1 must be an image.")
        );
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_message_only_payload() {
        let errors: FieldErrors = serde_json::from_str(r#"{"message": "Forbidden"}"#).unwrap();
        assert!(errors.is_empty());
        assert_eq!(errors.message, "Forbidden");
    }
}
