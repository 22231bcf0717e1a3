//! API error and request helper types

use folio_core::types::FieldErrors;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Per-field messages from a 422 response
    #[serde(default)]
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fields: None,
        }
    }

    pub fn network(e: impl std::fmt::Display) -> Self {
        Self::new("NetworkError", e.to_string())
    }

    pub fn parse(e: impl std::fmt::Display) -> Self {
        Self::new("ParseError", e.to_string())
    }

    pub fn validation(errors: FieldErrors) -> Self {
        let message = if errors.message.is_empty() {
            "The given data was invalid.".to_string()
        } else {
            errors.message.clone()
        };
        Self {
            code: "ValidationError".to_string(),
            message,
            fields: Some(errors),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "HTTP404"
    }

    /// Field errors, empty for non-validation failures
    pub fn field_errors(&self) -> FieldErrors {
        self.fields.clone().unwrap_or_default()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result of a create or update call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Saved {
    pub id: u64,
    #[serde(default)]
    pub message: Option<String>,
}
