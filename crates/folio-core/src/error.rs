//! Error types for Folio

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Client-side upload validation failures.
///
/// Each variant renders as the human readable message shown under the
/// upload field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("\"{name}\" is larger than {max_mb} MB")]
    FileTooLarge { name: String, max_mb: u64 },

    #[error("\"{name}\" is not an accepted file type (expected {expected}*)")]
    WrongType { name: String, expected: String },

    #[error("You can upload at most {max} files")]
    TooManyFiles { max: usize },
}

impl UploadError {
    /// Name of the offending file, if the error is about a single file
    pub fn file_name(&self) -> Option<&str> {
        match self {
            UploadError::FileTooLarge { name, .. } | UploadError::WrongType { name, .. } => {
                Some(name)
            }
            UploadError::TooManyFiles { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_messages() {
        let err = UploadError::FileTooLarge {
            name: "hero.png".into(),
            max_mb: 2,
        };
        assert_eq!(err.to_string(), "\"hero.png\" is larger than 2 MB");
        assert_eq!(err.file_name(), Some("hero.png"));

        let err = UploadError::TooManyFiles { max: 4 };
        assert_eq!(err.to_string(), "You can upload at most 4 files");
        assert_eq!(err.file_name(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidConfig("server.port must be non-zero".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: server.port must be non-zero"
        );

        let err = Error::InvalidArgument("Unknown publish status: archived".into());
        assert_eq!(err.to_string(), "Invalid argument: Unknown publish status: archived");
    }
}
