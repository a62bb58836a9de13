//! Crate error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors surfaced by grouping and history persistence.
#[derive(Error, Debug)]
pub enum GroupingError {
    /// The request was declined before any search ran.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// A file could not be read or written.
    #[error("Could not access {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ValidationErrors> for GroupingError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type GroupingResult<T> = Result<T, GroupingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_validation_message_passthrough() {
        let err = GroupingError::from(ValidationErrors(vec![ValidationError {
            kind: ValidationErrorKind::GroupSizeTooSmall,
            message: "Group size must be 2 or more.".into(),
        }]));
        assert_eq!(err.to_string(), "Group size must be 2 or more.");
    }

    #[test]
    fn test_storage_message() {
        let err = GroupingError::Storage {
            path: PathBuf::from("/tmp/history.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Could not access /tmp/history.json: denied");
    }
}
