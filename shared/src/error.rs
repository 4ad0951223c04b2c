use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response status: {0}")]
    HttpStatus(u16),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SharedError {
    /// True when the failure happened before a response body was available.
    pub fn is_transport(&self) -> bool {
        matches!(self, SharedError::Network(_) | SharedError::HttpStatus(_))
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_becomes_conversion() {
        let err: SharedError = serde_json::from_str::<Vec<u32>>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, SharedError::Conversion(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_validation_errors_name_the_field() {
        use crate::models::game::{GameRecord, TeamEntry};
        use validator::Validate;

        let mut game = GameRecord::new("g", TeamEntry::new("A", 0, 0.0), TeamEntry::new("B", 0, 0.0));
        game.team_two = None;

        let err = SharedError::from(game.validate().unwrap_err());
        assert!(matches!(&err, SharedError::Validation(message) if message.contains("team_two")));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_display_includes_cause() {
        let err = SharedError::HttpStatus(404);
        assert_eq!(err.to_string(), "Unexpected response status: 404");
        assert!(err.is_transport());
    }
}
