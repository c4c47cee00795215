use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Student {id} not found")]
    NotFound { id: i32 },

    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("Allocation failed: {0}")]
    AllocationError(#[from] TryReserveError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Conflict,
    Resource,
    Output,
    Configuration,
}

impl RosterError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Input,
            Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::DuplicateKey { .. } => ErrorCategory::Conflict,
            Self::AllocationError(_) => ErrorCategory::Resource,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 根據錯誤類別決定 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => 1,
            ErrorCategory::Lookup | ErrorCategory::Conflict => 2,
            ErrorCategory::Output => 3,
            ErrorCategory::Resource => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason } => {
                format!("The value given for '{}' is not accepted: {}", field, reason)
            }
            Self::NotFound { id } => format!("No student with id {} is enrolled", id),
            Self::DuplicateKey { key } => format!("'{}' is already registered", key),
            Self::AllocationError(_) => "Ran out of memory while updating the roster".to_string(),
            Self::IoError(e) => format!("Could not write output: {}", e),
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use a non-empty name and a grade between 0 and 100",
            ErrorCategory::Lookup => "Add the student before recording grades for it",
            ErrorCategory::Conflict => "Use a unique student id and unique course names per student",
            ErrorCategory::Resource => "Reduce the roster size and try again",
            ErrorCategory::Output => "Check that the output stream is writable",
            ErrorCategory::Configuration => "Check the seed file path and its TOML syntax",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            RosterError::invalid_argument("grade", "out of range").category(),
            ErrorCategory::Input
        );
        assert_eq!(RosterError::NotFound { id: 7 }.category(), ErrorCategory::Lookup);
        assert_eq!(
            RosterError::duplicate_key("student id 1").category(),
            ErrorCategory::Conflict
        );
    }

    #[test]
    fn test_allocation_error_from_try_reserve() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let roster_err: RosterError = err.into();
        assert_eq!(roster_err.category(), ErrorCategory::Resource);
        assert_eq!(roster_err.exit_code(), 4);
    }

    #[test]
    fn test_display_messages() {
        let err = RosterError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Student 42 not found");
        assert!(err.user_friendly_message().contains("42"));
    }
}
