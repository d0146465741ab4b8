use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The stored session record could not be read as a JSON object.
    MalformedSession,
    /// `config.toml` could not be parsed.
    InvalidConfig,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::MalformedSession => write!(f, "MalformedSession"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured application error shared by the app and its support crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn malformed_session(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::MalformedSession,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Message for a single form field, if validation flagged it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_session_has_correct_kind() {
        let err = AppError::malformed_session("expected value at line 1");
        assert_eq!(err.kind, AppErrorKind::MalformedSession);
        assert_eq!(err.message, "expected value at line 1");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_exposes_fields() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "Email is required".to_string());
        let err = AppError::validation("Please fix the highlighted fields", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("email"), Some("Email is required"));
        assert_eq!(err.field("password"), None);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::invalid_config("missing closing bracket");
        assert_eq!(format!("{}", err), "InvalidConfig: missing closing bracket");
    }

    #[test]
    fn empty_field_errors_are_not_serialized() {
        let json = serde_json::to_string(&AppError::malformed_session("bad")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
