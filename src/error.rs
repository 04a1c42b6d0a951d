//! Error types for the Increase models crate
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Malformed JSON: {message}")]
    MalformedJson { message: String },

    #[error("Expected a JSON object for {model}, found {found}")]
    NotAnObject { model: String, found: String },

    #[error("Invalid value for {model}.{field}: {message}")]
    FieldType {
        model: String,
        field: String,
        message: String,
    },

    #[error("Missing required field {model}.{field}")]
    MissingField { model: String, field: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Failed to fetch page: {message}")]
    Fetch { message: String },

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("Unknown resource '{name}'")]
    UnknownResource { name: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed JSON error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedJson {
            message: message.into(),
        }
    }

    /// Create a field type mismatch error
    pub fn field_type(
        model: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::FieldType {
            model: model.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing required field error
    pub fn missing_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            model: model.into(),
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Check if this error came from decoding a payload
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedJson { .. }
                | Error::NotAnObject { .. }
                | Error::FieldType { .. }
                | Error::MissingField { .. }
        )
    }

    /// The offending field, for field-level decode errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::FieldType { field, .. } | Error::MissingField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed("EOF while parsing an object");
        assert_eq!(
            err.to_string(),
            "Malformed JSON: EOF while parsing an object"
        );

        let err = Error::field_type("Account", "created_at", "premature end of input");
        assert_eq!(
            err.to_string(),
            "Invalid value for Account.created_at: premature end of input"
        );

        let err = Error::missing_field("Account", "id");
        assert_eq!(err.to_string(), "Missing required field Account.id");

        let err = Error::invalid_config("pagination.limit", "must be between 1 and 100");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'pagination.limit': must be between 1 and 100"
        );
    }

    #[test]
    fn test_is_decode_error() {
        assert!(Error::malformed("x").is_decode_error());
        assert!(Error::field_type("A", "b", "c").is_decode_error());
        assert!(Error::missing_field("A", "b").is_decode_error());
        assert!(Error::NotAnObject {
            model: "A".into(),
            found: "array".into()
        }
        .is_decode_error());

        assert!(!Error::config("x").is_decode_error());
        assert!(!Error::fetch("x").is_decode_error());
    }

    #[test]
    fn test_error_field() {
        assert_eq!(Error::field_type("A", "amount", "x").field(), Some("amount"));
        assert_eq!(Error::missing_field("A", "id").field(), Some("id"));
        assert_eq!(Error::malformed("x").field(), None);
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
