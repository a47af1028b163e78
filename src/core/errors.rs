//! Error types for the covgate-rs library.
//!
//! Quality gate evaluation itself never fails: missing values and empty gate
//! lists are encoded as statuses. The errors below cover the boundaries around
//! the evaluator, i.e. loading configuration, statistics snapshots and build
//! history, and validating user-authored gate definitions.

use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

/// Main result type for covgate operations.
pub type Result<T> = std::result::Result<T, CovgateError>;

/// Error type for all covgate operations.
#[derive(Error, Debug)]
pub enum CovgateError {
    /// I/O related errors (reading snapshots, writing configuration files)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
        /// Expected value or format
        expected: Option<String>,
        /// Actual value received
        actual: Option<String>,
    },
}

impl CovgateError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            expected: None,
            actual: None,
        }
    }

    /// Create a validation error for an unrecognized identifier.
    pub fn unknown_value(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let actual = actual.into();
        Self::Validation {
            message: format!("unknown {field} '{actual}'"),
            field: Some(field),
            expected: Some(expected.into()),
            actual: Some(actual),
        }
    }

    /// Add context to an existing error
    ///
    /// I/O and serialization messages are prefixed with the context, config
    /// and validation errors record it as the offending field if none is set.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Io { message, .. } | Self::Serialization { message, .. } => {
                *message = format!("{}: {message}", context.into());
            }
            Self::Config { field, .. } if field.is_none() => {
                *field = Some(context.into());
            }
            Self::Validation { field, .. } if field.is_none() => {
                *field = Some(context.into());
            }
            _ => {}
        }
        self
    }
}

impl From<io::Error> for CovgateError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for CovgateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for CovgateError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<ParseFloatError> for CovgateError {
    fn from(err: ParseFloatError) -> Self {
        Self::validation(format!("Invalid float: {err}"))
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CovgateError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}
