//! Append-only log of an evaluation.

use tracing::{error, info};

/// Collects informational and error messages in append order.
///
/// Every entry is also emitted as a `tracing` event so that console output
/// and the retained messages stay in sync.
#[derive(Debug, Clone, Default)]
pub struct EvaluationLog {
    name: String,
    info_messages: Vec<String>,
    error_messages: Vec<String>,
}

impl EvaluationLog {
    /// Creates an empty log with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name of the log.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an informational message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(log = %self.name, "{message}");
        self.info_messages.push(message);
    }

    /// Appends an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!(log = %self.name, "{message}");
        self.error_messages.push(message);
    }

    /// Informational messages in append order.
    pub fn info_messages(&self) -> &[String] {
        &self.info_messages
    }

    /// Error messages in append order.
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// Returns true if an error has been logged.
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_messages_in_append_order() {
        let mut log = EvaluationLog::new("Quality Gates");
        log.log_info("first");
        log.log_error("broken");
        log.log_info("second");

        assert_eq!(log.name(), "Quality Gates");
        assert_eq!(log.info_messages(), &["first".to_string(), "second".to_string()]);
        assert_eq!(log.error_messages(), &["broken".to_string()]);
        assert!(log.has_errors());
    }
}
