//! Build status hooks invoked when an evaluation escalates.

use serde::Serialize;
use tracing::{error, warn};

/// Receives status escalations during quality gate evaluation.
///
/// Each method is called at most once per evaluation, on the calling thread,
/// with the message of the gate that caused the escalation.
pub trait ResultHandler {
    /// The overall status escalated to WARNING.
    fn on_unstable(&mut self, message: &str);

    /// The overall status escalated to FAILED.
    fn on_failure(&mut self, message: &str);
}

/// Handler that ignores all escalations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResultHandler;

impl ResultHandler for NullResultHandler {
    fn on_unstable(&mut self, _message: &str) {}

    fn on_failure(&mut self, _message: &str) {}
}

/// Result of the build that hosts the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildVerdict {
    /// Build result is untouched
    #[default]
    Success,
    /// Build has been marked unstable
    Unstable,
    /// Build has been marked failed
    Failure,
}

/// Handler that tracks the verdict of the hosting build.
#[derive(Debug, Default, Clone)]
pub struct BuildStatusHandler {
    verdict: BuildVerdict,
    messages: Vec<String>,
}

impl BuildStatusHandler {
    /// Creates a handler for a successful build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current verdict.
    pub fn verdict(&self) -> BuildVerdict {
        self.verdict
    }

    /// Messages that escalated the verdict, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    fn escalate(&mut self, verdict: BuildVerdict, message: &str) {
        self.verdict = self.verdict.max(verdict);
        self.messages.push(message.to_string());
    }
}

impl ResultHandler for BuildStatusHandler {
    fn on_unstable(&mut self, message: &str) {
        warn!("Marking build as unstable: {message}");
        self.escalate(BuildVerdict::Unstable, message);
    }

    fn on_failure(&mut self, message: &str) {
        error!("Marking build as failed: {message}");
        self.escalate(BuildVerdict::Failure, message);
    }
}
