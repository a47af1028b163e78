//! Aggregated outcome of a quality gate evaluation.

use serde::Serialize;

use super::gate::QualityGate;
use super::status::QualityGateStatus;
use crate::core::model::formatter;

/// Outcome of a single quality gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityGateOutcome {
    /// The evaluated gate
    pub gate: QualityGate,
    /// Status of this gate
    pub status: QualityGateStatus,
    /// Formatted actual value, `n/a` if it was not computed
    pub actual: String,
    /// Human-readable message
    pub message: String,
}

impl QualityGateOutcome {
    fn new(gate: QualityGate, status: QualityGateStatus, actual: String) -> Self {
        let message = format!(
            "[{}]: «{}» - (Actual value: {}, Quality gate: {})",
            gate.name(),
            status.label(),
            actual,
            formatter::format_threshold(gate.threshold)
        );
        Self {
            gate,
            status,
            actual,
            message,
        }
    }
}

/// Ordered per-gate outcomes plus the worst status seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityGateResult {
    overall_status: QualityGateStatus,
    outcomes: Vec<QualityGateOutcome>,
}

impl QualityGateResult {
    /// Creates an inactive result without outcomes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome of a gate and folds its status into the overall status.
    pub(crate) fn add(
        &mut self,
        gate: QualityGate,
        status: QualityGateStatus,
        actual: impl Into<String>,
    ) -> &QualityGateOutcome {
        self.overall_status = self.overall_status.worst(status);
        self.outcomes
            .push(QualityGateOutcome::new(gate, status, actual.into()));
        &self.outcomes[self.outcomes.len() - 1]
    }

    /// Worst status of all evaluated gates.
    pub fn overall_status(&self) -> QualityGateStatus {
        self.overall_status
    }

    /// Returns true if no gate could be evaluated.
    pub fn is_inactive(&self) -> bool {
        self.overall_status == QualityGateStatus::Inactive
    }

    /// Returns true if the result does not change the build result.
    pub fn is_successful(&self) -> bool {
        self.overall_status.is_successful()
    }

    /// Messages of all gates in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|outcome| outcome.message.clone())
            .collect()
    }

    /// Outcomes of all gates in evaluation order.
    pub fn outcomes(&self) -> &[QualityGateOutcome] {
        &self.outcomes
    }

    /// Gate and status pairs in evaluation order.
    pub fn statuses(&self) -> impl Iterator<Item = (&QualityGate, QualityGateStatus)> {
        self.outcomes
            .iter()
            .map(|outcome| (&outcome.gate, outcome.status))
    }
}
