//! Evaluation of quality gates against coverage statistics.

use tracing::debug;

use super::gate::QualityGate;
use super::handler::ResultHandler;
use super::log::EvaluationLog;
use super::result::QualityGateResult;
use super::status::QualityGateStatus;
use crate::core::model::{formatter, StatisticsLookup};

/// Evaluates an ordered collection of quality gates against one snapshot.
///
/// Gate order determines message order. Evaluation is total: values that
/// have not been computed yield an INACTIVE entry instead of an error, so a
/// single unavailable metric never hides the outcome of the other gates.
#[derive(Debug, Clone)]
pub struct QualityGateEvaluator<S> {
    quality_gates: Vec<QualityGate>,
    statistics: S,
}

impl<S: StatisticsLookup> QualityGateEvaluator<S> {
    /// Creates an evaluator for the given gates and statistics.
    pub fn new(quality_gates: impl IntoIterator<Item = QualityGate>, statistics: S) -> Self {
        Self {
            quality_gates: quality_gates.into_iter().collect(),
            statistics,
        }
    }

    /// Returns true if at least one quality gate has been configured.
    pub fn is_enabled(&self) -> bool {
        !self.quality_gates.is_empty()
    }

    /// The configured gates in evaluation order.
    pub fn quality_gates(&self) -> &[QualityGate] {
        &self.quality_gates
    }

    /// Evaluates all gates.
    ///
    /// `handler` is notified once for every strict escalation of the overall
    /// status to WARNING or FAILED.
    pub fn evaluate(
        &self,
        handler: &mut dyn ResultHandler,
        log: &mut EvaluationLog,
    ) -> QualityGateResult {
        let mut result = QualityGateResult::new();

        if !self.is_enabled() {
            log.log_info("No quality gates have been set - skipping");
            return result;
        }

        log.log_info("Evaluating quality gates");
        for gate in &self.quality_gates {
            let previous = result.overall_status();
            let (status, actual) = self.evaluate_gate(gate);
            let outcome = result.add(gate.clone(), status, actual);
            debug!(gate = %outcome.gate.name(), status = ?status, "{}", outcome.message);

            if status > previous {
                match status {
                    QualityGateStatus::Warning => handler.on_unstable(&outcome.message),
                    QualityGateStatus::Failed => handler.on_failure(&outcome.message),
                    _ => {}
                }
            }
        }

        if result.overall_status() == QualityGateStatus::Note {
            log.log_info("-> All quality gates have been passed, but some notes have been recorded");
        } else if result.is_successful() {
            log.log_info("-> All quality gates have been passed");
        } else {
            log.log_info(format!(
                "-> Some quality gates have been missed: overall result is {}",
                result.overall_status().label()
            ));
        }
        log.log_info("-> Details for each quality gate:");
        for message in result.messages() {
            log.log_info(format!("   - {message}"));
        }

        result
    }

    fn evaluate_gate(&self, gate: &QualityGate) -> (QualityGateStatus, String) {
        let Some(value) = self.statistics.value(gate.baseline, gate.metric) else {
            return (
                QualityGateStatus::Inactive,
                formatter::NOT_AVAILABLE.to_string(),
            );
        };

        let actual = formatter::format(gate.baseline, &value, gate.metric);
        let status = if value.primary_value() >= gate.threshold {
            QualityGateStatus::Passed
        } else {
            gate.criticality.violation_status()
        };
        (status, actual)
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
