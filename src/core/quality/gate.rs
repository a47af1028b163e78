//! Declarative quality gate definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::status::QualityGateStatus;
use crate::core::errors::{CovgateError, Result};
use crate::core::model::{formatter, Baseline, Metric};

/// Severity of a quality gate violation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Criticality {
    /// Violations are reported as a note, the build result is kept
    Note,
    /// Violations mark the build as unstable
    #[default]
    Unstable,
    /// Violations mark the build as failed
    Failure,
}

impl Criticality {
    /// All criticalities, weakest first.
    pub const ALL: [Criticality; 3] = [Criticality::Note, Criticality::Unstable, Criticality::Failure];

    /// Status of a gate with this criticality that has been missed.
    pub const fn violation_status(self) -> QualityGateStatus {
        match self {
            Criticality::Note => QualityGateStatus::Note,
            Criticality::Unstable => QualityGateStatus::Warning,
            Criticality::Failure => QualityGateStatus::Failed,
        }
    }

    /// Identifier of the enum constant.
    pub const fn identifier(self) -> &'static str {
        match self {
            Criticality::Note => "NOTE",
            Criticality::Unstable => "UNSTABLE",
            Criticality::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Criticality {
    type Err = CovgateError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        Criticality::ALL
            .iter()
            .copied()
            .find(|criticality| criticality.identifier() == normalized)
            .ok_or_else(|| {
                CovgateError::unknown_value("criticality", "one of NOTE, UNSTABLE, FAILURE", s)
            })
    }
}

/// A threshold rule on one (metric, baseline) pair.
///
/// A gate is satisfied when the actual value is at least the threshold.
/// Rules that must hold for decreasing metrics are expressed through the
/// threshold, e.g. a threshold of `0` on a delta baseline asserts that the
/// value did not decrease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityGate {
    /// Metric to check
    pub metric: Metric,
    /// Baseline the metric value is taken from
    #[serde(default)]
    pub baseline: Baseline,
    /// Minimum value that passes the gate
    #[serde(default)]
    pub threshold: f64,
    /// Severity of a violation
    #[serde(default)]
    pub criticality: Criticality,
}

impl QualityGate {
    /// Creates a fully specified gate.
    pub fn new(threshold: f64, metric: Metric, baseline: Baseline, criticality: Criticality) -> Self {
        Self {
            metric,
            baseline,
            threshold,
            criticality,
        }
    }

    /// Creates a gate for the project baseline with threshold 0 and criticality UNSTABLE.
    pub fn for_metric(metric: Metric) -> Self {
        Self::new(0.0, metric, Baseline::default(), Criticality::default())
    }

    /// Replaces the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replaces the baseline.
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Replaces the criticality.
    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = criticality;
        self
    }

    /// Human-readable name, e.g. `Overall project - Line Coverage`.
    pub fn name(&self) -> String {
        formatter::gate_name(self.baseline, self.metric)
    }

    /// Rejects definitions the evaluator cannot handle.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(CovgateError::Validation {
                message: format!("threshold of quality gate '{}' must be finite", self.name()),
                field: Some("threshold".to_string()),
                expected: Some("a finite number".to_string()),
                actual: Some(self.threshold.to_string()),
            });
        }
        Ok(())
    }
}

impl FromStr for QualityGate {
    type Err = CovgateError;

    /// Parses `METRIC[:BASELINE[:THRESHOLD[:CRITICALITY]]]`, e.g. `line:project:80:failure`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.is_empty() || parts.len() > 4 || parts[0].trim().is_empty() {
            return Err(CovgateError::Validation {
                message: format!("invalid quality gate definition '{s}'"),
                field: Some("gate".to_string()),
                expected: Some("METRIC[:BASELINE[:THRESHOLD[:CRITICALITY]]]".to_string()),
                actual: Some(s.to_string()),
            });
        }

        let mut gate = QualityGate::for_metric(parts[0].parse()?);
        if let Some(baseline) = parts.get(1) {
            gate.baseline = baseline.parse()?;
        }
        if let Some(threshold) = parts.get(2) {
            gate.threshold = threshold.trim().parse()?;
        }
        if let Some(criticality) = parts.get(3) {
            gate.criticality = criticality.parse()?;
        }
        gate.validate()?;
        Ok(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criticality_is_ordered_by_severity() {
        assert!(Criticality::Note < Criticality::Unstable);
        assert!(Criticality::Unstable < Criticality::Failure);
    }

    #[test]
    fn criticality_maps_to_violation_status() {
        assert_eq!(Criticality::Note.violation_status(), QualityGateStatus::Note);
        assert_eq!(Criticality::Unstable.violation_status(), QualityGateStatus::Warning);
        assert_eq!(Criticality::Failure.violation_status(), QualityGateStatus::Failed);
    }

    #[test]
    fn defaults_match_declarative_configuration() {
        let gate = QualityGate::for_metric(Metric::Branch);
        assert_eq!(gate.baseline, Baseline::Project);
        assert_eq!(gate.threshold, 0.0);
        assert_eq!(gate.criticality, Criticality::Unstable);
        assert_eq!(gate.name(), "Overall project - Branch Coverage");
    }

    #[test]
    fn builder_methods_replace_fields() {
        let gate = QualityGate::for_metric(Metric::Line)
            .with_threshold(80.5)
            .with_baseline(Baseline::ModifiedLines)
            .with_criticality(Criticality::Failure);
        assert_eq!(
            gate,
            QualityGate::new(80.5, Metric::Line, Baseline::ModifiedLines, Criticality::Failure)
        );
    }

    #[test]
    fn parses_compact_definitions() {
        let gate: QualityGate = "line:project_delta:-0.5:failure".parse().unwrap();
        assert_eq!(
            gate,
            QualityGate::new(-0.5, Metric::Line, Baseline::ProjectDelta, Criticality::Failure)
        );

        let gate: QualityGate = "BRANCH".parse().unwrap();
        assert_eq!(gate, QualityGate::for_metric(Metric::Branch));
    }

    #[test]
    fn rejects_invalid_definitions() {
        assert!("".parse::<QualityGate>().is_err());
        assert!("line:project:abc".parse::<QualityGate>().is_err());
        assert!("line:nowhere".parse::<QualityGate>().is_err());
        assert!("line:project:80:fatal".parse::<QualityGate>().is_err());
        assert!("line:project:80:failure:extra".parse::<QualityGate>().is_err());
        assert!("line:project:NaN".parse::<QualityGate>().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let gate: QualityGate = serde_yaml::from_str("metric: LINE\nthreshold: 60\n").unwrap();
        assert_eq!(gate.baseline, Baseline::Project);
        assert_eq!(gate.criticality, Criticality::Unstable);
        assert_eq!(gate.threshold, 60.0);
    }

    #[test]
    fn validate_rejects_infinite_thresholds() {
        let gate = QualityGate::for_metric(Metric::Line).with_threshold(f64::INFINITY);
        assert!(matches!(gate.validate(), Err(CovgateError::Validation { .. })));
    }
}
