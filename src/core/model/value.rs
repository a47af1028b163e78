//! Measured values of a metric.

use serde::{Deserialize, Serialize};

/// A single measured quantity for one metric at one baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Absolute coverage given by covered and missed items
    Coverage {
        /// Number of covered items
        covered: u64,
        /// Number of missed items
        missed: u64,
    },
    /// Absolute integer-like value (lines of code, complexity)
    Count(i64),
    /// Signed difference between two measurements of the same metric
    Difference(f64),
}

impl Value {
    /// Creates a coverage value.
    pub const fn coverage(covered: u64, missed: u64) -> Self {
        Value::Coverage { covered, missed }
    }

    /// Creates a count value.
    pub const fn count(value: i64) -> Self {
        Value::Count(value)
    }

    /// Creates a difference value.
    pub const fn difference(delta: f64) -> Self {
        Value::Difference(delta)
    }

    /// Covered percentage of a coverage value, 0 for empty coverages.
    pub fn covered_percentage(covered: u64, missed: u64) -> f64 {
        let total = covered as f64 + missed as f64;
        if total == 0.0 {
            0.0
        } else {
            covered as f64 * 100.0 / total
        }
    }

    /// The number a quality gate threshold is compared with.
    ///
    /// Coverage values yield their covered percentage, counts and differences
    /// their raw number.
    pub fn primary_value(&self) -> f64 {
        match *self {
            Value::Coverage { covered, missed } => Self::covered_percentage(covered, missed),
            Value::Count(value) => value as f64,
            Value::Difference(delta) => delta,
        }
    }

    /// Returns true for signed differences.
    pub const fn is_difference(&self) -> bool {
        matches!(self, Value::Difference(_))
    }
}
