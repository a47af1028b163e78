//! Text formatting of metric values.
//!
//! Absolute values never carry a sign, values of delta baselines always do.
//! Coverage metrics render as percentage with two decimals, count metrics as
//! integers.

use super::{Baseline, Metric, Value};

/// Placeholder for values that have not been computed.
pub const NOT_AVAILABLE: &str = "n/a";

/// Formats a value with the rendering rule of its baseline.
pub fn format(baseline: Baseline, value: &Value, metric: Metric) -> String {
    if baseline.is_delta() {
        format_delta(value, metric)
    } else {
        format_value(value, metric)
    }
}

/// Formats an absolute value, e.g. `75.00%` or `1000`.
pub fn format_value(value: &Value, metric: Metric) -> String {
    match *value {
        Value::Coverage { covered, missed } => {
            format_percentage(Value::covered_percentage(covered, missed))
        }
        Value::Count(count) => count.to_string(),
        Value::Difference(delta) => {
            if metric.is_coverage() {
                format_percentage(delta)
            } else {
                round_count(delta).to_string()
            }
        }
    }
}

/// Formats a signed value, e.g. `+5.00%`, `-10.00%` or `+5`.
pub fn format_delta(value: &Value, metric: Metric) -> String {
    match *value {
        Value::Coverage { covered, missed } => {
            format_signed_percentage(Value::covered_percentage(covered, missed))
        }
        Value::Count(count) => format!("{count:+}"),
        Value::Difference(delta) => {
            if metric.is_coverage() {
                format_signed_percentage(delta)
            } else {
                format!("{:+}", round_count(delta))
            }
        }
    }
}

/// Formats a quality gate threshold with two decimals.
pub fn format_threshold(threshold: f64) -> String {
    format!("{:.2}", normalize_zero(threshold))
}

/// Name of a quality gate for the given pair, e.g. `Overall project - Line Coverage`.
pub fn gate_name(baseline: Baseline, metric: Metric) -> String {
    format!("{} - {}", baseline.title(), metric.display_name())
}

/// Selectable metrics as (identifier, display name) pairs.
pub fn metric_items() -> Vec<(&'static str, &'static str)> {
    Metric::ALL
        .iter()
        .map(|metric| (metric.identifier(), metric.display_name()))
        .collect()
}

/// Selectable baselines as (identifier, title) pairs.
pub fn baseline_items() -> Vec<(&'static str, &'static str)> {
    Baseline::ALL
        .iter()
        .map(|baseline| (baseline.identifier(), baseline.title()))
        .collect()
}

fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", normalize_zero(percentage))
}

fn format_signed_percentage(percentage: f64) -> String {
    format!("{:+.2}%", normalize_zero(percentage))
}

fn round_count(value: f64) -> i64 {
    normalize_zero(value.round()) as i64
}

// -0.0 would otherwise render as "-0.00"
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
