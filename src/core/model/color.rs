//! Display colors for metric values.
//!
//! Absolute values are colored by coverage level, delta values by the
//! direction of the change. The mapping is a pure function of baseline,
//! metric and number so renderers can share it.

use serde::Serialize;

use super::{Baseline, Metric, Tendency, Value};

/// Semantic color of a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorId {
    /// Best possible rating
    Excellent,
    /// Very good rating
    VeryGood,
    /// Good rating
    Good,
    /// Average rating
    Average,
    /// Slightly below average
    BelowAverage,
    /// Bad rating
    Bad,
    /// Worst rating
    Inadequate,
    /// No rating (invalid or missing value)
    White,
}

impl ColorId {
    /// Fill color as hex RGB.
    pub const fn fill_color(self) -> &'static str {
        match self {
            ColorId::Excellent => "#1b9e4b",
            ColorId::VeryGood => "#3fb166",
            ColorId::Good => "#7cc36a",
            ColorId::Average => "#d4d44f",
            ColorId::BelowAverage => "#f0b143",
            ColorId::Bad => "#ea7a3c",
            ColorId::Inadequate => "#d9412f",
            ColorId::White => "#ffffff",
        }
    }
}

// (minimum percentage, color), checked top-down
const COVERAGE_LEVELS: [(f64, ColorId); 7] = [
    (95.0, ColorId::Excellent),
    (90.0, ColorId::VeryGood),
    (85.0, ColorId::Good),
    (80.0, ColorId::Average),
    (75.0, ColorId::BelowAverage),
    (50.0, ColorId::Bad),
    (0.0, ColorId::Inadequate),
];

/// Color of an absolute coverage percentage.
pub fn coverage_level_color(percentage: f64) -> ColorId {
    if percentage.is_nan() {
        return ColorId::White;
    }
    COVERAGE_LEVELS
        .iter()
        .find(|(minimum, _)| percentage >= *minimum)
        .map_or(ColorId::White, |(_, color)| *color)
}

/// Color of a change, taking the metric's tendency into account.
pub fn change_tendency_color(delta: f64, tendency: Tendency) -> ColorId {
    if delta.is_nan() {
        return ColorId::White;
    }
    let improvement = match tendency {
        Tendency::LargerIsBetter => delta,
        Tendency::LargerIsWorse => -delta,
    };
    if improvement > 0.0 {
        ColorId::Excellent
    } else if improvement < 0.0 {
        ColorId::Inadequate
    } else {
        ColorId::Average
    }
}

/// Color to render `value` of `metric` in the section of `baseline`.
///
/// Absolute count metrics have no rating scale and stay uncolored.
pub fn display_color(baseline: Baseline, metric: Metric, value: &Value) -> ColorId {
    let number = value.primary_value();
    if baseline.is_delta() {
        change_tendency_color(number, metric.tendency())
    } else if metric.is_coverage() {
        coverage_level_color(number)
    } else {
        ColorId::White
    }
}
