//! Coverage model: metrics, baselines, values and statistics snapshots.

pub mod baseline;
pub mod color;
pub mod formatter;
pub mod metric;
pub mod statistics;
pub mod value;

pub use baseline::Baseline;
pub use color::{display_color, ColorId};
pub use metric::{Metric, MetricKind, Tendency};
pub use statistics::{CoverageStatistics, CoverageStatisticsBuilder, StatisticsLookup};
pub use value::Value;
