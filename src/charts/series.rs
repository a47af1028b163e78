//! Extraction of chart series from a build history.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::validate_positive_usize;
use crate::core::errors::Result;
use crate::core::model::{Baseline, CoverageStatistics, Metric, StatisticsLookup, Value};

/// Domain axis of a trend chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisType {
    /// One point per build, labelled with the build name
    #[default]
    Build,
    /// One point per day, builds of the same day are averaged
    Date,
}

/// Settings of a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModelConfiguration {
    /// Maximum number of builds to chart, newest first
    #[serde(default = "ChartModelConfiguration::default_build_count")]
    pub build_count: usize,

    /// Domain axis of the chart
    #[serde(default)]
    pub axis_type: AxisType,
}

impl Default for ChartModelConfiguration {
    fn default() -> Self {
        Self {
            build_count: Self::default_build_count(),
            axis_type: AxisType::default(),
        }
    }
}

impl ChartModelConfiguration {
    const fn default_build_count() -> usize {
        50
    }

    /// Creates a configuration for the given number of builds.
    pub fn new(build_count: usize, axis_type: AxisType) -> Self {
        Self {
            build_count,
            axis_type,
        }
    }

    /// Validate chart settings
    pub fn validate(&self) -> Result<()> {
        validate_positive_usize(self.build_count, "chart.build_count")
    }
}

/// Statistics of one build in a build history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Build number
    pub number: u32,
    /// Display name, `#<number>` if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Start time of the build
    pub timestamp: DateTime<Utc>,
    /// Coverage statistics of the build
    pub statistics: CoverageStatistics,
}

impl BuildResult {
    /// Creates a result without a custom display name.
    pub fn new(number: u32, timestamp: DateTime<Utc>, statistics: CoverageStatistics) -> Self {
        Self {
            number,
            name: None,
            timestamp,
            statistics,
        }
    }

    /// Name shown on the build axis.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.number))
    }
}

/// Series values aligned with a list of domain axis labels.
///
/// A `None` entry marks a point where the metric was not computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinesDataSet {
    domain_axis_labels: Vec<String>,
    build_numbers: Vec<u32>,
    series: BTreeMap<String, Vec<Option<f64>>>,
}

impl LinesDataSet {
    /// Labels of the domain axis, oldest first.
    pub fn domain_axis_labels(&self) -> &[String] {
        &self.domain_axis_labels
    }

    /// Build numbers per point; empty for the date axis.
    pub fn build_numbers(&self) -> &[u32] {
        &self.build_numbers
    }

    /// Number of points on the domain axis.
    pub fn len(&self) -> usize {
        self.domain_axis_labels.len()
    }

    /// Returns true if the data set has no points.
    pub fn is_empty(&self) -> bool {
        self.domain_axis_labels.is_empty()
    }

    /// Returns true if the data set has at least one point.
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if a series with the given id exists.
    pub fn contains_series(&self, id: &str) -> bool {
        self.series.contains_key(id)
    }

    /// Values of a series.
    pub fn series(&self, id: &str) -> Option<&[Option<f64>]> {
        self.series.get(id).map(Vec::as_slice)
    }

    /// Ids of all series.
    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Smallest value of all series, 0 for empty data sets.
    pub fn minimum_value(&self) -> f64 {
        self.values().reduce(f64::min).unwrap_or(0.0)
    }

    /// Largest value of all series, 0 for empty data sets.
    pub fn maximum_value(&self) -> f64 {
        self.values().reduce(f64::max).unwrap_or(0.0)
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.values().flatten().filter_map(|value| *value)
    }
}

/// One point of the domain axis before series alignment.
struct Point {
    label: String,
    build_number: Option<u32>,
    values: BTreeMap<String, f64>,
}

/// Builds chart series from the project baseline of each build.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoverageSeriesBuilder;

impl CoverageSeriesBuilder {
    /// Series id of line coverage
    pub const LINE_COVERAGE: &'static str = "line";
    /// Series id of branch coverage
    pub const BRANCH_COVERAGE: &'static str = "branch";
    /// Series id of mutation coverage
    pub const MUTATION_COVERAGE: &'static str = "mutation";
    /// Series id of test strength
    pub const TEST_STRENGTH: &'static str = "test-strength";
    /// Series id of MC/DC pair coverage
    pub const MCDC_PAIR_COVERAGE: &'static str = "mcdc-pair";
    /// Series id of method coverage
    pub const METHOD_COVERAGE: &'static str = "method";
    /// Series id of function call coverage
    pub const FUNCTION_CALL_COVERAGE: &'static str = "function-call";
    /// Series id of cyclomatic complexity
    pub const CYCLOMATIC_COMPLEXITY: &'static str = "cyclomatic-complexity";
    /// Series id of cognitive complexity
    pub const COGNITIVE_COMPLEXITY: &'static str = "cognitive-complexity";
    /// Series id of N-Path complexity
    pub const NPATH_COMPLEXITY: &'static str = "npath-complexity";
    /// Series id of non commenting source statements
    pub const NCSS: &'static str = "ncss";

    const CHARTED_METRICS: [Metric; 11] = [
        Metric::Line,
        Metric::Branch,
        Metric::Mutation,
        Metric::TestStrength,
        Metric::McdcPair,
        Metric::Method,
        Metric::FunctionCall,
        Metric::CyclomaticComplexity,
        Metric::CognitiveComplexity,
        Metric::NpathComplexity,
        Metric::Ncss,
    ];

    /// Creates a new builder.
    pub fn new() -> Self {
        Self
    }

    /// Values of all charted metrics of one build, keyed by series id.
    ///
    /// Coverage percentages are rounded to two decimals.
    pub fn compute_series(&self, statistics: &CoverageStatistics) -> BTreeMap<String, f64> {
        Self::CHARTED_METRICS
            .iter()
            .filter_map(|&metric| {
                let value = match statistics.value(Baseline::Project, metric)? {
                    Value::Coverage { covered, missed } => {
                        round(Value::covered_percentage(covered, missed))
                    }
                    Value::Count(count) => count as f64,
                    Value::Difference(_) => return None,
                };
                Some((metric.tag_name(), value))
            })
            .collect()
    }

    /// Creates the data set for `results`, given newest build first.
    ///
    /// At most `build_count` builds are used; the data set is ordered oldest first.
    pub fn create_data_set(
        &self,
        configuration: &ChartModelConfiguration,
        results: &[BuildResult],
    ) -> LinesDataSet {
        let mut builds: Vec<&BuildResult> =
            results.iter().take(configuration.build_count).collect();
        builds.reverse();

        let points = match configuration.axis_type {
            AxisType::Build => builds
                .into_iter()
                .map(|build| Point {
                    label: build.display_name(),
                    build_number: Some(build.number),
                    values: self.compute_series(&build.statistics),
                })
                .collect(),
            AxisType::Date => self.points_per_day(&builds),
        };

        Self::align(points)
    }

    fn points_per_day(&self, builds: &[&BuildResult]) -> Vec<Point> {
        let mut days: BTreeMap<NaiveDate, BTreeMap<String, Vec<f64>>> = BTreeMap::new();
        for build in builds {
            let day = days.entry(build.timestamp.date_naive()).or_default();
            for (id, value) in self.compute_series(&build.statistics) {
                day.entry(id).or_default().push(value);
            }
        }

        days.into_iter()
            .map(|(date, series)| Point {
                label: date.format("%Y-%m-%d").to_string(),
                build_number: None,
                values: series
                    .into_iter()
                    .map(|(id, values)| {
                        let average = values.iter().sum::<f64>() / values.len() as f64;
                        (id, round(average))
                    })
                    .collect(),
            })
            .collect()
    }

    fn align(points: Vec<Point>) -> LinesDataSet {
        let mut data_set = LinesDataSet::default();
        let ids: BTreeSet<String> = points
            .iter()
            .flat_map(|point| point.values.keys().cloned())
            .collect();

        for id in ids {
            let values = points
                .iter()
                .map(|point| point.values.get(&id).copied())
                .collect();
            data_set.series.insert(id, values);
        }
        for point in points {
            if let Some(number) = point.build_number {
                data_set.build_numbers.push(number);
            }
            data_set.domain_axis_labels.push(point.label);
        }
        data_set
    }
}

fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
