//! Line chart model of the coverage trend.

use serde::{Deserialize, Serialize};

use super::series::{BuildResult, ChartModelConfiguration, CoverageSeriesBuilder, LinesDataSet};
use crate::core::errors::Result;
use crate::core::model::Metric;

/// Colors of the chart series.
mod palette {
    pub const GREEN: &str = "var(--green)";
    pub const DARK_GREEN: &str = "var(--dark-green)";
    pub const LIGHT_GREEN: &str = "var(--light-green)";
    pub const RED: &str = "var(--red)";
    pub const DARK_RED: &str = "var(--dark-red)";
    pub const LIGHT_RED: &str = "var(--light-red)";
    pub const ORANGE: &str = "var(--orange)";
}

/// How the area below a line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilledMode {
    /// Plain lines
    Lines,
    /// Area below the line is filled
    Filled,
}

/// How multiple series are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackedMode {
    /// Every series is drawn on its own
    SeparateLines,
}

/// A single line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    /// Legend entry
    pub name: String,
    /// CSS color of the line
    pub color: String,
    /// Stacking of the series
    pub stacked: StackedMode,
    /// Rendering of the area below the line
    pub filled: FilledMode,
    /// Values aligned with the domain axis, `null` marks gaps
    pub data: Vec<Option<f64>>,
}

/// Chart model ready to be serialized to JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinesChartModel {
    domain_axis_labels: Vec<String>,
    build_numbers: Vec<u32>,
    series: Vec<LineSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range_max: Option<f64>,
    continuous_range_axis: bool,
}

impl LinesChartModel {
    fn new(data_set: &LinesDataSet) -> Self {
        Self {
            domain_axis_labels: data_set.domain_axis_labels().to_vec(),
            build_numbers: data_set.build_numbers().to_vec(),
            ..Self::default()
        }
    }

    /// Labels of the domain axis, oldest first.
    pub fn domain_axis_labels(&self) -> &[String] {
        &self.domain_axis_labels
    }

    /// Build numbers per point; empty for the date axis.
    pub fn build_numbers(&self) -> &[u32] {
        &self.build_numbers
    }

    /// Series in legend order.
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    /// Lower bound of the range axis.
    pub fn range_min(&self) -> Option<f64> {
        self.range_min
    }

    /// Upper bound of the range axis.
    pub fn range_max(&self) -> Option<f64> {
        self.range_max
    }

    /// Returns true if the range axis does not start at zero.
    pub fn is_continuous_range_axis(&self) -> bool {
        self.continuous_range_axis
    }

    /// Returns true if the chart has no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Serializes the model to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

/// Builds the trend chart of coverage or software metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoverageTrendChart;

impl CoverageTrendChart {
    const COVERAGE_SERIES: [(&'static str, Metric, &'static str); 7] = [
        (CoverageSeriesBuilder::LINE_COVERAGE, Metric::Line, palette::GREEN),
        (CoverageSeriesBuilder::BRANCH_COVERAGE, Metric::Branch, palette::DARK_GREEN),
        (CoverageSeriesBuilder::MUTATION_COVERAGE, Metric::Mutation, palette::DARK_GREEN),
        (CoverageSeriesBuilder::TEST_STRENGTH, Metric::TestStrength, palette::LIGHT_GREEN),
        (CoverageSeriesBuilder::MCDC_PAIR_COVERAGE, Metric::McdcPair, palette::LIGHT_RED),
        (CoverageSeriesBuilder::METHOD_COVERAGE, Metric::Method, palette::RED),
        (CoverageSeriesBuilder::FUNCTION_CALL_COVERAGE, Metric::FunctionCall, palette::DARK_RED),
    ];

    const METRIC_SERIES: [(&'static str, Metric, &'static str); 4] = [
        (CoverageSeriesBuilder::CYCLOMATIC_COMPLEXITY, Metric::CyclomaticComplexity, palette::ORANGE),
        (CoverageSeriesBuilder::COGNITIVE_COMPLEXITY, Metric::CognitiveComplexity, palette::ORANGE),
        (CoverageSeriesBuilder::NPATH_COMPLEXITY, Metric::NpathComplexity, palette::ORANGE),
        (CoverageSeriesBuilder::NCSS, Metric::Ncss, palette::ORANGE),
    ];

    /// Creates a new chart builder.
    pub fn new() -> Self {
        Self
    }

    /// Creates the chart for `results`, given newest build first.
    ///
    /// With `metrics` set the chart shows complexity metrics, otherwise coverage.
    pub fn create(
        &self,
        results: &[BuildResult],
        configuration: &ChartModelConfiguration,
        metrics: bool,
    ) -> LinesChartModel {
        let data_set = CoverageSeriesBuilder::new().create_data_set(configuration, results);
        let mut model = LinesChartModel::new(&data_set);
        if data_set.is_empty() {
            return model;
        }

        let filled = if metrics {
            FilledMode::Lines
        } else {
            Self::filled_mode(&data_set)
        };

        model.continuous_range_axis = true;
        model.range_max = Some(if metrics {
            data_set.maximum_value()
        } else {
            100.0
        });
        model.range_min = Some(data_set.minimum_value());

        let series: &[(&str, Metric, &str)] = if metrics {
            &Self::METRIC_SERIES
        } else {
            &Self::COVERAGE_SERIES
        };
        for &(id, metric, color) in series {
            if let Some(data) = data_set.series(id) {
                model.series.push(LineSeries {
                    name: metric.display_name().to_string(),
                    color: color.to_string(),
                    stacked: StackedMode::SeparateLines,
                    filled,
                    data: data.to_vec(),
                });
            }
        }
        model
    }

    /// Areas are filled unless an MC/DC or function call series is present.
    fn filled_mode(data_set: &LinesDataSet) -> FilledMode {
        if data_set.contains_series(CoverageSeriesBuilder::MCDC_PAIR_COVERAGE)
            || data_set.contains_series(CoverageSeriesBuilder::FUNCTION_CALL_COVERAGE)
        {
            FilledMode::Lines
        } else {
            FilledMode::Filled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::AxisType;
    use crate::core::model::{Baseline, CoverageStatistics, Value};
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn result(number: u32, values: &[(Metric, Value)]) -> BuildResult {
        let statistics = CoverageStatistics::builder()
            .values(Baseline::Project, values.iter().copied())
            .build();
        let timestamp = Utc.with_ymd_and_hms(2024, 5, number, 12, 0, 0).unwrap();
        BuildResult::new(number, timestamp, statistics)
    }

    fn coverage_history() -> Vec<BuildResult> {
        vec![
            result(
                2,
                &[
                    (Metric::Line, Value::coverage(9, 1)),
                    (Metric::Branch, Value::coverage(3, 1)),
                    (Metric::CyclomaticComplexity, Value::count(40)),
                ],
            ),
            result(
                1,
                &[
                    (Metric::Line, Value::coverage(8, 2)),
                    (Metric::Branch, Value::coverage(1, 1)),
                    (Metric::CyclomaticComplexity, Value::count(30)),
                ],
            ),
        ]
    }

    #[test]
    fn creates_filled_coverage_chart() {
        let model = CoverageTrendChart::new().create(
            &coverage_history(),
            &ChartModelConfiguration::default(),
            false,
        );

        assert_eq!(model.domain_axis_labels(), &["#1", "#2"]);
        assert_eq!(model.build_numbers(), &[1, 2]);
        assert!(model.is_continuous_range_axis());
        assert_eq!(model.range_max(), Some(100.0));
        assert_relative_eq!(model.range_min().unwrap(), 30.0);

        let names: Vec<_> = model.series().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Line Coverage", "Branch Coverage"]);
        assert!(model.series().iter().all(|s| s.filled == FilledMode::Filled));
        assert_eq!(model.series()[0].data, vec![Some(80.0), Some(90.0)]);
        assert_eq!(model.series()[0].color, "var(--green)");
    }

    #[test]
    fn uses_lines_when_mcdc_coverage_is_present() {
        let mut history = coverage_history();
        history.push(result(3, &[(Metric::McdcPair, Value::coverage(1, 3))]));

        let model = CoverageTrendChart::new().create(
            &history,
            &ChartModelConfiguration::default(),
            false,
        );

        assert!(model.series().iter().all(|s| s.filled == FilledMode::Lines));
        assert_eq!(model.series().len(), 3);
        assert_eq!(model.series()[2].name, "MC/DC Pair Coverage");
    }

    #[test]
    fn creates_metrics_chart() {
        let model = CoverageTrendChart::new().create(
            &coverage_history(),
            &ChartModelConfiguration::new(5, AxisType::Build),
            true,
        );

        assert_eq!(model.series().len(), 1);
        let series = &model.series()[0];
        assert_eq!(series.name, "Cyclomatic Complexity");
        assert_eq!(series.filled, FilledMode::Lines);
        assert_eq!(series.data, vec![Some(30.0), Some(40.0)]);
        assert_eq!(model.range_max(), Some(40.0));
    }

    #[test]
    fn empty_history_creates_empty_model() {
        let model = CoverageTrendChart::new().create(&[], &ChartModelConfiguration::default(), false);
        assert!(model.is_empty());
        assert_eq!(model.range_max(), None);
        assert!(!model.is_continuous_range_axis());
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let model = CoverageTrendChart::new().create(
            &coverage_history(),
            &ChartModelConfiguration::default(),
            false,
        );
        let json: serde_json::Value = serde_json::from_str(&model.to_json().unwrap()).unwrap();

        assert_eq!(json["domainAxisLabels"][0], "#1");
        assert_eq!(json["rangeMax"], 100.0);
        assert_eq!(json["series"][0]["stacked"], "SEPARATE_LINES");
        assert_eq!(json["series"][0]["filled"], "FILLED");
        assert_eq!(json["continuousRangeAxis"], true);
    }
}
