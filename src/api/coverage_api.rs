//! Remote API document with the coverage details of a build.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::errors::Result;
use crate::core::model::{formatter, Baseline, Metric, StatisticsLookup};
use crate::core::quality::{QualityGateResult, QualityGateStatus};

/// Outcome of a single quality gate as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateItemApi {
    /// Name of the gate
    pub quality_gate: String,
    /// Configured threshold
    pub threshold: f64,
    /// Formatted actual value
    pub value: String,
    /// Status of the gate
    pub result: QualityGateStatus,
}

/// Quality gate result as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateResultApi {
    /// Overall status of the evaluation
    pub overall_result: QualityGateStatus,
    /// One entry per evaluated gate, in evaluation order
    pub result_items: Vec<QualityGateItemApi>,
}

impl From<&QualityGateResult> for QualityGateResultApi {
    fn from(result: &QualityGateResult) -> Self {
        Self {
            overall_result: result.overall_status(),
            result_items: result
                .outcomes()
                .iter()
                .map(|outcome| QualityGateItemApi {
                    quality_gate: outcome.gate.name(),
                    threshold: outcome.gate.threshold,
                    value: outcome.actual.clone(),
                    result: outcome.status,
                })
                .collect(),
        }
    }
}

/// Coverage details of a build.
///
/// The statistics maps are keyed by metric tag name and contain only metrics
/// with a computed value. Delta maps carry signed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageApi {
    quality_gates: QualityGateResultApi,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_build: Option<String>,
    project_statistics: BTreeMap<String, String>,
    project_delta: BTreeMap<String, String>,
    modified_files_statistics: BTreeMap<String, String>,
    modified_files_delta: BTreeMap<String, String>,
    modified_lines_statistics: BTreeMap<String, String>,
    modified_lines_delta: BTreeMap<String, String>,
}

impl CoverageApi {
    /// Creates the document for a statistics snapshot and its evaluation.
    pub fn new(
        statistics: &impl StatisticsLookup,
        quality_gate_result: &QualityGateResult,
        reference_build: Option<String>,
    ) -> Self {
        let map = |baseline| map_to_strings(statistics, baseline);
        Self {
            quality_gates: quality_gate_result.into(),
            reference_build,
            project_statistics: map(Baseline::Project),
            project_delta: map(Baseline::ProjectDelta),
            modified_files_statistics: map(Baseline::ModifiedFiles),
            modified_files_delta: map(Baseline::ModifiedFilesDelta),
            modified_lines_statistics: map(Baseline::ModifiedLines),
            modified_lines_delta: map(Baseline::ModifiedLinesDelta),
        }
    }

    /// Quality gate section.
    pub fn quality_gates(&self) -> &QualityGateResultApi {
        &self.quality_gates
    }

    /// Name of the reference build.
    pub fn reference_build(&self) -> Option<&str> {
        self.reference_build.as_deref()
    }

    /// Values of the whole project.
    pub fn project_statistics(&self) -> &BTreeMap<String, String> {
        &self.project_statistics
    }

    /// Differences of the whole project to the reference build.
    pub fn project_delta(&self) -> &BTreeMap<String, String> {
        &self.project_delta
    }

    /// Values of the modified files.
    pub fn modified_files_statistics(&self) -> &BTreeMap<String, String> {
        &self.modified_files_statistics
    }

    /// Differences of the modified files to the reference build.
    pub fn modified_files_delta(&self) -> &BTreeMap<String, String> {
        &self.modified_files_delta
    }

    /// Values of the modified lines.
    pub fn modified_lines_statistics(&self) -> &BTreeMap<String, String> {
        &self.modified_lines_statistics
    }

    /// Differences of the modified lines to the modified files.
    pub fn modified_lines_delta(&self) -> &BTreeMap<String, String> {
        &self.modified_lines_delta
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

fn map_to_strings(statistics: &impl StatisticsLookup, baseline: Baseline) -> BTreeMap<String, String> {
    Metric::ALL
        .iter()
        .filter_map(|&metric| {
            statistics
                .value(baseline, metric)
                .map(|value| (metric.tag_name(), formatter::format(baseline, &value, metric)))
        })
        .collect()
}
