//! Report generation for quality gate evaluations.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::coverage_api::CoverageApi;
use crate::api::engine::Evaluation;
use crate::core::errors::{CovgateError, Result};

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text listing of the evaluation log
    #[default]
    Text,
    /// Coverage API document as JSON
    Json,
    /// Coverage API document as YAML
    Yaml,
}

/// Renders evaluations in the supported formats.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportGenerator;

impl ReportGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Renders `evaluation` as a string.
    pub fn render(&self, evaluation: &Evaluation, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text(evaluation)),
            ReportFormat::Json => evaluation.api.to_json(),
            ReportFormat::Yaml => self.render_yaml(&evaluation.api),
        }
    }

    /// Writes the rendered report to `output_path`.
    pub fn generate_report(
        &self,
        evaluation: &Evaluation,
        output_path: impl AsRef<Path>,
        format: ReportFormat,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let content = self.render(evaluation, format)?;
        std::fs::write(output_path, content).map_err(|e| {
            CovgateError::io(
                format!("Failed to write report: {}", output_path.display()),
                e,
            )
        })
    }

    fn render_text(&self, evaluation: &Evaluation) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "[{}]", evaluation.log.name());
        for line in evaluation.log.info_messages() {
            let _ = writeln!(text, "{line}");
        }
        for line in evaluation.log.error_messages() {
            let _ = writeln!(text, "ERROR: {line}");
        }
        let _ = writeln!(
            text,
            "Overall result: {}",
            evaluation.result.overall_status().label()
        );
        text
    }

    fn render_yaml(&self, api: &CoverageApi) -> Result<String> {
        serde_yaml::to_string(api).map_err(Into::into)
    }
}
