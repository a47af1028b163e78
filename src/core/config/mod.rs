//! Configuration types and management for covgate-rs.
//!
//! A configuration file lists the quality gates to evaluate plus a few
//! settings for evaluation and trend charts. Files are YAML; CLI flags are
//! layered on top by the binary.

pub mod validation;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::charts::ChartModelConfiguration;
use crate::core::errors::{CovgateError, Result, ResultExt};
use crate::core::quality::QualityGate;

pub use validation::validate_positive_usize;

/// File names tried when no configuration file is given explicitly.
pub const IMPLICIT_CONFIG_FILES: [&str; 2] = [".covgate.yml", ".covgate.yaml"];

/// Main configuration for covgate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CovgateConfig {
    /// Quality gates in evaluation order
    #[serde(default)]
    pub quality_gates: Vec<QualityGate>,

    /// Evaluation settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Trend chart settings
    #[serde(default)]
    pub chart: ChartModelConfiguration,
}

impl CovgateConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml_str(&content).with_context(|| path.display().to_string())
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Finds `.covgate.yml` or `.covgate.yaml` in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// A starter configuration with one gate per severity.
    pub fn sample() -> Self {
        use crate::core::model::{Baseline, Metric};
        use crate::core::quality::Criticality;

        Self {
            quality_gates: vec![
                QualityGate::new(60.0, Metric::Line, Baseline::Project, Criticality::Unstable),
                QualityGate::new(
                    80.0,
                    Metric::Line,
                    Baseline::ModifiedLines,
                    Criticality::Failure,
                ),
                QualityGate::new(0.0, Metric::Branch, Baseline::ProjectDelta, Criticality::Note),
            ],
            ..Self::default()
        }
    }

    /// Appends gates after the configured ones.
    pub fn with_additional_gates(mut self, gates: impl IntoIterator<Item = QualityGate>) -> Self {
        self.quality_gates.extend(gates);
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        for (index, gate) in self.quality_gates.iter().enumerate() {
            gate.validate().map_err(|e| {
                CovgateError::config_field(
                    format!("Invalid quality gate '{}': {e}", gate.name()),
                    format!("quality_gates[{index}]"),
                )
            })?;
        }

        self.evaluation.validate()?;
        self.chart.validate()?;
        Ok(())
    }
}

/// Settings that control how an evaluation affects the process outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Treat an unstable result like a failure
    #[serde(default)]
    pub fail_on_unstable: bool,

    /// Name of the evaluation log
    #[serde(default = "EvaluationConfig::default_log_name")]
    pub log_name: String,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            fail_on_unstable: false,
            log_name: Self::default_log_name(),
        }
    }
}

impl EvaluationConfig {
    fn default_log_name() -> String {
        "Quality Gates".to_string()
    }

    /// Validate evaluation settings
    pub fn validate(&self) -> Result<()> {
        if self.log_name.trim().is_empty() {
            return Err(CovgateError::config_field(
                "log_name cannot be empty",
                "evaluation.log_name",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
