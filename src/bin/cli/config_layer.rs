//! Configuration Layer Management
//!
//! Layers the configuration in this order: defaults, configuration file
//! (explicit `--config` or an implicit `.covgate.yml` / `.covgate.yaml` in the
//! working directory), then CLI overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use covgate_rs::charts::AxisType;
use covgate_rs::core::config::CovgateConfig;
use covgate_rs::core::quality::QualityGate;
use tracing::debug;

use crate::cli::args::{EvaluateArgs, TrendArgs};

/// Trait for merging configuration layers
pub trait ConfigMerge<T> {
    /// Merge another configuration into this one, with the other taking priority
    fn merge_with(&mut self, other: T);
}

/// Convert CLI arguments to partial configuration overrides
pub trait FromCliArgs<T> {
    /// Create a partial configuration from CLI arguments
    fn from_cli_args(args: &T) -> Self;
}

/// Settings given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// Gates appended after the configured ones
    pub quality_gates: Vec<QualityGate>,
    /// Only ever switches the setting on
    pub fail_on_unstable: bool,
    /// Replaces the chart build count
    pub build_count: Option<usize>,
    /// Replaces the chart axis
    pub axis_type: Option<AxisType>,
}

impl FromCliArgs<EvaluateArgs> for CliOverrides {
    fn from_cli_args(args: &EvaluateArgs) -> Self {
        Self {
            quality_gates: args.gates.gate.clone(),
            fail_on_unstable: args.gates.fail_on_unstable,
            ..Self::default()
        }
    }
}

impl FromCliArgs<TrendArgs> for CliOverrides {
    fn from_cli_args(args: &TrendArgs) -> Self {
        Self {
            build_count: args.build_count,
            axis_type: args.axis.map(Into::into),
            ..Self::default()
        }
    }
}

impl ConfigMerge<CliOverrides> for CovgateConfig {
    fn merge_with(&mut self, other: CliOverrides) {
        self.quality_gates.extend(other.quality_gates);
        if other.fail_on_unstable {
            self.evaluation.fail_on_unstable = true;
        }
        if let Some(build_count) = other.build_count {
            self.chart.build_count = build_count;
        }
        if let Some(axis_type) = other.axis_type {
            self.chart.axis_type = axis_type;
        }
    }
}

/// Resolves the configuration file to use, if any.
fn config_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| CovgateConfig::discover(working_dir))
}

/// Loads a configuration file, or the defaults if `path` is `None`.
pub async fn load_configuration(path: Option<&Path>) -> anyhow::Result<CovgateConfig> {
    let Some(path) = path else {
        return Ok(CovgateConfig::default());
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
    let config = CovgateConfig::from_yaml_str(&content)
        .with_context(|| format!("Failed to parse configuration from {}", path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;
    Ok(config)
}

/// Builds the effective configuration for a command.
pub async fn build_layered_config(
    explicit: Option<&Path>,
    working_dir: &Path,
    overrides: CliOverrides,
) -> anyhow::Result<CovgateConfig> {
    let path = config_path(explicit, working_dir);
    if let Some(path) = &path {
        debug!("Using configuration file {}", path.display());
    }

    let mut config = load_configuration(path.as_deref()).await?;
    config.merge_with(overrides);

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covgate_rs::core::model::{Baseline, Metric};
    use covgate_rs::core::quality::Criticality;
    use tempfile::tempdir;

    #[test]
    fn overrides_append_gates_and_replace_chart_settings() {
        let mut config = CovgateConfig::sample();
        config.merge_with(CliOverrides {
            quality_gates: vec![QualityGate::for_metric(Metric::Mutation)],
            fail_on_unstable: true,
            build_count: Some(7),
            axis_type: Some(AxisType::Date),
        });

        assert_eq!(config.quality_gates.len(), 4);
        assert_eq!(config.quality_gates[3].metric, Metric::Mutation);
        assert!(config.evaluation.fail_on_unstable);
        assert_eq!(config.chart.build_count, 7);
        assert_eq!(config.chart.axis_type, AxisType::Date);
    }

    #[test]
    fn empty_overrides_keep_file_settings() {
        let mut config = CovgateConfig::sample();
        config.evaluation.fail_on_unstable = true;
        config.merge_with(CliOverrides::default());
        assert!(config.evaluation.fail_on_unstable);
        assert_eq!(config, {
            let mut expected = CovgateConfig::sample();
            expected.evaluation.fail_on_unstable = true;
            expected
        });
    }

    #[tokio::test]
    async fn prefers_explicit_config_over_implicit_one() {
        let temp = tempdir().unwrap();
        let implicit = temp.path().join(".covgate.yml");
        std::fs::write(&implicit, "quality_gates:\n  - metric: LINE\n").unwrap();
        let explicit = temp.path().join("custom.yml");
        std::fs::write(
            &explicit,
            "quality_gates:\n  - metric: BRANCH\n    criticality: FAILURE\n",
        )
        .unwrap();

        let config =
            build_layered_config(Some(&explicit), temp.path(), CliOverrides::default())
                .await
                .unwrap();
        assert_eq!(
            config.quality_gates,
            vec![QualityGate::new(0.0, Metric::Branch, Baseline::Project, Criticality::Failure)]
        );

        let config = build_layered_config(None, temp.path(), CliOverrides::default())
            .await
            .unwrap();
        assert_eq!(config.quality_gates, vec![QualityGate::for_metric(Metric::Line)]);
    }

    #[tokio::test]
    async fn falls_back_to_defaults_without_file() {
        let temp = tempdir().unwrap();
        let config = build_layered_config(None, temp.path(), CliOverrides::default())
            .await
            .unwrap();
        assert_eq!(config, CovgateConfig::default());
    }

    #[tokio::test]
    async fn rejects_invalid_overrides() {
        let temp = tempdir().unwrap();
        let overrides = CliOverrides {
            build_count: Some(0),
            ..CliOverrides::default()
        };
        let err = build_layered_config(None, temp.path(), overrides)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }
}
