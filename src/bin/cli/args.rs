//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the covgate CLI binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use covgate_rs::charts::AxisType;
use covgate_rs::core::quality::QualityGate;
use covgate_rs::io::reports::ReportFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Coverage quality gate evaluation
#[derive(Parser)]
#[command(name = "covgate")]
#[command(version = VERSION)]
#[command(about = "Covgate - Coverage Quality Gates for CI Pipelines")]
#[command(long_about = "
Evaluate coverage quality gates against the statistics of a build and
render the results as text, JSON or YAML. Trend charts can be created
from a history of builds.

Common Usage:

  # Evaluate the gates of .covgate.yml against a statistics snapshot
  covgate evaluate coverage.json

  # Add gates on the command line (METRIC:BASELINE:THRESHOLD:CRITICALITY)
  covgate evaluate coverage.json --gate line:project:80:failure

  # Write the coverage API document
  covgate evaluate coverage.json --format json --output coverage-api.json

  # Create a trend chart of the last 20 builds
  covgate trend history.json --build-count 20

  # List metrics and baselines usable in quality gates
  covgate list-metrics
  covgate list-baselines
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate quality gates against a statistics snapshot
    Evaluate(EvaluateArgs),

    /// Create a trend chart model from a build history
    Trend(TrendArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with starter quality gates
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a covgate configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),

    /// List metrics that can be used in quality gates
    #[command(name = "list-metrics")]
    ListMetrics,

    /// List baselines that can be used in quality gates
    #[command(name = "list-baselines")]
    ListBaselines,
}

/// Output formats for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored table on the terminal, plain log in files
    Text,
    /// Coverage API document as JSON
    Json,
    /// Coverage API document as YAML
    Yaml,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Yaml => ReportFormat::Yaml,
        }
    }
}

/// Domain axis of trend charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// One point per build
    Build,
    /// One point per day
    Date,
}

impl From<AxisArg> for AxisType {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Build => AxisType::Build,
            AxisArg::Date => AxisType::Date,
        }
    }
}

#[derive(Args)]
pub struct EvaluateArgs {
    /// Statistics snapshot (JSON or YAML)
    #[arg(value_name = "STATISTICS")]
    pub statistics: PathBuf,

    /// Configuration file (default: .covgate.yml or .covgate.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub gates: QualityGateArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the reference build (overrides the snapshot)
    #[arg(long)]
    pub reference_build: Option<String>,
}

/// Quality gate configuration for CI/CD integration
#[derive(Args)]
pub struct QualityGateArgs {
    /// Additional quality gate as METRIC[:BASELINE[:THRESHOLD[:CRITICALITY]]]
    #[arg(short, long = "gate", value_name = "GATE")]
    pub gate: Vec<QualityGate>,

    /// Fail with a non-zero exit code if the result is unstable
    #[arg(long)]
    pub fail_on_unstable: bool,
}

#[derive(Args)]
pub struct TrendArgs {
    /// Build history (JSON or YAML), any order
    #[arg(value_name = "HISTORY")]
    pub history: PathBuf,

    /// Configuration file (default: .covgate.yml or .covgate.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chart software metrics instead of coverage
    #[arg(long)]
    pub metrics: bool,

    /// Maximum number of builds to chart
    #[arg(long)]
    pub build_count: Option<usize>,

    /// Domain axis of the chart
    #[arg(long, value_enum)]
    pub axis: Option<AxisArg>,

    /// Write the chart model to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".covgate.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show every configured quality gate
    #[arg(long)]
    pub detailed: bool,
}
