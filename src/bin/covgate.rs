//! Covgate CLI - Coverage Quality Gates for CI Pipelines
//!
//! Evaluates quality gates against coverage statistics snapshots, writes the
//! coverage API document and creates trend chart models.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging; stdout is reserved for reports.
    // RUST_LOG takes precedence over --verbose.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Evaluate(args) => {
            cli::evaluate_command(args).await?;
        }
        Commands::Trend(args) => {
            cli::trend_command(args).await?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config().await?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args).await?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args).await?;
        }
        Commands::ListMetrics => {
            cli::list_metrics().await?;
        }
        Commands::ListBaselines => {
            cli::list_baselines().await?;
        }
    }

    Ok(())
}
