//! Trend chart command.

use anyhow::Context;
use tracing::info;

use covgate_rs::io::loader;
use covgate_rs::CovgateEngine;

use crate::cli::args::TrendArgs;
use crate::cli::config_layer::{build_layered_config, CliOverrides, FromCliArgs};
use crate::cli::output::write_output;

/// Create the chart model of a build history and write it as JSON.
pub async fn trend_command(args: TrendArgs) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let overrides = CliOverrides::from_cli_args(&args);
    let config = build_layered_config(args.config.as_deref(), &working_dir, overrides).await?;
    let engine = CovgateEngine::new(config)?;

    let history = loader::load_history(&args.history)
        .await
        .with_context(|| format!("Failed to load build history from {}", args.history.display()))?;
    info!("Creating trend chart of {} builds", history.len());

    let model = engine.trend_chart(&history, args.metrics);
    write_output(&model.to_json()?, args.output.as_deref()).await
}
