//! Quality gate evaluation command.

use anyhow::Context;
use owo_colors::OwoColorize;
use tracing::{debug, info};

use covgate_rs::core::quality::{BuildStatusHandler, BuildVerdict};
use covgate_rs::io::loader;
use covgate_rs::io::reports::{ReportFormat, ReportGenerator};
use covgate_rs::CovgateEngine;

use crate::cli::args::{EvaluateArgs, OutputFormat};
use crate::cli::config_layer::{build_layered_config, CliOverrides, FromCliArgs};
use crate::cli::output::{display_evaluation, write_output};

/// Evaluate the configured quality gates against a statistics snapshot.
///
/// Returns an error if the build failed, or if it is unstable and
/// `fail_on_unstable` is set, so CI pipelines see a non-zero exit code.
pub async fn evaluate_command(args: EvaluateArgs) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let overrides = CliOverrides::from_cli_args(&args);
    let config = build_layered_config(args.config.as_deref(), &working_dir, overrides).await?;
    let fail_on_unstable = config.evaluation.fail_on_unstable;

    let engine = CovgateEngine::new(config)?;
    let statistics = loader::load_statistics(&args.statistics)
        .await
        .with_context(|| format!("Failed to load statistics from {}", args.statistics.display()))?;
    debug!(
        "Loaded statistics with reference build {:?}",
        statistics.reference_build()
    );

    let mut handler = BuildStatusHandler::new();
    let evaluation =
        engine.evaluate_with_reference(&statistics, args.reference_build.clone(), &mut handler);

    match (args.format, args.output.as_deref()) {
        (OutputFormat::Text, None) => display_evaluation(&evaluation, &statistics),
        (format, output) => {
            let report = ReportGenerator::new().render(&evaluation, ReportFormat::from(format))?;
            write_output(&report, output).await?;
        }
    }

    let verdict = handler.verdict();
    info!("Build verdict: {:?}", verdict);
    match verdict {
        BuildVerdict::Failure => Err(anyhow::anyhow!(
            "Quality gates failed: overall result is {}",
            evaluation.result.overall_status()
        )),
        BuildVerdict::Unstable if fail_on_unstable => Err(anyhow::anyhow!(
            "Quality gates missed and --fail-on-unstable is set: overall result is {}",
            evaluation.result.overall_status()
        )),
        BuildVerdict::Unstable => {
            eprintln!(
                "{}",
                "⚠️ Build is unstable; use --fail-on-unstable to fail the pipeline".yellow()
            );
            Ok(())
        }
        BuildVerdict::Success => Ok(()),
    }
}
