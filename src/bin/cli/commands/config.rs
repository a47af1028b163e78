//! Configuration management commands.
//!
//! This module contains commands for managing covgate configuration files,
//! including initialization, validation, and printing defaults.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use covgate_rs::core::config::CovgateConfig;
use covgate_rs::core::model::formatter;

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_layer::load_configuration;

/// Row of the configured quality gates table.
#[derive(Tabled)]
struct GateConfigRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Baseline")]
    baseline: String,
    #[tabled(rename = "Threshold")]
    threshold: String,
    #[tabled(rename = "Criticality")]
    criticality: String,
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default covgate configuration".dimmed());
    println!("{}", "# Save this to .covgate.yml and add quality gates".dimmed());
    println!(
        "{}",
        "# Usage: covgate evaluate --config your-config.yml coverage.json".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&CovgateConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with starter quality gates
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let yaml_content = serde_yaml::to_string(&CovgateConfig::sample())?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Adjust the quality gates to the coverage of your project");
    println!(
        "   2. Evaluate a build with: {}",
        format!(
            "covgate evaluate --config {} coverage.json",
            args.output.display()
        )
        .cyan()
    );
    println!();
    println!("{}", "🔧 Key settings you can customize:".bright_blue().bold());

    /// Row type for the configuration tips table.
    #[derive(Tabled)]
    struct CustomizationRow {
        setting: &'static str,
        description: &'static str,
    }

    let customization_rows = vec![
        CustomizationRow {
            setting: "quality_gates[].metric",
            description: "Metric to check, see 'covgate list-metrics'",
        },
        CustomizationRow {
            setting: "quality_gates[].baseline",
            description: "Baseline of the value, see 'covgate list-baselines'",
        },
        CustomizationRow {
            setting: "quality_gates[].threshold",
            description: "Minimum value that passes the gate (default: 0)",
        },
        CustomizationRow {
            setting: "quality_gates[].criticality",
            description: "NOTE, UNSTABLE or FAILURE (default: UNSTABLE)",
        },
        CustomizationRow {
            setting: "evaluation.fail_on_unstable",
            description: "Exit with an error on unstable results (default: false)",
        },
        CustomizationRow {
            setting: "chart.build_count",
            description: "Number of builds in trend charts (default: 50)",
        },
        CustomizationRow {
            setting: "chart.axis_type",
            description: "BUILD or DATE domain axis (default: BUILD)",
        },
    ];

    let mut table = Table::new(customization_rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a covgate configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = match load_configuration(Some(&args.config)).await {
        Ok(config) => {
            println!("{}", "✅ Configuration file is valid!".bright_green().bold());
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {:#}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Use metric and baseline identifiers like LINE or MODIFIED_LINES");
            println!("   • Ensure thresholds are numbers and chart.build_count is positive");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'covgate print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {:#}", e));
        }
    };

    display_config_summary(&config);

    if args.detailed && !config.quality_gates.is_empty() {
        println!("{}", "🔧 Quality Gates".bright_blue().bold());
        println!();

        let rows: Vec<GateConfigRow> = config
            .quality_gates
            .iter()
            .map(|gate| GateConfigRow {
                metric: gate.metric.display_name().to_string(),
                baseline: gate.baseline.title().to_string(),
                threshold: formatter::format_threshold(gate.threshold),
                criticality: gate.criticality.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(TableStyle::rounded());
        println!("{}", table);
    }

    if config.quality_gates.is_empty() {
        println!();
        println!("{}", "💡 Recommendations:".bright_blue().bold());
        println!("   ⚪ No quality gates configured, every evaluation will be skipped");
    }

    Ok(())
}

fn display_config_summary(config: &CovgateConfig) {
    println!("{}", "⚙️ Configuration Summary".bright_blue().bold());
    println!(
        "   {} {}",
        "Quality gates:".dimmed(),
        config.quality_gates.len().to_string().cyan()
    );
    println!(
        "   {} {}",
        "Fail on unstable:".dimmed(),
        config.evaluation.fail_on_unstable.to_string().cyan()
    );
    println!(
        "   {} {}",
        "Log name:".dimmed(),
        config.evaluation.log_name.cyan()
    );
    println!(
        "   {} {} builds, {:?} axis",
        "Trend chart:".dimmed(),
        config.chart.build_count.to_string().cyan(),
        config.chart.axis_type
    );
    println!();
}
