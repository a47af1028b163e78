//! Listings of the selectable metrics and baselines.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use covgate_rs::core::model::{Baseline, Metric, MetricKind};

/// Row of the metric listing.
#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    identifier: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Kind")]
    kind: &'static str,
}

/// Row of the baseline listing.
#[derive(Tabled)]
struct BaselineRow {
    #[tabled(rename = "Baseline")]
    identifier: &'static str,
    #[tabled(rename = "Title")]
    title: &'static str,
    #[tabled(rename = "Delta")]
    delta: &'static str,
}

/// List all metrics usable in quality gates.
pub async fn list_metrics() -> anyhow::Result<()> {
    println!("{}", "📏 Metrics".bright_blue().bold());
    println!();

    let rows: Vec<MetricRow> = Metric::ALL
        .iter()
        .map(|metric| MetricRow {
            identifier: metric.identifier(),
            name: metric.display_name(),
            kind: match metric.kind() {
                MetricKind::Coverage => "coverage",
                MetricKind::Count => "count",
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    Ok(())
}

/// List all baselines usable in quality gates.
pub async fn list_baselines() -> anyhow::Result<()> {
    println!("{}", "📐 Baselines".bright_blue().bold());
    println!();

    let rows: Vec<BaselineRow> = Baseline::ALL
        .iter()
        .map(|baseline| BaselineRow {
            identifier: baseline.identifier(),
            title: baseline.title(),
            delta: if baseline.is_delta() { "yes" } else { "no" },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    Ok(())
}
