//! Terminal display functions for evaluation results
//!
//! This module contains functions for displaying quality gate results
//! in the terminal with colored output and formatting.

use owo_colors::{OwoColorize, Rgb};
use tabled::{settings::Style as TableStyle, Table, Tabled};

use covgate_rs::core::model::{
    display_color, formatter, ColorId, CoverageStatistics, StatisticsLookup,
};
use covgate_rs::core::quality::{QualityGateOutcome, QualityGateStatus};
use covgate_rs::Evaluation;

/// Row of the quality gate table.
#[derive(Tabled)]
struct GateRow {
    #[tabled(rename = "Quality Gate")]
    quality_gate: String,
    #[tabled(rename = "Criticality")]
    criticality: String,
    #[tabled(rename = "Threshold")]
    threshold: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Result")]
    result: String,
}

/// Terminal color of a semantic value color.
pub fn terminal_color(color: ColorId) -> Rgb {
    let hex = color.fill_color().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(u8::MAX)
    };
    Rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Colors a status label by severity.
pub fn colored_status(status: QualityGateStatus) -> String {
    let label = status.label();
    match status {
        QualityGateStatus::Inactive => label.dimmed().to_string(),
        QualityGateStatus::Passed => label.bright_green().to_string(),
        QualityGateStatus::Note => label.bright_cyan().to_string(),
        QualityGateStatus::Warning => label.yellow().bold().to_string(),
        QualityGateStatus::Failed => label.red().bold().to_string(),
    }
}

fn colored_actual(outcome: &QualityGateOutcome, statistics: &CoverageStatistics) -> String {
    match statistics.value(outcome.gate.baseline, outcome.gate.metric) {
        Some(value) => {
            let color = display_color(outcome.gate.baseline, outcome.gate.metric, &value);
            outcome.actual.color(terminal_color(color)).to_string()
        }
        None => outcome.actual.dimmed().to_string(),
    }
}

/// Display the outcome of every quality gate and the overall result.
pub fn display_evaluation(evaluation: &Evaluation, statistics: &CoverageStatistics) {
    println!("{}", "📊 Quality Gate Evaluation".bright_blue().bold());
    if let Some(reference) = evaluation.api.reference_build() {
        println!("   {} {}", "Reference build:".dimmed(), reference.cyan());
    }
    println!();

    let outcomes = evaluation.result.outcomes();
    if outcomes.is_empty() {
        println!("{}", "⚪ No quality gates have been set - skipping".dimmed());
        return;
    }

    let rows: Vec<GateRow> = outcomes
        .iter()
        .map(|outcome| GateRow {
            quality_gate: outcome.gate.name(),
            criticality: outcome.gate.criticality.to_string(),
            threshold: formatter::format_threshold(outcome.gate.threshold),
            actual: colored_actual(outcome, statistics),
            result: colored_status(outcome.status),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
    println!();

    display_overall_result(evaluation.result.overall_status());
}

/// Display a one-line summary of the overall status.
pub fn display_overall_result(status: QualityGateStatus) {
    let headline = match status {
        QualityGateStatus::Inactive => "⚪ No quality gate could be evaluated".dimmed().to_string(),
        QualityGateStatus::Passed => "✅ All quality gates have been passed"
            .bright_green()
            .bold()
            .to_string(),
        QualityGateStatus::Note => "📝 All quality gates passed with notes"
            .bright_cyan()
            .bold()
            .to_string(),
        QualityGateStatus::Warning => "⚠️ Quality gates missed: build is unstable"
            .yellow()
            .bold()
            .to_string(),
        QualityGateStatus::Failed => "❌ Quality gates missed: build has failed"
            .red()
            .bold()
            .to_string(),
    };
    println!("{}", headline);
    println!("   {} {}", "Overall result:".dimmed(), colored_status(status));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_colors_follow_fill_colors() {
        let Rgb(r, g, b) = terminal_color(ColorId::White);
        assert_eq!((r, g, b), (255, 255, 255));
        let Rgb(r, g, b) = terminal_color(ColorId::Excellent);
        assert_eq!((r, g, b), (0x1b, 0x9e, 0x4b));
    }

    #[test]
    fn status_labels_survive_coloring() {
        for status in [
            QualityGateStatus::Inactive,
            QualityGateStatus::Passed,
            QualityGateStatus::Note,
            QualityGateStatus::Warning,
            QualityGateStatus::Failed,
        ] {
            assert!(colored_status(status).contains(status.label()));
        }
    }
}
