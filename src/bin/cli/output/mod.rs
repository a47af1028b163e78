//! Output Formatting and Display Functions
//!
//! Colored terminal output for interactive use, plus writers that route
//! structured reports to stdout or a file.

mod display;

use std::path::Path;

use owo_colors::OwoColorize;

pub use display::{colored_status, display_evaluation, display_overall_result, terminal_color};

/// Write `content` to `output`, or print it to stdout if no file is given.
pub async fn write_output(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, content).await?;
            eprintln!(
                "{} {}",
                "📄 Report written to:".bright_green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
