//! CLI Command Implementations
//!
//! This module contains all command implementations for the covgate CLI:
//! - evaluate: Quality gate evaluation of a statistics snapshot
//! - trend: Trend chart models of a build history
//! - config: Configuration management commands
//! - list: Listings of metrics and baselines

pub mod config;
pub mod evaluate;
pub mod list;
pub mod trend;

pub use config::{init_config, print_default_config, validate_config};
pub use evaluate::evaluate_command;
pub use list::{list_baselines, list_metrics};
pub use trend::trend_command;
