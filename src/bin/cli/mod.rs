//! CLI Module Organization
//!
//! This module organizes the CLI functionality into cohesive sub-modules:
//! - args: CLI argument structures and configuration types
//! - commands: Command execution logic
//! - config_layer: Configuration layer management and merging
//! - output: Terminal display of results

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
