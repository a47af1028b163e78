//! # Covgate-RS: Coverage Quality Gate Engine
//!
//! Evaluates declarative quality gates against per-build coverage statistics
//! and exposes the outcome to logs, a JSON API document, trend charts and a
//! build status handler.
//!
//! - **Model**: metrics, baselines, values and immutable statistics snapshots
//! - **Quality gates**: threshold rules with NOTE, UNSTABLE or FAILURE criticality
//! - **Evaluation**: ordered, deterministic results with max-wins aggregation
//! - **Reporting**: API documents, trend chart models and text reports
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        API Layer                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Core Engine     │  Charts          │  I/O & Reports        │
//! │                  │                  │                       │
//! │ • Model          │ • Series builder │ • Statistics loader   │
//! │ • Quality gates  │ • Trend chart    │ • History loader      │
//! │ • Config         │                  │ • Text/JSON/YAML      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use covgate_rs::core::model::{Baseline, CoverageStatistics, Metric, Value};
//! use covgate_rs::core::quality::{
//!     Criticality, EvaluationLog, NullResultHandler, QualityGate, QualityGateEvaluator,
//!     QualityGateStatus,
//! };
//!
//! let statistics = CoverageStatistics::builder()
//!     .value(Baseline::Project, Metric::Line, Value::coverage(5, 5))
//!     .build();
//! let gates = vec![QualityGate::new(
//!     60.0,
//!     Metric::Line,
//!     Baseline::Project,
//!     Criticality::Unstable,
//! )];
//!
//! let evaluator = QualityGateEvaluator::new(gates, &statistics);
//! let mut log = EvaluationLog::new("Quality Gates");
//! let result = evaluator.evaluate(&mut NullResultHandler, &mut log);
//!
//! assert_eq!(result.overall_status(), QualityGateStatus::Warning);
//! assert_eq!(
//!     result.messages()[0],
//!     "[Overall project - Line Coverage]: «Unstable» - (Actual value: 50.00%, Quality gate: 60.00)"
//! );
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core evaluation engine modules
pub mod core {
    //! Core model, quality gates and configuration.

    pub mod config;
    pub mod errors;
    pub mod model;
    pub mod quality;
}

// Trend charts
pub mod charts {
    //! Trend chart models built from a build history.

    pub mod series;
    pub mod trend;

    pub use series::{
        AxisType, BuildResult, ChartModelConfiguration, CoverageSeriesBuilder, LinesDataSet,
    };
    pub use trend::{CoverageTrendChart, FilledMode, LineSeries, LinesChartModel, StackedMode};
}

// I/O and reporting
pub mod io {
    //! Loading of input files and report generation.

    pub mod loader;
    pub mod reports;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod coverage_api;
    pub mod engine;
}

// Re-export primary types for convenience
pub use api::coverage_api::CoverageApi;
pub use api::engine::{CovgateEngine, Evaluation};
pub use core::config::CovgateConfig;
pub use core::errors::{CovgateError, Result, ResultExt};
pub use core::quality::{QualityGate, QualityGateEvaluator, QualityGateResult, QualityGateStatus};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
