//! Quality gate definitions, evaluation and results.
//!
//! A [`QualityGateEvaluator`] checks an ordered list of [`QualityGate`]s
//! against a statistics snapshot. Each gate yields one outcome, and the
//! overall status of the [`QualityGateResult`] is the most severe status of
//! all outcomes. Escalations to WARNING or FAILED are reported to an injected
//! [`ResultHandler`].

pub mod evaluator;
pub mod gate;
pub mod handler;
pub mod log;
pub mod result;
pub mod status;

pub use evaluator::QualityGateEvaluator;
pub use gate::{Criticality, QualityGate};
pub use handler::{BuildStatusHandler, BuildVerdict, NullResultHandler, ResultHandler};
pub use log::EvaluationLog;
pub use result::{QualityGateOutcome, QualityGateResult};
pub use status::QualityGateStatus;
