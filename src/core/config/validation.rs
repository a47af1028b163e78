//! Validation helper functions for configuration types.

use crate::core::errors::{CovgateError, Result};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(CovgateError::validation(format!(
            "{} must be greater than 0",
            field
        ))
        .with_context(field));
    }
    Ok(())
}
