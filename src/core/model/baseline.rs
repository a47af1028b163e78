//! Baselines of the coverage computation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CovgateError, Result};

/// The scope or comparison basis a measurement is taken against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Baseline {
    /// Coverage of the whole project
    #[default]
    Project,
    /// Difference between the project coverage of the current and the reference build
    ProjectDelta,
    /// Coverage of the modified lines
    ModifiedLines,
    /// Difference between the modified lines coverage and the modified files coverage
    ModifiedLinesDelta,
    /// Coverage of the modified files
    ModifiedFiles,
    /// Difference between the modified files coverage of the current and the reference build
    ModifiedFilesDelta,
    /// Coverage changes outside of the modified code
    Indirect,
}

impl Baseline {
    /// All baselines in their natural order.
    pub const ALL: [Baseline; 7] = [
        Baseline::Project,
        Baseline::ProjectDelta,
        Baseline::ModifiedLines,
        Baseline::ModifiedLinesDelta,
        Baseline::ModifiedFiles,
        Baseline::ModifiedFilesDelta,
        Baseline::Indirect,
    ];

    /// Human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Baseline::Project => "Overall project",
            Baseline::ProjectDelta => "Overall project (difference to reference job)",
            Baseline::ModifiedLines => "Modified code lines",
            Baseline::ModifiedLinesDelta => "Modified code lines (difference to modified files)",
            Baseline::ModifiedFiles => "Modified files",
            Baseline::ModifiedFilesDelta => "Modified files (difference to reference job)",
            Baseline::Indirect => "Indirect changes",
        }
    }

    /// Anchor of the report section that shows this baseline.
    pub const fn url(self) -> &'static str {
        match self {
            Baseline::Project | Baseline::ProjectDelta => "#overview",
            Baseline::ModifiedLines | Baseline::ModifiedLinesDelta => "#modifiedLinesCoverage",
            Baseline::ModifiedFiles | Baseline::ModifiedFilesDelta => "#modifiedFilesCoverage",
            Baseline::Indirect => "#indirectCoverage",
        }
    }

    /// Returns true if values of this baseline are signed differences.
    pub const fn is_delta(self) -> bool {
        matches!(
            self,
            Baseline::ProjectDelta | Baseline::ModifiedLinesDelta | Baseline::ModifiedFilesDelta
        )
    }

    /// Identifier of the enum constant, e.g. `PROJECT_DELTA`.
    pub const fn identifier(self) -> &'static str {
        match self {
            Baseline::Project => "PROJECT",
            Baseline::ProjectDelta => "PROJECT_DELTA",
            Baseline::ModifiedLines => "MODIFIED_LINES",
            Baseline::ModifiedLinesDelta => "MODIFIED_LINES_DELTA",
            Baseline::ModifiedFiles => "MODIFIED_FILES",
            Baseline::ModifiedFilesDelta => "MODIFIED_FILES_DELTA",
            Baseline::Indirect => "INDIRECT",
        }
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Baseline {
    type Err = CovgateError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Baseline::ALL
            .iter()
            .copied()
            .find(|baseline| baseline.identifier() == normalized)
            .ok_or_else(|| {
                let expected = Baseline::ALL
                    .iter()
                    .map(|baseline| baseline.identifier())
                    .collect::<Vec<_>>()
                    .join(", ");
                CovgateError::unknown_value("baseline", format!("one of {expected}"), s)
            })
    }
}
