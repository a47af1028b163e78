//! Status of quality gate evaluations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single quality gate or of a whole evaluation.
///
/// The declaration order is the severity order used for max-wins aggregation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityGateStatus {
    /// Not evaluated (no gates, or the value was not computed)
    #[default]
    Inactive,
    /// All evaluated gates have been passed
    Passed,
    /// A gate with criticality NOTE has been missed
    Note,
    /// A gate with criticality UNSTABLE has been missed
    Warning,
    /// A gate with criticality FAILURE has been missed
    Failed,
}

impl QualityGateStatus {
    /// Label used in quality gate messages.
    pub const fn label(self) -> &'static str {
        match self {
            QualityGateStatus::Inactive => "Not built",
            QualityGateStatus::Passed => "Success",
            QualityGateStatus::Note => "Note",
            QualityGateStatus::Warning => "Unstable",
            QualityGateStatus::Failed => "Failed",
        }
    }

    /// Returns true if this status does not change the build result.
    pub const fn is_successful(self) -> bool {
        matches!(
            self,
            QualityGateStatus::Inactive | QualityGateStatus::Passed | QualityGateStatus::Note
        )
    }

    /// Returns the more severe of both statuses.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for QualityGateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_is_total() {
        use QualityGateStatus::*;
        let ordered = [Inactive, Passed, Note, Warning, Failed];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should be below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn worst_keeps_the_maximum() {
        use QualityGateStatus::*;
        assert_eq!(Passed.worst(Warning), Warning);
        assert_eq!(Failed.worst(Warning), Failed);
        assert_eq!(Inactive.worst(Inactive), Inactive);
        assert_eq!(QualityGateStatus::default(), Inactive);
    }

    #[test]
    fn only_escalating_statuses_are_unsuccessful() {
        use QualityGateStatus::*;
        assert!(Inactive.is_successful());
        assert!(Passed.is_successful());
        assert!(Note.is_successful());
        assert!(!Warning.is_successful());
        assert!(!Failed.is_successful());
    }

    #[test]
    fn labels_match_report_wording() {
        assert_eq!(QualityGateStatus::Inactive.to_string(), "Not built");
        assert_eq!(QualityGateStatus::Passed.to_string(), "Success");
        assert_eq!(QualityGateStatus::Warning.to_string(), "Unstable");
        assert_eq!(QualityGateStatus::Failed.to_string(), "Failed");
    }
}
