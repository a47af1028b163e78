//! Measurable coverage and software metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CovgateError, Result};

/// A named measurable quantity of a coverage report.
///
/// The declaration order defines the total ordering used for sorted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    /// Coverage of modules
    Module,
    /// Coverage of packages
    Package,
    /// Coverage of files
    File,
    /// Coverage of classes
    Class,
    /// Coverage of methods
    Method,
    /// Coverage of lines
    Line,
    /// Coverage of branches
    Branch,
    /// Coverage of byte code instructions
    Instruction,
    /// Coverage of modified condition / decision pairs
    McdcPair,
    /// Coverage of function calls
    FunctionCall,
    /// Killed mutations
    Mutation,
    /// Killed mutations of covered code
    TestStrength,
    /// Number of tests
    Tests,
    /// Lines of code
    Loc,
    /// Non-commenting source statements
    Ncss,
    /// Cyclomatic complexity
    CyclomaticComplexity,
    /// Cognitive complexity
    CognitiveComplexity,
    /// N-Path complexity
    NpathComplexity,
}

/// How values of a metric are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Ratio metrics, rendered as percentage
    Coverage,
    /// Integer-like metrics, rendered as plain number
    Count,
}

/// Whether larger values of a metric are an improvement.
///
/// Only display concerns (colors) consult the tendency; quality gates always
/// compare with `actual >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tendency {
    /// Larger values are better (coverage)
    LargerIsBetter,
    /// Larger values are worse (complexity)
    LargerIsWorse,
}

impl Metric {
    /// All metrics in their natural order.
    pub const ALL: [Metric; 18] = [
        Metric::Module,
        Metric::Package,
        Metric::File,
        Metric::Class,
        Metric::Method,
        Metric::Line,
        Metric::Branch,
        Metric::Instruction,
        Metric::McdcPair,
        Metric::FunctionCall,
        Metric::Mutation,
        Metric::TestStrength,
        Metric::Tests,
        Metric::Loc,
        Metric::Ncss,
        Metric::CyclomaticComplexity,
        Metric::CognitiveComplexity,
        Metric::NpathComplexity,
    ];

    /// Human-readable name used in reports and quality gate names.
    pub const fn display_name(self) -> &'static str {
        match self {
            Metric::Module => "Module Coverage",
            Metric::Package => "Package Coverage",
            Metric::File => "File Coverage",
            Metric::Class => "Class Coverage",
            Metric::Method => "Method Coverage",
            Metric::Line => "Line Coverage",
            Metric::Branch => "Branch Coverage",
            Metric::Instruction => "Instruction Coverage",
            Metric::McdcPair => "MC/DC Pair Coverage",
            Metric::FunctionCall => "Function Call Coverage",
            Metric::Mutation => "Mutation Coverage",
            Metric::TestStrength => "Test Strength",
            Metric::Tests => "Number of Tests",
            Metric::Loc => "Lines of Code",
            Metric::Ncss => "Non Commenting Source Statements",
            Metric::CyclomaticComplexity => "Cyclomatic Complexity",
            Metric::CognitiveComplexity => "Cognitive Complexity",
            Metric::NpathComplexity => "N-Path Complexity",
        }
    }

    /// Identifier of the enum constant, e.g. `MCDC_PAIR`.
    pub const fn identifier(self) -> &'static str {
        match self {
            Metric::Module => "MODULE",
            Metric::Package => "PACKAGE",
            Metric::File => "FILE",
            Metric::Class => "CLASS",
            Metric::Method => "METHOD",
            Metric::Line => "LINE",
            Metric::Branch => "BRANCH",
            Metric::Instruction => "INSTRUCTION",
            Metric::McdcPair => "MCDC_PAIR",
            Metric::FunctionCall => "FUNCTION_CALL",
            Metric::Mutation => "MUTATION",
            Metric::TestStrength => "TEST_STRENGTH",
            Metric::Tests => "TESTS",
            Metric::Loc => "LOC",
            Metric::Ncss => "NCSS",
            Metric::CyclomaticComplexity => "CYCLOMATIC_COMPLEXITY",
            Metric::CognitiveComplexity => "COGNITIVE_COMPLEXITY",
            Metric::NpathComplexity => "NPATH_COMPLEXITY",
        }
    }

    /// Lower-case tag used as key in API documents, e.g. `cyclomatic-complexity`.
    pub fn tag_name(self) -> String {
        self.identifier().to_ascii_lowercase().replace('_', "-")
    }

    /// Rendering rule of this metric.
    pub const fn kind(self) -> MetricKind {
        match self {
            Metric::Tests
            | Metric::Loc
            | Metric::Ncss
            | Metric::CyclomaticComplexity
            | Metric::CognitiveComplexity
            | Metric::NpathComplexity => MetricKind::Count,
            _ => MetricKind::Coverage,
        }
    }

    /// Returns true for ratio metrics that render as percentage.
    pub const fn is_coverage(self) -> bool {
        matches!(self.kind(), MetricKind::Coverage)
    }

    /// Display polarity of this metric.
    pub const fn tendency(self) -> Tendency {
        match self {
            Metric::Loc
            | Metric::Ncss
            | Metric::CyclomaticComplexity
            | Metric::CognitiveComplexity
            | Metric::NpathComplexity => Tendency::LargerIsWorse,
            _ => Tendency::LargerIsBetter,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Metric {
    type Err = CovgateError;

    /// Accepts identifiers and tag names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Metric::ALL
            .iter()
            .copied()
            .find(|metric| metric.identifier() == normalized)
            .ok_or_else(|| {
                let expected = Metric::ALL
                    .iter()
                    .map(|metric| metric.identifier())
                    .collect::<Vec<_>>()
                    .join(", ");
                CovgateError::unknown_value("metric", format!("one of {expected}"), s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_are_kebab_case() {
        assert_eq!(Metric::Line.tag_name(), "line");
        assert_eq!(Metric::CyclomaticComplexity.tag_name(), "cyclomatic-complexity");
        assert_eq!(Metric::McdcPair.tag_name(), "mcdc-pair");
    }

    #[test]
    fn parses_identifiers_and_tags() {
        assert_eq!("LINE".parse::<Metric>().unwrap(), Metric::Line);
        assert_eq!("npath-complexity".parse::<Metric>().unwrap(), Metric::NpathComplexity);
        assert_eq!(" test_strength ".parse::<Metric>().unwrap(), Metric::TestStrength);
        assert!("coverage".parse::<Metric>().is_err());
    }

    #[test]
    fn complexity_metrics_are_counts_with_inverted_tendency() {
        assert_eq!(Metric::CyclomaticComplexity.kind(), MetricKind::Count);
        assert_eq!(Metric::CyclomaticComplexity.tendency(), Tendency::LargerIsWorse);
        assert_eq!(Metric::Tests.tendency(), Tendency::LargerIsBetter);
        assert!(Metric::Branch.is_coverage());
        assert!(!Metric::Loc.is_coverage());
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut sorted = Metric::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Metric::ALL.to_vec());
        assert!(Metric::File < Metric::Line);
    }

    #[test]
    fn serde_uses_identifiers() {
        let json = serde_json::to_string(&Metric::FunctionCall).unwrap();
        assert_eq!(json, "\"FUNCTION_CALL\"");
        let metric: Metric = serde_json::from_str("\"LOC\"").unwrap();
        assert_eq!(metric, Metric::Loc);
    }
}
