//! Immutable coverage statistics of a single build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Baseline, Metric, Value};

/// Point lookups into computed statistics.
///
/// This is the only capability the quality gate evaluator needs from a
/// snapshot. Implementations must answer every (baseline, metric) pair and
/// return `None` for values that have not been computed.
pub trait StatisticsLookup {
    /// Returns the value of `metric` for `baseline`, if computed.
    fn value(&self, baseline: Baseline, metric: Metric) -> Option<Value>;

    /// Returns true if a value of `metric` exists for `baseline`.
    fn contains_value(&self, baseline: Baseline, metric: Metric) -> bool {
        self.value(baseline, metric).is_some()
    }
}

impl<T: StatisticsLookup + ?Sized> StatisticsLookup for &T {
    fn value(&self, baseline: Baseline, metric: Metric) -> Option<Value> {
        (**self).value(baseline, metric)
    }
}

/// Computed metric values per baseline.
///
/// Snapshots are produced by a coverage aggregation stage and never change
/// afterwards, so they can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageStatistics {
    /// Name of the reference build the deltas were computed against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference_build: Option<String>,
    /// Values per baseline and metric
    #[serde(default)]
    values: BTreeMap<Baseline, BTreeMap<Metric, Value>>,
}

impl CoverageStatistics {
    /// Starts building a new snapshot.
    pub fn builder() -> CoverageStatisticsBuilder {
        CoverageStatisticsBuilder::default()
    }

    /// Name of the reference build, if deltas were computed against one.
    pub fn reference_build(&self) -> Option<&str> {
        self.reference_build.as_deref()
    }

    /// All values of a baseline, ordered by metric.
    pub fn values(&self, baseline: Baseline) -> impl Iterator<Item = (Metric, Value)> + '_ {
        self.values
            .get(&baseline)
            .into_iter()
            .flat_map(|values| values.iter().map(|(metric, value)| (*metric, *value)))
    }

    /// Returns true if no value has been computed for any baseline.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(BTreeMap::is_empty)
    }
}

impl StatisticsLookup for CoverageStatistics {
    fn value(&self, baseline: Baseline, metric: Metric) -> Option<Value> {
        self.values
            .get(&baseline)
            .and_then(|values| values.get(&metric))
            .copied()
    }
}

/// Builder for [`CoverageStatistics`].
#[derive(Debug, Default)]
pub struct CoverageStatisticsBuilder {
    reference_build: Option<String>,
    values: BTreeMap<Baseline, BTreeMap<Metric, Value>>,
}

impl CoverageStatisticsBuilder {
    /// Sets the name of the reference build.
    pub fn reference_build(mut self, name: impl Into<String>) -> Self {
        self.reference_build = Some(name.into());
        self
    }

    /// Adds a single value; a later value for the same pair replaces the earlier one.
    pub fn value(mut self, baseline: Baseline, metric: Metric, value: Value) -> Self {
        self.values.entry(baseline).or_default().insert(metric, value);
        self
    }

    /// Adds all values of a baseline.
    pub fn values<I>(mut self, baseline: Baseline, values: I) -> Self
    where
        I: IntoIterator<Item = (Metric, Value)>,
    {
        self.values.entry(baseline).or_default().extend(values);
        self
    }

    /// Finishes the snapshot.
    pub fn build(self) -> CoverageStatistics {
        CoverageStatistics {
            reference_build: self.reference_build,
            values: self
                .values
                .into_iter()
                .filter(|(_, values)| !values.is_empty())
                .collect(),
        }
    }
}
