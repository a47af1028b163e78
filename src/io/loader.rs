//! Loading of statistics snapshots and build histories.
//!
//! Files are JSON unless their extension is `.yml` or `.yaml`.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::charts::BuildResult;
use crate::core::errors::{Result, ResultExt};
use crate::core::model::CoverageStatistics;

/// Serialization format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl DataFormat {
    /// Detects the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yml" | "yaml") => DataFormat::Yaml,
            _ => DataFormat::Json,
        }
    }

    /// Parses `content` in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        match self {
            DataFormat::Json => serde_json::from_str(content).map_err(Into::into),
            DataFormat::Yaml => serde_yaml::from_str(content).map_err(Into::into),
        }
    }
}

/// Reads a statistics snapshot.
pub async fn load_statistics(path: impl AsRef<Path>) -> Result<CoverageStatistics> {
    let path = path.as_ref();
    let statistics: CoverageStatistics = read(path).await?;
    debug!(
        "Loaded statistics from {} (reference build: {})",
        path.display(),
        statistics.reference_build().unwrap_or("-")
    );
    Ok(statistics)
}

/// Reads a build history, newest build first.
///
/// Entries are sorted by descending build number regardless of file order.
pub async fn load_history(path: impl AsRef<Path>) -> Result<Vec<BuildResult>> {
    let path = path.as_ref();
    let mut history: Vec<BuildResult> = read(path).await?;
    history.sort_by(|a, b| b.number.cmp(&a.number));
    debug!("Loaded {} builds from {}", history.len(), path.display());
    Ok(history)
}

async fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    DataFormat::from_path(path)
        .parse(&content)
        .with_context(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::CovgateError;
    use crate::core::model::{Baseline, Metric, StatisticsLookup, Value};
    use tempfile::tempdir;

    const STATISTICS_JSON: &str = r##"{
        "reference_build": "#41",
        "values": {
            "PROJECT": {
                "LINE": {"coverage": {"covered": 5, "missed": 5}},
                "LOC": {"count": 1000}
            },
            "PROJECT_DELTA": {"LINE": {"difference": 5.0}}
        }
    }"##;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(DataFormat::from_path(Path::new("a.json")), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("a.YML")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("a.yaml")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("stats")), DataFormat::Json);
    }

    #[tokio::test]
    async fn loads_json_statistics() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("coverage.json");
        std::fs::write(&path, STATISTICS_JSON).unwrap();

        let statistics = load_statistics(&path).await.unwrap();
        assert_eq!(statistics.reference_build(), Some("#41"));
        assert_eq!(
            statistics.value(Baseline::Project, Metric::Line),
            Some(Value::coverage(5, 5))
        );
        assert_eq!(
            statistics.value(Baseline::ProjectDelta, Metric::Line),
            Some(Value::difference(5.0))
        );
    }

    #[tokio::test]
    async fn loads_yaml_statistics() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("coverage.yaml");
        std::fs::write(
            &path,
            "values:\n  MODIFIED_LINES:\n    BRANCH:\n      coverage:\n        covered: 1\n        missed: 3\n",
        )
        .unwrap();

        let statistics = load_statistics(&path).await.unwrap();
        assert_eq!(statistics.reference_build(), None);
        assert_eq!(
            statistics.value(Baseline::ModifiedLines, Metric::Branch),
            Some(Value::coverage(1, 3))
        );
    }

    #[tokio::test]
    async fn sorts_history_newest_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r##"[
                {"number": 1, "timestamp": "2024-03-01T08:00:00Z", "statistics": {}},
                {"number": 3, "name": "release", "timestamp": "2024-03-03T08:00:00Z", "statistics": {}},
                {"number": 2, "timestamp": "2024-03-02T08:00:00Z", "statistics": {}}
            ]"##,
        )
        .unwrap();

        let history = load_history(&path).await.unwrap();
        let numbers: Vec<_> = history.iter().map(|build| build.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(history[0].display_name(), "release");
        assert_eq!(history[1].display_name(), "#2");
    }

    #[tokio::test]
    async fn reports_missing_files() {
        let dir = tempdir().unwrap();
        let err = load_statistics(dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CovgateError::Io { .. }));
    }

    #[tokio::test]
    async fn reports_malformed_documents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"values": {"PROJECT": {"LINES": {"count": 1}}}}"#).unwrap();

        let err = load_statistics(&path).await.unwrap_err();
        assert!(matches!(err, CovgateError::Serialization { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
