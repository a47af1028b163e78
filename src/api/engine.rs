//! Main evaluation engine implementation.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::api::coverage_api::CoverageApi;
use crate::charts::{BuildResult, CoverageTrendChart, LinesChartModel};
use crate::core::config::CovgateConfig;
use crate::core::errors::Result;
use crate::core::model::CoverageStatistics;
use crate::core::quality::{
    EvaluationLog, QualityGateEvaluator, QualityGateResult, ResultHandler,
};
use crate::io::loader;

/// Everything produced by one evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Aggregated quality gate result
    pub result: QualityGateResult,
    /// Log written during the evaluation
    pub log: EvaluationLog,
    /// API document of the evaluated build
    pub api: CoverageApi,
}

/// Main covgate engine
#[derive(Debug, Clone)]
pub struct CovgateEngine {
    config: Arc<CovgateConfig>,
}

impl CovgateEngine {
    /// Create a new engine; the configuration is validated first
    pub fn new(config: CovgateConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing covgate engine with {} quality gates",
            config.quality_gates.len()
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &CovgateConfig {
        &self.config
    }

    /// Evaluates the configured gates against `statistics`.
    pub fn evaluate(
        &self,
        statistics: &CoverageStatistics,
        handler: &mut dyn ResultHandler,
    ) -> Evaluation {
        self.evaluate_with_reference(statistics, None, handler)
    }

    /// Like [`Self::evaluate`], but overrides the reference build of the snapshot.
    pub fn evaluate_with_reference(
        &self,
        statistics: &CoverageStatistics,
        reference_build: Option<String>,
        handler: &mut dyn ResultHandler,
    ) -> Evaluation {
        let mut log = EvaluationLog::new(self.config.evaluation.log_name.clone());
        let evaluator =
            QualityGateEvaluator::new(self.config.quality_gates.iter().cloned(), statistics);
        let result = evaluator.evaluate(handler, &mut log);

        let reference_build =
            reference_build.or_else(|| statistics.reference_build().map(String::from));
        let api = CoverageApi::new(statistics, &result, reference_build);

        Evaluation { result, log, api }
    }

    /// Loads a statistics file and evaluates it.
    pub async fn evaluate_file(
        &self,
        path: impl AsRef<Path>,
        handler: &mut dyn ResultHandler,
    ) -> Result<Evaluation> {
        let path = path.as_ref();
        info!("Evaluating quality gates for {}", path.display());
        let statistics = loader::load_statistics(path).await?;
        Ok(self.evaluate(&statistics, handler))
    }

    /// Creates the trend chart of `history`, newest build first.
    pub fn trend_chart(&self, history: &[BuildResult], metrics: bool) -> LinesChartModel {
        CoverageTrendChart::new().create(history, &self.config.chart, metrics)
    }

    /// Loads a build history file and creates its trend chart.
    pub async fn trend_chart_file(
        &self,
        path: impl AsRef<Path>,
        metrics: bool,
    ) -> Result<LinesChartModel> {
        let history = loader::load_history(path).await?;
        Ok(self.trend_chart(&history, metrics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::CovgateError;
    use crate::core::model::{Baseline, Metric, Value};
    use crate::core::quality::{
        BuildStatusHandler, BuildVerdict, Criticality, NullResultHandler, QualityGate,
        QualityGateStatus,
    };
    use tempfile::tempdir;

    fn statistics() -> CoverageStatistics {
        CoverageStatistics::builder()
            .reference_build("#7")
            .value(Baseline::Project, Metric::Line, Value::coverage(5, 5))
            .value(Baseline::ProjectDelta, Metric::Line, Value::difference(-2.0))
            .build()
    }

    fn engine() -> CovgateEngine {
        CovgateEngine::new(CovgateConfig::default().with_additional_gates([
            QualityGate::new(40.0, Metric::Line, Baseline::Project, Criticality::Failure),
            QualityGate::new(0.0, Metric::Line, Baseline::ProjectDelta, Criticality::Unstable),
        ]))
        .unwrap()
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = CovgateConfig::default()
            .with_additional_gates([QualityGate::for_metric(Metric::Line).with_threshold(f64::NAN)]);
        assert!(matches!(
            CovgateEngine::new(config),
            Err(CovgateError::Config { .. })
        ));
    }

    #[test]
    fn evaluation_drives_handler_and_api() {
        let mut handler = BuildStatusHandler::new();
        let evaluation = engine().evaluate(&statistics(), &mut handler);

        assert_eq!(evaluation.result.overall_status(), QualityGateStatus::Warning);
        assert_eq!(handler.verdict(), BuildVerdict::Unstable);
        assert_eq!(evaluation.log.name(), "Quality Gates");
        assert_eq!(evaluation.api.reference_build(), Some("#7"));
        assert_eq!(evaluation.api.quality_gates().result_items.len(), 2);
    }

    #[test]
    fn reference_build_can_be_overridden() {
        let evaluation = engine().evaluate_with_reference(
            &statistics(),
            Some("main#12".to_string()),
            &mut NullResultHandler,
        );
        assert_eq!(evaluation.api.reference_build(), Some("main#12"));
    }

    #[tokio::test]
    async fn evaluates_statistics_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("coverage.json");
        std::fs::write(&path, serde_json::to_string(&statistics()).unwrap()).unwrap();

        let evaluation = engine()
            .evaluate_file(&path, &mut NullResultHandler)
            .await
            .unwrap();
        assert_eq!(evaluation.result.messages().len(), 2);
        assert_eq!(evaluation.api.project_statistics()["line"], "50.00%");
    }

    #[tokio::test]
    async fn charts_history_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.yaml");
        std::fs::write(
            &path,
            "- number: 1\n  timestamp: 2024-03-01T08:00:00Z\n  statistics:\n    values:\n      PROJECT:\n        LINE:\n          coverage:\n            covered: 3\n            missed: 1\n",
        )
        .unwrap();

        let chart = engine().trend_chart_file(&path, false).await.unwrap();
        assert_eq!(chart.domain_axis_labels(), &["#1"]);
        assert_eq!(chart.series()[0].data, vec![Some(75.0)]);
    }
}
