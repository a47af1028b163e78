use super::*;
use crate::charts::AxisType;
use crate::core::errors::CovgateError;
use crate::core::model::{Baseline, Metric};
use crate::core::quality::Criticality;
use tempfile::tempdir;

fn expect_error<T: std::fmt::Debug>(result: Result<T>) -> CovgateError {
    result.expect_err("expected validation failure")
}

#[test]
fn default_configs_validate_successfully() {
    CovgateConfig::default().validate().expect("covgate default");
    CovgateConfig::sample().validate().expect("covgate sample");
    EvaluationConfig::default()
        .validate()
        .expect("evaluation default");
    ChartModelConfiguration::default()
        .validate()
        .expect("chart default");
}

#[test]
fn default_config_has_no_gates() {
    let config = CovgateConfig::default();
    assert!(config.quality_gates.is_empty());
    assert!(!config.evaluation.fail_on_unstable);
    assert_eq!(config.evaluation.log_name, "Quality Gates");
}

#[test]
fn parses_gates_with_defaults() {
    let yaml = r#"
quality_gates:
  - metric: LINE
    threshold: 60
  - metric: BRANCH
    baseline: MODIFIED_LINES
    threshold: 80.5
    criticality: FAILURE
evaluation:
  fail_on_unstable: true
chart:
  build_count: 20
  axis_type: DATE
"#;
    let config = CovgateConfig::from_yaml_str(yaml).expect("valid yaml");

    assert_eq!(
        config.quality_gates,
        vec![
            QualityGate::new(60.0, Metric::Line, Baseline::Project, Criticality::Unstable),
            QualityGate::new(
                80.5,
                Metric::Branch,
                Baseline::ModifiedLines,
                Criticality::Failure
            ),
        ]
    );
    assert!(config.evaluation.fail_on_unstable);
    assert_eq!(config.evaluation.log_name, "Quality Gates");
    assert_eq!(config.chart.build_count, 20);
    assert_eq!(config.chart.axis_type, AxisType::Date);
    config.validate().expect("parsed config is valid");
}

#[test]
fn rejects_unknown_metrics() {
    let yaml = "quality_gates:\n  - metric: LINES\n";
    assert!(matches!(
        CovgateConfig::from_yaml_str(yaml),
        Err(CovgateError::Serialization { .. })
    ));
}

#[test]
fn validation_reports_the_offending_gate() {
    let config = CovgateConfig::sample().with_additional_gates([QualityGate::for_metric(
        Metric::Mutation,
    )
    .with_threshold(f64::NAN)]);

    let err = expect_error(config.validate());
    match err {
        CovgateError::Config { message, field } => {
            assert_eq!(field.as_deref(), Some("quality_gates[3]"));
            assert!(
                message.contains("Overall project - Mutation Coverage"),
                "unexpected error message: {message}"
            );
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn chart_requires_positive_build_count() {
    let mut config = CovgateConfig::default();
    config.chart.build_count = 0;
    let err = expect_error(config.validate());
    assert!(format!("{err}").contains("build_count"), "unexpected error: {err}");
}

#[test]
fn evaluation_requires_log_name() {
    let mut config = CovgateConfig::default();
    config.evaluation.log_name = "  ".to_string();
    let err = expect_error(config.validate());
    assert!(matches!(err, CovgateError::Config { .. }));
}

#[test]
fn yaml_file_round_trip_preserves_gates() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join(".covgate.yml");

    CovgateConfig::sample()
        .to_yaml_file(&path)
        .expect("write config");
    let loaded = CovgateConfig::from_yaml_file(&path).expect("read config");

    assert_eq!(loaded, CovgateConfig::sample());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let err = expect_error(CovgateConfig::from_yaml_file(dir.path().join("missing.yml")));
    assert!(matches!(err, CovgateError::Io { .. }));
    assert!(err.to_string().contains("Failed to read config file"));
    assert!(err.to_string().contains("missing.yml"));
}

#[test]
fn malformed_file_error_names_the_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.yml");
    std::fs::write(&path, "quality_gates:\n  - metric: LINES\n").expect("write yaml");

    let err = expect_error(CovgateConfig::from_yaml_file(&path));
    assert!(matches!(err, CovgateError::Serialization { .. }));
    assert!(err.to_string().contains("broken.yml"));
}

#[test]
fn discovers_implicit_config_files() {
    let dir = tempdir().expect("temp dir");
    assert_eq!(CovgateConfig::discover(dir.path()), None);

    let yaml = dir.path().join(".covgate.yaml");
    std::fs::write(&yaml, "quality_gates: []\n").expect("write yaml");
    assert_eq!(CovgateConfig::discover(dir.path()), Some(yaml));

    let yml = dir.path().join(".covgate.yml");
    std::fs::write(&yml, "quality_gates: []\n").expect("write yml");
    assert_eq!(CovgateConfig::discover(dir.path()), Some(yml));
}

#[test]
fn positive_usize_helper_names_the_field() {
    assert!(validate_positive_usize(3, "chart.build_count").is_ok());
    let err = expect_error(validate_positive_usize(0, "chart.build_count"));
    assert_eq!(
        err.to_string(),
        "Validation error: chart.build_count must be greater than 0"
    );
}
