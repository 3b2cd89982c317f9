//! Integration tests for the reelgraph application.

use reelgraph::{AppError, ReelGraphApp};
use reelgraph_common::test_utils::{catalog_fixtures, init_test_logging, write_temp_csv};
use reelgraph_common::GraphKind;
use reelgraph_config::Config;

fn config_for(data: &std::path::Path, output: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.data.path = data.to_path_buf();
    config.output.directory = output.to_path_buf();
    config
}

#[test]
fn test_load_catalog_from_configured_path() {
    init_test_logging();
    let csv = format!(
        "{}\ns1,Movie,First,,,\"United States, India\",\"September 9, 2021\",2021,PG,90 min,Dramas,x\n",
        catalog_fixtures::CSV_HEADER
    );
    let file = write_temp_csv(&csv);
    let out = tempfile::tempdir().unwrap();

    let app = ReelGraphApp::new(config_for(file.path(), out.path()));
    let catalog = app.load_catalog().unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].country.as_deref(), Some("United States, India"));
}

#[test]
fn test_missing_column_fails_before_any_chart() {
    init_test_logging();
    let file = write_temp_csv("type,date_added,country,rating,listed_in\nMovie,\"May 1, 2020\",India,R,Dramas\n");
    let out = tempfile::tempdir().unwrap();
    let charts = out.path().join("charts");

    let app = ReelGraphApp::new(config_for(file.path(), &charts));
    let error = app.run().unwrap_err();

    assert!(error.is_input_error());
    assert!(error.to_string().contains("cast"));
    assert!(!charts.exists());
}

#[test]
fn test_missing_file_is_reported() {
    let out = tempfile::tempdir().unwrap();
    let app = ReelGraphApp::new(config_for(&out.path().join("absent.csv"), out.path()));

    let error = app.load_catalog().unwrap_err();

    assert!(matches!(error, AppError::Core(_)));
    assert!(!error.is_input_error());
}

#[test]
fn test_multibyte_delimiter_rejected() {
    let out = tempfile::tempdir().unwrap();
    let mut config = config_for(&out.path().join("data.csv"), out.path());
    config.data.delimiter = '→';

    let error = ReelGraphApp::new(config).load_catalog().unwrap_err();
    assert!(matches!(error, AppError::Delimiter('→')));
}

#[test]
fn test_latin1_delimiter_rejected() {
    let file = write_temp_csv(catalog_fixtures::CSV_HEADER);
    let out = tempfile::tempdir().unwrap();
    let mut config = config_for(file.path(), out.path());
    config.data.delimiter = 'é';

    let error = ReelGraphApp::new(config).load_catalog().unwrap_err();
    assert!(matches!(error, AppError::Delimiter('é')));
    assert!(error.to_string().contains("ASCII"));
}

#[test]
fn test_run_with_only_empty_charts_succeeds() {
    init_test_logging();
    let csv = format!("{}\ns1,Movie,Bare,,,,,2020,,,,x\n", catalog_fixtures::CSV_HEADER);
    let file = write_temp_csv(&csv);
    let out = tempfile::tempdir().unwrap();

    let summary = ReelGraphApp::new(config_for(file.path(), out.path())).run().unwrap();

    assert!(summary.rendered.is_empty());
    assert_eq!(summary.skipped, GraphKind::ALL.to_vec());
}
