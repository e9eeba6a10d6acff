//! Integration tests for the csv command

use crate::common::{arg, sample_data, CliTestRunner};

#[test]
fn test_csv_equal_files() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture
        .create_table("expected.csv", &sample_data::simple_table(), ";")
        .unwrap();
    let actual = fixture
        .create_table("actual.csv", &sample_data::simple_table(), ";")
        .unwrap();

    runner.expect_equal(&["csv", arg(&expected), arg(&actual)]);
}

#[test]
fn test_csv_changed_value_is_different() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture
        .create_table("expected.csv", &sample_data::simple_table(), ";")
        .unwrap();
    let actual = fixture
        .create_table("actual.csv", &sample_data::updated_table(), ";")
        .unwrap();

    runner.expect_different(&["csv", arg(&expected), arg(&actual)]);
    runner.expect_different(&["csv", arg(&expected), arg(&actual), "--format", "json"]);
}

#[test]
fn test_csv_row_order_flag() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture
        .create_table("expected.csv", &sample_data::simple_table(), ",")
        .unwrap();
    let actual = fixture
        .create_table("actual.csv", &sample_data::reordered_table(), ",")
        .unwrap();

    runner.expect_different(&["csv", arg(&expected), arg(&actual), "--separator", ","]);
    runner.expect_equal(&[
        "csv",
        arg(&expected),
        arg(&actual),
        "--separator",
        ",",
        "--row-order",
        "ignore",
    ]);
}

#[test]
fn test_csv_ignore_flag() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture
        .create_table("expected.csv", &sample_data::simple_table(), ";")
        .unwrap();
    let actual = fixture
        .create_table("actual.csv", &sample_data::updated_table(), ";")
        .unwrap();

    runner.expect_equal(&["csv", arg(&expected), arg(&actual), "--ignore", "price"]);
}

#[test]
fn test_csv_config_file_with_cli_override() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture.create_raw("expected.tsv", "1\t2\n3\t4").unwrap();
    let actual = fixture.create_raw("actual.tsv", "3\t4\n1\t2").unwrap();
    let config = fixture
        .create_raw(
            "options.json",
            r#"{"csv": {"separator": "\t", "has_header": false, "row_order": "ignore"}}"#,
        )
        .unwrap();

    runner.expect_equal(&["csv", arg(&expected), arg(&actual), "--config", arg(&config)]);
    runner.expect_different(&[
        "csv",
        arg(&expected),
        arg(&actual),
        "--config",
        arg(&config),
        "--row-order",
        "include",
    ]);
}

#[test]
fn test_csv_errors_are_not_differences() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let ragged = fixture.create_raw("ragged.csv", "a;b\n1").unwrap();
    let good = fixture.create_raw("good.csv", "a;b\n1;2").unwrap();
    let duplicate = fixture.create_raw("dup.csv", "a;a\n1;2").unwrap();
    let missing = fixture.root().join("missing.csv");

    let err = runner.expect_failure(&["csv", arg(&ragged), arg(&good)]);
    assert!(err.to_string().contains("Inconsistent column count"));

    let err = runner.expect_failure(&["csv", arg(&good), arg(&missing)]);
    assert!(err.to_string().contains("missing.csv"));

    let err = runner.expect_failure(&[
        "csv",
        arg(&duplicate),
        arg(&duplicate),
        "--column-order",
        "ignore",
    ]);
    assert!(matches!(err, assertdiff::AssertdiffError::ConfigConflict { .. }));

    runner.expect_failure(&["csv", arg(&good), arg(&good), "--format", "xml"]);
}
