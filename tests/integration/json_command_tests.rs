//! Integration tests for the json command

use crate::common::{arg, sample_data, CliTestRunner};

#[test]
fn test_json_reordered_documents_with_ignored_timestamp() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture
        .create_json("expected.json", &sample_data::orders_json())
        .unwrap();
    let actual = fixture
        .create_json("actual.json", &sample_data::orders_json_reordered())
        .unwrap();

    runner.expect_different(&["json", arg(&expected), arg(&actual)]);
    runner.expect_equal(&[
        "json",
        arg(&expected),
        arg(&actual),
        "--ignore",
        "GeneratedAt",
    ]);
    runner.expect_different(&[
        "json",
        arg(&expected),
        arg(&actual),
        "--ignore",
        "generatedAt",
        "--array-order",
        "include",
    ]);
}

#[test]
fn test_json_case_sensitive_flag() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture.create_raw("expected.json", r#"{"Id": 1}"#).unwrap();
    let actual = fixture.create_raw("actual.json", r#"{"id": 1}"#).unwrap();

    runner.expect_equal(&["json", arg(&expected), arg(&actual)]);
    runner.expect_different(&["json", arg(&expected), arg(&actual), "--case-sensitive"]);
}

#[test]
fn test_json_config_file() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let expected = fixture.create_raw("expected.json", "[1,2,3]").unwrap();
    let actual = fixture.create_raw("actual.json", "[3,2,1]").unwrap();
    let config = fixture
        .create_raw("options.json", r#"{"json": {"array_order": "include"}}"#)
        .unwrap();

    runner.expect_equal(&["json", arg(&expected), arg(&actual)]);
    runner.expect_different(&[
        "json",
        arg(&expected),
        arg(&actual),
        "--config",
        arg(&config),
        "--format",
        "json",
    ]);
}

#[test]
fn test_json_invalid_inputs() {
    let runner = CliTestRunner::new().unwrap();
    let fixture = runner.fixture();
    let broken = fixture.create_raw("broken.json", r#"{"a": }"#).unwrap();
    let good = fixture.create_raw("good.json", r#"{"a": 1}"#).unwrap();
    let bad_config = fixture
        .create_raw("options.json", r#"{"yaml": {}}"#)
        .unwrap();

    let err = runner.expect_failure(&["json", arg(&broken), arg(&good)]);
    assert!(matches!(err, assertdiff::AssertdiffError::JsonParse { .. }));

    let err = runner.expect_failure(&["json", arg(&good), arg(&good), "--config", arg(&bad_config)]);
    assert!(err.to_string().contains("options.json"));

    runner.expect_failure(&["json", arg(&good), arg(&good), "--ignore", " "]);
}
