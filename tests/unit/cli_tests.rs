//! Unit tests for CLI argument parsing

use assertdiff::cli::{Cli, Commands, OutputFormat};
use assertdiff::Order;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_csv_command_parsing() {
    let cli = Cli::try_parse_from(["assertdiff", "csv", "expected.csv", "actual.csv"]).unwrap();

    match cli.command {
        Commands::Csv {
            expected,
            actual,
            separator,
            no_header,
            ignore,
            row_order,
            column_order,
            format,
            ..
        } => {
            assert_eq!(expected, PathBuf::from("expected.csv"));
            assert_eq!(actual, PathBuf::from("actual.csv"));
            assert_eq!(separator, None);
            assert!(!no_header);
            assert!(ignore.is_empty());
            assert_eq!(row_order, None);
            assert_eq!(column_order, None);
            assert_eq!(format, "pretty");
        }
        _ => panic!("Expected Csv command"),
    }
}

#[test]
fn test_csv_command_with_options() {
    let cli = Cli::try_parse_from([
        "assertdiff",
        "csv",
        "a.csv",
        "b.csv",
        "--separator",
        "tab",
        "--no-header",
        "--ignore",
        "ts",
        "--ignore",
        "id",
        "--row-order",
        "ignore",
        "--column-order",
        "Ignore",
        "--max-length",
        "200",
        "--description",
        "nightly export",
    ])
    .unwrap();

    match cli.command {
        Commands::Csv {
            separator,
            no_header,
            ignore,
            row_order,
            column_order,
            max_length,
            description,
            ..
        } => {
            assert_eq!(separator.as_deref(), Some("\t"));
            assert!(no_header);
            assert_eq!(ignore, vec!["ts", "id"]);
            assert_eq!(row_order, Some(Order::Ignore));
            assert_eq!(column_order, Some(Order::Ignore));
            assert_eq!(max_length, Some(200));
            assert_eq!(description.as_deref(), Some("nightly export"));
        }
        _ => panic!("Expected Csv command"),
    }
}

#[test]
fn test_json_command_parsing() {
    let cli = Cli::try_parse_from([
        "assertdiff",
        "json",
        "expected.json",
        "actual.json",
        "--array-order",
        "include",
        "--case-sensitive",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Json {
            expected,
            array_order,
            case_sensitive,
            format,
            config,
            ..
        } => {
            assert_eq!(expected, PathBuf::from("expected.json"));
            assert_eq!(array_order, Some(Order::Include));
            assert!(case_sensitive);
            assert_eq!(format, "json");
            assert_eq!(config, None);
        }
        _ => panic!("Expected Json command"),
    }
}

#[test]
fn test_verbose_flag_is_global() {
    let cli = Cli::try_parse_from(["assertdiff", "json", "a.json", "b.json", "-v"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_invalid_arguments_rejected() {
    assert!(Cli::try_parse_from(["assertdiff", "csv", "a.csv"]).is_err());
    assert!(Cli::try_parse_from(["assertdiff", "csv", "a.csv", "b.csv", "--row-order", "random"]).is_err());
    assert!(Cli::try_parse_from(["assertdiff", "csv", "a.csv", "b.csv", "--separator", ""]).is_err());
    assert!(Cli::try_parse_from(["assertdiff", "json", "a.json", "b.json", "--max-length", "0"]).is_err());
    assert!(Cli::try_parse_from(["assertdiff", "xml", "a", "b"]).is_err());
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("Pretty"), Ok(OutputFormat::Pretty));
    assert_eq!(OutputFormat::parse("json"), Ok(OutputFormat::Json));
    assert!(OutputFormat::parse("yaml").is_err());
}
