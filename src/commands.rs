//! Command implementations for assertdiff CLI

use crate::assertion::{CsvAssert, JsonAssert};
use crate::cli::{Commands, OutputFormat};
use crate::error::{AssertdiffError, Result};
use crate::options::{CsvOptions, JsonOptions, OptionsFile};
use crate::output::{JsonFormatter, PrettyPrinter};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Equal,
    Different,
}

/// Execute a command
pub fn execute_command(command: Commands) -> Result<Outcome> {
    match command {
        Commands::Csv {
            expected,
            actual,
            separator,
            no_header,
            ignore,
            row_order,
            column_order,
            max_length,
            config,
            format,
            description,
        } => {
            let file = load_options_file(config.as_deref())?;
            let mut builder = file.csv.apply(CsvOptions::builder());
            if let Some(separator) = separator {
                builder = builder.with_separator(separator);
            }
            if no_header {
                builder = builder.with_header(false);
            }
            if let Some(order) = row_order {
                builder = builder.with_row_order(order);
            }
            if let Some(order) = column_order {
                builder = builder.with_column_order(order);
            }
            if let Some(length) = max_length {
                builder = builder.with_max_report_length(length);
            }
            let options = builder.ignore_columns(ignore).build()?;
            let format = parse_format(&format)?;

            let expected_text = read_input(&expected)?;
            let actual_text = read_input(&actual)?;
            log::info!(
                "Comparing tables {} and {}",
                expected.display(),
                actual.display()
            );

            let checker = CsvAssert::new(options).with_description(description.unwrap_or_default());
            report("CSV", checker.equal(&expected_text, &actual_text), format)
        }
        Commands::Json {
            expected,
            actual,
            ignore,
            array_order,
            case_sensitive,
            max_length,
            config,
            format,
            description,
        } => {
            let file = load_options_file(config.as_deref())?;
            let mut builder = file.json.apply(JsonOptions::builder());
            if let Some(order) = array_order {
                builder = builder.with_array_order(order);
            }
            if case_sensitive {
                builder = builder.with_case_insensitive_keys(false);
            }
            if let Some(length) = max_length {
                builder = builder.with_max_report_length(length);
            }
            let options = builder.ignore_nodes(ignore).build()?;
            let format = parse_format(&format)?;

            let expected_text = read_input(&expected)?;
            let actual_text = read_input(&actual)?;
            log::info!(
                "Comparing JSON documents {} and {}",
                expected.display(),
                actual.display()
            );

            let checker = JsonAssert::new(options).with_description(description.unwrap_or_default());
            report("JSON", checker.equal(&expected_text, &actual_text), format)
        }
    }
}

/// Print the outcome of an assertion; errors other than a found difference
/// are passed back to the caller
fn report(kind: &str, result: Result<()>, format: OutputFormat) -> Result<Outcome> {
    let failure = match result {
        Ok(()) => None,
        Err(err) if err.is_assertion_failure() => Some(err),
        Err(err) => return Err(err),
    };

    match format {
        OutputFormat::Pretty => match &failure {
            None => PrettyPrinter::print_success(kind),
            Some(err) => PrettyPrinter::print_failure(&err.to_string()),
        },
        OutputFormat::Json => {
            let difference = failure.as_ref().and_then(AssertdiffError::difference);
            println!("{}", JsonFormatter::format_outcome(difference)?);
        }
    }

    Ok(match failure {
        None => Outcome::Equal,
        Some(_) => Outcome::Different,
    })
}

fn load_options_file(path: Option<&Path>) -> Result<OptionsFile> {
    match path {
        Some(path) => {
            log::debug!("Loading options from {}", path.display());
            OptionsFile::load(path)
        }
        None => Ok(OptionsFile::default()),
    }
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::parse(format).map_err(AssertdiffError::invalid_input)
}

fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    Ok(text)
}
