//! Command-line interface for assertdiff

use crate::options::Order;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assertdiff")]
#[command(about = "Report the first difference between expected and actual data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two delimited text tables
    Csv {
        /// File holding the expected table
        expected: PathBuf,

        /// File holding the actual table
        actual: PathBuf,

        /// Cell separator ("\t" or "tab" for tabs)
        #[arg(long, value_parser = parse_separator)]
        separator: Option<String>,

        /// Treat the first row as data instead of header names
        #[arg(long)]
        no_header: bool,

        /// Column to leave out of the comparison (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,

        /// Row order: "include" or "ignore"
        #[arg(long, value_parser = Order::parse)]
        row_order: Option<Order>,

        /// Column order: "include" or "ignore"
        #[arg(long, value_parser = Order::parse)]
        column_order: Option<Order>,

        /// Characters of each document shown in a failure report
        #[arg(long, value_parser = validate_max_length)]
        max_length: Option<usize>,

        /// JSON options file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Free text shown in the failure report
        #[arg(long)]
        description: Option<String>,
    },

    /// Compare two JSON documents
    Json {
        /// File holding the expected document
        expected: PathBuf,

        /// File holding the actual document
        actual: PathBuf,

        /// Property name to leave out of the comparison (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,

        /// Array element order: "include" or "ignore"
        #[arg(long, value_parser = Order::parse)]
        array_order: Option<Order>,

        /// Match property names case-sensitively
        #[arg(long)]
        case_sensitive: bool,

        /// Characters of each document shown in a failure report
        #[arg(long, value_parser = validate_max_length)]
        max_length: Option<usize>,

        /// JSON options file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Free text shown in the failure report
        #[arg(long)]
        description: Option<String>,
    },
}

/// Parse output format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}

/// Accept escaped tab spellings that are awkward to pass through a shell
fn parse_separator(s: &str) -> Result<String, String> {
    match s {
        "" => Err("Separator must not be empty".to_string()),
        "\\t" | "tab" => Ok("\t".to_string()),
        other => Ok(other.to_string()),
    }
}

/// Validate that the report length is greater than 0
fn validate_max_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("Invalid max length: '{}'. Must be a positive integer.", s))?;

    if length == 0 {
        return Err("Max length must be greater than 0".to_string());
    }

    Ok(length)
}
