//! Output formatting utilities

use crate::difference::Difference;
use crate::error::Result;

/// Pretty printer for assertdiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print a passing comparison
    pub fn print_success(kind: &str) {
        println!("✅ {} documents are equal", kind);
    }

    /// Print the failure report of a failed comparison
    pub fn print_failure(report: &str) {
        println!("❌ {}", report);
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format the outcome of a comparison
    pub fn format_outcome(difference: Option<&Difference>) -> Result<String> {
        let json = match difference {
            None => serde_json::json!({ "equal": true }),
            Some(difference) => serde_json::json!({
                "equal": false,
                "difference": difference,
                "message": difference.to_string(),
            }),
        };
        Self::format(&json)
    }
}
