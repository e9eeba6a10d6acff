//! Assertion entry points: load both sides, compare, report
//!
//! Loading and option errors come back as their own error variants. Only a
//! found difference becomes `AssertdiffError::AssertionFailed`.

use crate::difference::{NodeDifference, TableDifference};
use crate::error::{AssertdiffError, Result};
use crate::node::JsonDocument;
use crate::node_diff::NodeComparer;
use crate::options::{CsvOptions, JsonOptions};
use crate::report::ReportBuilder;
use crate::table::Table;
use crate::table_diff::TableComparer;

/// Table assertions under a fixed set of options
#[derive(Debug, Clone)]
pub struct CsvAssert {
    options: CsvOptions,
    description: String,
}

impl CsvAssert {
    pub fn new(options: CsvOptions) -> Self {
        Self {
            options,
            description: String::new(),
        }
    }

    /// Free text shown at the top of failure reports
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    pub fn load(&self, text: &str) -> Result<Table> {
        Table::load(text, &self.options)
    }

    pub fn first_difference(&self, expected: &str, actual: &str) -> Result<Option<TableDifference>> {
        let expected = self.load(expected)?;
        let actual = self.load(actual)?;
        TableComparer::new(&self.options).find_first_difference(&expected, &actual)
    }

    pub fn equal(&self, expected: &str, actual: &str) -> Result<()> {
        match self.first_difference(expected, actual)? {
            None => Ok(()),
            Some(difference) => Err(self.failure("CsvAssert::equal", difference, expected, actual)),
        }
    }

    pub fn equal_tables(&self, expected: &Table, actual: &Table) -> Result<()> {
        match TableComparer::new(&self.options).find_first_difference(expected, actual)? {
            None => Ok(()),
            Some(difference) => Err(self.failure(
                "CsvAssert::equal_tables",
                difference,
                &expected.render(&self.options),
                &actual.render(&self.options),
            )),
        }
    }

    fn failure(
        &self,
        method: &str,
        difference: TableDifference,
        expected: &str,
        actual: &str,
    ) -> AssertdiffError {
        let message = ReportBuilder::new(method)
            .description(self.description.as_str())
            .difference(format!("{}: {}", difference.kind(), difference))
            .options(self.options.summary())
            .expected(expected)
            .actual(actual)
            .max_length(self.options.max_report_length())
            .build();
        AssertdiffError::assertion_failed(message, difference)
    }
}

/// JSON assertions under a fixed set of options
#[derive(Debug, Clone)]
pub struct JsonAssert {
    options: JsonOptions,
    description: String,
}

impl JsonAssert {
    pub fn new(options: JsonOptions) -> Self {
        Self {
            options,
            description: String::new(),
        }
    }

    /// Free text shown at the top of failure reports
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    pub fn load(&self, text: &str) -> Result<JsonDocument> {
        JsonDocument::load(text, &self.options)
    }

    pub fn first_difference(&self, expected: &str, actual: &str) -> Result<Option<NodeDifference>> {
        let expected = self.load(expected)?;
        let actual = self.load(actual)?;
        Ok(NodeComparer::new(&self.options).compare_root(&expected, &actual))
    }

    pub fn equal(&self, expected: &str, actual: &str) -> Result<()> {
        match self.first_difference(expected, actual)? {
            None => Ok(()),
            Some(difference) => Err(self.failure("JsonAssert::equal", difference, expected, actual)),
        }
    }

    pub fn equal_documents(&self, expected: &JsonDocument, actual: &JsonDocument) -> Result<()> {
        match NodeComparer::new(&self.options).compare_root(expected, actual) {
            None => Ok(()),
            Some(difference) => Err(self.failure(
                "JsonAssert::equal_documents",
                difference,
                &expected.to_json_string(),
                &actual.to_json_string(),
            )),
        }
    }

    fn failure(
        &self,
        method: &str,
        difference: NodeDifference,
        expected: &str,
        actual: &str,
    ) -> AssertdiffError {
        let message = ReportBuilder::new(method)
            .description(self.description.as_str())
            .difference(format!("{}: {}", difference.kind(), difference))
            .options(self.options.summary())
            .expected(expected)
            .actual(actual)
            .max_length(self.options.max_report_length())
            .build();
        AssertdiffError::assertion_failed(message, difference)
    }
}

/// Panic with a failure report unless the two tables are equal
#[track_caller]
pub fn assert_csv_equal(expected: &str, actual: &str, options: &CsvOptions) {
    if let Err(e) = CsvAssert::new(options.clone()).equal(expected, actual) {
        panic!("{}", e);
    }
}

/// Panic with a failure report unless the two JSON documents are equal
#[track_caller]
pub fn assert_json_equal(expected: &str, actual: &str, options: &JsonOptions) {
    if let Err(e) = JsonAssert::new(options.clone()).equal(expected, actual) {
        panic!("{}", e);
    }
}
