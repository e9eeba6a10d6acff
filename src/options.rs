//! Comparison options for tables and JSON documents
//!
//! Options are assembled through a builder and frozen by `build()`. Nothing
//! downstream of `build()` can change them, so a single `CsvOptions` or
//! `JsonOptions` value describes the whole of one comparison.

use crate::error::{AssertdiffError, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Default cell separator for tabular text
pub const DEFAULT_SEPARATOR: &str = ";";

/// Default row terminator for tabular text
pub const DEFAULT_ROW_TERMINATOR: &str = "\n";

/// Default number of characters shown per document in failure reports
pub const DEFAULT_MAX_REPORT_LENGTH: usize = 1000;

/// Whether positions along one axis take part in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Elements are paired by position
    Include,
    /// Elements are paired after sorting both sides
    Ignore,
}

impl Order {
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "include" => Ok(Self::Include),
            "ignore" => Ok(Self::Ignore),
            _ => Err(format!("Invalid order: {}. Use 'include' or 'ignore'", s)),
        }
    }

    pub fn is_ignored(self) -> bool {
        self == Self::Ignore
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Ignore => f.write_str("ignore"),
        }
    }
}

/// Frozen options for loading and comparing tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    separator: String,
    row_terminator: String,
    has_header: bool,
    ignored_columns: IndexSet<String>,
    row_order: Order,
    column_order: Order,
    max_report_length: usize,
}

impl CsvOptions {
    pub fn builder() -> CsvOptionsBuilder {
        CsvOptionsBuilder::default()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn row_terminator(&self) -> &str {
        &self.row_terminator
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn ignored_columns(&self) -> &IndexSet<String> {
        &self.ignored_columns
    }

    pub fn is_ignored(&self, header: &str) -> bool {
        self.ignored_columns.contains(header)
    }

    pub fn row_order(&self) -> Order {
        self.row_order
    }

    pub fn column_order(&self) -> Order {
        self.column_order
    }

    pub fn max_report_length(&self) -> usize {
        self.max_report_length
    }

    /// One-line description used in failure reports
    pub fn summary(&self) -> String {
        format!(
            "separator={:?}, header={}, row order={}, column order={}, ignored=[{}]",
            self.separator,
            self.has_header,
            self.row_order,
            self.column_order,
            self.ignored_columns
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            row_terminator: DEFAULT_ROW_TERMINATOR.to_string(),
            has_header: true,
            ignored_columns: IndexSet::new(),
            row_order: Order::Include,
            column_order: Order::Include,
            max_report_length: DEFAULT_MAX_REPORT_LENGTH,
        }
    }
}

/// Builder for [`CsvOptions`]
#[derive(Debug, Clone)]
pub struct CsvOptionsBuilder {
    separator: String,
    row_terminator: String,
    has_header: bool,
    ignored_columns: Vec<String>,
    row_order: Order,
    column_order: Order,
    max_report_length: usize,
}

impl Default for CsvOptionsBuilder {
    fn default() -> Self {
        let defaults = CsvOptions::default();
        Self {
            separator: defaults.separator,
            row_terminator: defaults.row_terminator,
            has_header: defaults.has_header,
            ignored_columns: Vec::new(),
            row_order: defaults.row_order,
            column_order: defaults.column_order,
            max_report_length: defaults.max_report_length,
        }
    }
}

impl CsvOptionsBuilder {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_row_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.row_terminator = terminator.into();
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn ignore_column(mut self, header: impl Into<String>) -> Self {
        self.ignored_columns.push(header.into());
        self
    }

    pub fn ignore_columns<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_columns.extend(headers.into_iter().map(Into::into));
        self
    }

    pub fn with_row_order(mut self, order: Order) -> Self {
        self.row_order = order;
        self
    }

    pub fn with_column_order(mut self, order: Order) -> Self {
        self.column_order = order;
        self
    }

    pub fn with_max_report_length(mut self, length: usize) -> Self {
        self.max_report_length = length;
        self
    }

    /// Validate and freeze the options
    pub fn build(self) -> Result<CsvOptions> {
        if self.separator.is_empty() {
            return Err(AssertdiffError::invalid_input("Separator must not be empty"));
        }
        if self.row_terminator.is_empty() {
            return Err(AssertdiffError::invalid_input(
                "Row terminator must not be empty",
            ));
        }
        if self.separator == self.row_terminator {
            return Err(AssertdiffError::invalid_input(format!(
                "Separator and row terminator must differ (both {:?})",
                self.separator
            )));
        }
        validate_report_length(self.max_report_length)?;
        let ignored_columns = validate_ignore_list(self.ignored_columns, "column", |name| name)?;

        Ok(CsvOptions {
            separator: self.separator,
            row_terminator: self.row_terminator,
            has_header: self.has_header,
            ignored_columns,
            row_order: self.row_order,
            column_order: self.column_order,
            max_report_length: self.max_report_length,
        })
    }
}

/// Frozen options for loading and comparing JSON documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    ignored_nodes: IndexSet<String>,
    array_order: Order,
    case_insensitive_keys: bool,
    max_report_length: usize,
}

impl JsonOptions {
    pub fn builder() -> JsonOptionsBuilder {
        JsonOptionsBuilder::default()
    }

    /// Ignored property names, already case-folded when keys are case-insensitive
    pub fn ignored_nodes(&self) -> &IndexSet<String> {
        &self.ignored_nodes
    }

    pub fn array_order(&self) -> Order {
        self.array_order
    }

    pub fn case_insensitive_keys(&self) -> bool {
        self.case_insensitive_keys
    }

    pub fn max_report_length(&self) -> usize {
        self.max_report_length
    }

    /// Normalize a property name the way object lookups see it
    pub fn fold_key(&self, name: &str) -> String {
        fold_key(name, self.case_insensitive_keys)
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        !self.ignored_nodes.is_empty() && self.ignored_nodes.contains(&self.fold_key(name))
    }

    /// One-line description used in failure reports
    pub fn summary(&self) -> String {
        format!(
            "array order={}, case-insensitive keys={}, ignored=[{}]",
            self.array_order,
            self.case_insensitive_keys,
            self.ignored_nodes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            ignored_nodes: IndexSet::new(),
            array_order: Order::Ignore,
            case_insensitive_keys: true,
            max_report_length: DEFAULT_MAX_REPORT_LENGTH,
        }
    }
}

/// Builder for [`JsonOptions`]
#[derive(Debug, Clone)]
pub struct JsonOptionsBuilder {
    ignored_nodes: Vec<String>,
    array_order: Order,
    case_insensitive_keys: bool,
    max_report_length: usize,
}

impl Default for JsonOptionsBuilder {
    fn default() -> Self {
        let defaults = JsonOptions::default();
        Self {
            ignored_nodes: Vec::new(),
            array_order: defaults.array_order,
            case_insensitive_keys: defaults.case_insensitive_keys,
            max_report_length: defaults.max_report_length,
        }
    }
}

impl JsonOptionsBuilder {
    pub fn ignore_node(mut self, name: impl Into<String>) -> Self {
        self.ignored_nodes.push(name.into());
        self
    }

    pub fn ignore_nodes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_nodes.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_array_order(mut self, order: Order) -> Self {
        self.array_order = order;
        self
    }

    pub fn with_case_insensitive_keys(mut self, enabled: bool) -> Self {
        self.case_insensitive_keys = enabled;
        self
    }

    pub fn with_max_report_length(mut self, length: usize) -> Self {
        self.max_report_length = length;
        self
    }

    /// Validate and freeze the options
    pub fn build(self) -> Result<JsonOptions> {
        validate_report_length(self.max_report_length)?;
        let case_insensitive = self.case_insensitive_keys;
        let ignored_nodes = validate_ignore_list(self.ignored_nodes, "node", |name| {
            fold_key(&name, case_insensitive)
        })?;

        Ok(JsonOptions {
            ignored_nodes,
            array_order: self.array_order,
            case_insensitive_keys: self.case_insensitive_keys,
            max_report_length: self.max_report_length,
        })
    }
}

pub(crate) fn fold_key(name: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}

fn validate_report_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(AssertdiffError::invalid_input(
            "Maximum report length must be greater than 0",
        ));
    }
    Ok(())
}

fn validate_ignore_list(
    names: Vec<String>,
    kind: &str,
    normalize: impl Fn(String) -> String,
) -> Result<IndexSet<String>> {
    let mut set = IndexSet::with_capacity(names.len());
    for name in names {
        if name.trim().is_empty() {
            return Err(AssertdiffError::invalid_input(format!(
                "Ignored {} name must not be blank",
                kind
            )));
        }
        set.insert(normalize(name));
    }
    Ok(set)
}

/// Options file layout, e.g.
///
/// ```json
/// { "csv": { "separator": ",", "ignore": ["ts"], "row_order": "ignore" },
///   "json": { "array_order": "include" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    #[serde(default)]
    pub csv: CsvSettings,
    #[serde(default)]
    pub json: JsonSettings,
}

impl OptionsFile {
    /// Read an options file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| {
            AssertdiffError::invalid_input(format!(
                "Invalid options file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| AssertdiffError::invalid_input(e.to_string()))
    }
}

/// Table settings as they appear in an options file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvSettings {
    pub separator: Option<String>,
    pub row_terminator: Option<String>,
    pub has_header: Option<bool>,
    pub ignore: Vec<String>,
    pub row_order: Option<Order>,
    pub column_order: Option<Order>,
    pub max_report_length: Option<usize>,
}

impl CsvSettings {
    pub fn apply(&self, mut builder: CsvOptionsBuilder) -> CsvOptionsBuilder {
        if let Some(separator) = &self.separator {
            builder = builder.with_separator(separator.clone());
        }
        if let Some(terminator) = &self.row_terminator {
            builder = builder.with_row_terminator(terminator.clone());
        }
        if let Some(has_header) = self.has_header {
            builder = builder.with_header(has_header);
        }
        if let Some(order) = self.row_order {
            builder = builder.with_row_order(order);
        }
        if let Some(order) = self.column_order {
            builder = builder.with_column_order(order);
        }
        if let Some(length) = self.max_report_length {
            builder = builder.with_max_report_length(length);
        }
        builder.ignore_columns(self.ignore.iter().cloned())
    }
}

/// JSON settings as they appear in an options file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonSettings {
    pub ignore: Vec<String>,
    pub array_order: Option<Order>,
    pub case_insensitive_keys: Option<bool>,
    pub max_report_length: Option<usize>,
}

impl JsonSettings {
    pub fn apply(&self, mut builder: JsonOptionsBuilder) -> JsonOptionsBuilder {
        if let Some(order) = self.array_order {
            builder = builder.with_array_order(order);
        }
        if let Some(enabled) = self.case_insensitive_keys {
            builder = builder.with_case_insensitive_keys(enabled);
        }
        if let Some(length) = self.max_report_length {
            builder = builder.with_max_report_length(length);
        }
        builder.ignore_nodes(self.ignore.iter().cloned())
    }
}
