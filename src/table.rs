//! Tabular model and loader for delimited text

use crate::error::{AssertdiffError, Result};
use crate::numeric;
use crate::options::CsvOptions;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single value in a table
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    header: String,
    column_index: usize,
    row_index: usize,
    value: String,
}

impl Cell {
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Cells are equal when their values are numerically equal, or textually
/// equal if either side is not a number. Position and header are not part of
/// the comparison.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        numeric::values_equal(&self.value, &other.value)
    }
}

/// A row of cells, one per column
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    index: usize,
    cells: Vec<Cell>,
}

impl Row {
    /// Zero-based position of the row, not counting the header
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// First cell under the given header
    pub fn cell(&self, header: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.header == header)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.value.as_str())
    }
}

/// A loaded table: header names plus rows of equal width
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    headers: Vec<String>,
    has_header: bool,
    rows: Vec<Row>,
}

impl Table {
    /// Parse delimited text into a table.
    ///
    /// Every line must hold the same number of cells; otherwise the error
    /// groups line indices by the cell count observed on them.
    pub fn load(text: &str, options: &CsvOptions) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(AssertdiffError::invalid_input("Table text must not be blank"));
        }

        let lines = split_lines(text, options.row_terminator());
        let records: Vec<Vec<String>> = lines
            .iter()
            .map(|line| {
                line.split(options.separator())
                    .map(str::to_string)
                    .collect()
            })
            .collect();

        if let Some(message) = width_mismatch(&records) {
            return Err(AssertdiffError::table_parse(message, text));
        }

        let column_count = records.first().map(Vec::len).unwrap_or(0);
        let mut records = records.into_iter();
        let headers = if options.has_header() {
            records.next().unwrap_or_default()
        } else {
            synthetic_headers(column_count)
        };

        let rows = records
            .enumerate()
            .map(|(row_index, values)| Row {
                index: row_index,
                cells: values
                    .into_iter()
                    .enumerate()
                    .map(|(column_index, value)| Cell {
                        header: headers[column_index].clone(),
                        column_index,
                        row_index,
                        value,
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Loaded table with {} columns and {} rows (header: {})",
            headers.len(),
            rows.len(),
            options.has_header()
        );

        Ok(Self {
            headers,
            has_header: options.has_header(),
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Render the table back to delimited text.
    ///
    /// Synthetic headers are not written, so loading the output with the same
    /// options gives back the same headers, row count and column count. Every
    /// line is terminated; the loader drops exactly one trailing terminator, so
    /// a final row holding one empty cell survives the reload.
    pub fn render(&self, options: &CsvOptions) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        if self.has_header {
            lines.push(self.headers.join(options.separator()));
        }
        for row in &self.rows {
            lines.push(row.values().collect::<Vec<_>>().join(options.separator()));
        }
        let mut text = lines.join(options.row_terminator());
        text.push_str(options.row_terminator());
        text
    }
}

/// Header names used when the text has no header row
pub fn synthetic_headers(column_count: usize) -> Vec<String> {
    (0..column_count).map(|i| format!("Col #{}", i)).collect()
}

fn split_lines<'a>(text: &'a str, terminator: &str) -> Vec<&'a str> {
    let mut lines: Vec<&str> = text.split(terminator).collect();
    if lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if terminator != "\n" {
        return lines;
    }
    lines
        .into_iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn width_mismatch(records: &[Vec<String>]) -> Option<String> {
    let mut by_width: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (line_index, record) in records.iter().enumerate() {
        by_width.entry(record.len()).or_default().push(line_index);
    }
    if by_width.len() <= 1 {
        return None;
    }

    let groups = by_width
        .iter()
        .map(|(width, lines)| {
            format!(
                "{} columns: rows {}",
                width,
                lines
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("Inconsistent column count\n{}", groups))
}
