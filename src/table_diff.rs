//! First-difference search between two tables
//!
//! Tables are compared through projections: each side is reduced to the
//! indices of its non-ignored columns (sorted by header when column order is
//! ignored) and, when row order is ignored, to a sorted list of row
//! references. Loaded tables are never reordered in place.

use crate::difference::TableDifference;
use crate::error::{AssertdiffError, Result};
use crate::options::CsvOptions;
use crate::table::{Row, Table};
use indexmap::IndexSet;
use std::collections::HashSet;

/// Separator used when joining cell values into a row sort key
const ROW_KEY_SEPARATOR: &str = "|";

/// Compares tables under one set of options
pub struct TableComparer<'a> {
    options: &'a CsvOptions,
}

impl<'a> TableComparer<'a> {
    pub fn new(options: &'a CsvOptions) -> Self {
        Self { options }
    }

    /// Find the first difference between two tables.
    ///
    /// Fails only when the options cannot be applied to the tables; a
    /// mismatch is returned as `Ok(Some(_))`.
    pub fn find_first_difference(
        &self,
        expected: &Table,
        actual: &Table,
    ) -> Result<Option<TableDifference>> {
        self.check_column_identity(expected)?;
        self.check_column_identity(actual)?;

        let difference = self.first_difference(expected, actual);
        match &difference {
            Some(difference) => log::debug!("First table difference: {}", difference),
            None => log::debug!("Tables are equal"),
        }
        Ok(difference)
    }

    /// Ignoring column order pairs columns by header name, which only works
    /// when no two compared columns share a name.
    pub fn check_column_identity(&self, table: &Table) -> Result<()> {
        if !self.options.column_order().is_ignored() {
            return Ok(());
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let duplicates: IndexSet<&str> = table
            .headers()
            .iter()
            .map(String::as_str)
            .filter(|header| !self.options.is_ignored(header))
            .filter(|header| !seen.insert(*header))
            .collect();

        if duplicates.is_empty() {
            return Ok(());
        }
        Err(AssertdiffError::config_conflict(format!(
            "Column order is ignored but these headers are not unique: {}",
            duplicates.into_iter().collect::<Vec<_>>().join(", ")
        )))
    }

    fn first_difference(&self, expected: &Table, actual: &Table) -> Option<TableDifference> {
        let expected_columns = self.effective_columns(expected);
        let actual_columns = self.effective_columns(actual);

        if expected_columns.len() != actual_columns.len() {
            return Some(TableDifference::DifferentColumnLength {
                expected: expected_columns.len(),
                actual: actual_columns.len(),
            });
        }

        if expected.row_count() != actual.row_count() {
            return Some(TableDifference::DifferentRowLength {
                expected: expected.row_count(),
                actual: actual.row_count(),
            });
        }

        let header_mismatch = expected_columns
            .iter()
            .zip(&actual_columns)
            .enumerate()
            .find(|(_, (e, a))| expected.headers()[**e] != actual.headers()[**a]);
        if let Some((position, (&e, &a))) = header_mismatch {
            return Some(TableDifference::ActualMissingColumn {
                position,
                expected: expected.headers()[e].clone(),
                actual: actual.headers()[a].clone(),
            });
        }

        if expected.has_header() != actual.has_header() {
            return Some(TableDifference::DifferentHeaderConfig {
                expected: expected.has_header(),
                actual: actual.has_header(),
            });
        }

        if self.options.row_order().is_ignored() && expected.row_count() > 1 {
            self.compare_sorted_rows(expected, actual, &expected_columns, &actual_columns)
        } else {
            self.compare_rows(expected, actual, &expected_columns, &actual_columns)
        }
    }

    fn compare_rows(
        &self,
        expected: &Table,
        actual: &Table,
        expected_columns: &[usize],
        actual_columns: &[usize],
    ) -> Option<TableDifference> {
        for (expected_row, actual_row) in expected.rows().iter().zip(actual.rows()) {
            log::trace!("Comparing row {}", expected_row.index());
            for (&e, &a) in expected_columns.iter().zip(actual_columns) {
                let expected_cell = &expected_row.cells()[e];
                let actual_cell = &actual_row.cells()[a];
                if expected_cell != actual_cell {
                    return Some(TableDifference::ActualOtherValue {
                        row: expected_row.index(),
                        column: expected_cell.column_index(),
                        header: expected_cell.header().to_string(),
                        expected: expected_cell.value().to_string(),
                        actual: actual_cell.value().to_string(),
                    });
                }
            }
        }
        None
    }

    fn compare_sorted_rows(
        &self,
        expected: &Table,
        actual: &Table,
        expected_columns: &[usize],
        actual_columns: &[usize],
    ) -> Option<TableDifference> {
        let expected_rows = sorted_rows(expected, expected_columns);
        let actual_rows = sorted_rows(actual, actual_columns);

        expected_rows
            .into_iter()
            .zip(actual_rows)
            .find(|(expected_row, actual_row)| {
                expected_columns
                    .iter()
                    .zip(actual_columns)
                    .any(|(&e, &a)| expected_row.cells()[e] != actual_row.cells()[a])
            })
            .map(|(expected_row, actual_row)| TableDifference::ActualMissingRow {
                row: expected_row.index(),
                expected: row_key(expected_row, expected_columns),
                actual: row_key(actual_row, actual_columns),
            })
    }

    /// Indices of the columns that take part in the comparison
    fn effective_columns(&self, table: &Table) -> Vec<usize> {
        let mut columns: Vec<usize> = (0..table.column_count())
            .filter(|&i| !self.options.is_ignored(&table.headers()[i]))
            .collect();
        if self.options.column_order().is_ignored() {
            columns.sort_by(|&a, &b| table.headers()[a].cmp(&table.headers()[b]));
        }
        columns
    }
}

/// Rows ordered by their joined cell values; equal keys keep source order
fn sorted_rows<'t>(table: &'t Table, columns: &[usize]) -> Vec<&'t Row> {
    let mut rows: Vec<&Row> = table.rows().iter().collect();
    rows.sort_by_cached_key(|row| row_key(row, columns));
    rows
}

fn row_key(row: &Row, columns: &[usize]) -> String {
    columns
        .iter()
        .map(|&i| row.cells()[i].value())
        .collect::<Vec<_>>()
        .join(ROW_KEY_SEPARATOR)
}
