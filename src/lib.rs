//! # assertdiff
//!
//! Test assertions for delimited tables and JSON documents that explain the
//! first place where the expected and actual data disagree.
//!
//! ```
//! use assertdiff::{CsvAssert, CsvOptions, Order};
//!
//! let options = CsvOptions::builder()
//!     .with_row_order(Order::Ignore)
//!     .build()
//!     .unwrap();
//! CsvAssert::new(options)
//!     .equal("a;b\n1;2\n3;4", "a;b\n3;4\n1;2")
//!     .unwrap();
//! ```

pub mod assertion;
pub mod cli;
pub mod commands;
pub mod difference;
pub mod error;
pub mod node;
pub mod node_diff;
pub mod numeric;
pub mod options;
pub mod output;
pub mod report;
pub mod table;
pub mod table_diff;

pub use assertion::{assert_csv_equal, assert_json_equal, CsvAssert, JsonAssert};
pub use difference::{Difference, NodeDifference, TableDifference};
pub use error::{AssertdiffError, Result};
pub use node::{JsonDocument, JsonPath, Node, NodeKind};
pub use options::{CsvOptions, JsonOptions, Order};
pub use table::Table;
