//! The first difference found between an expected and an actual document

use crate::node::{JsonPath, NodeKind};
use serde::Serialize;
use std::fmt;

/// First disagreement between two tables
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableDifference {
    DifferentColumnLength {
        expected: usize,
        actual: usize,
    },
    DifferentRowLength {
        expected: usize,
        actual: usize,
    },
    ActualMissingColumn {
        position: usize,
        expected: String,
        actual: String,
    },
    DifferentHeaderConfig {
        expected: bool,
        actual: bool,
    },
    ActualMissingRow {
        row: usize,
        expected: String,
        actual: String,
    },
    ActualOtherValue {
        row: usize,
        column: usize,
        header: String,
        expected: String,
        actual: String,
    },
}

impl TableDifference {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DifferentColumnLength { .. } => "DifferentColumnLength",
            Self::DifferentRowLength { .. } => "DifferentRowLength",
            Self::ActualMissingColumn { .. } => "ActualMissingColumn",
            Self::DifferentHeaderConfig { .. } => "DifferentHeaderConfig",
            Self::ActualMissingRow { .. } => "ActualMissingRow",
            Self::ActualOtherValue { .. } => "ActualOtherValue",
        }
    }
}

impl fmt::Display for TableDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DifferentColumnLength { expected, actual } => write!(
                f,
                "Expected {} columns but actual has {} columns",
                expected, actual
            ),
            Self::DifferentRowLength { expected, actual } => {
                write!(f, "Expected {} rows but actual has {} rows", expected, actual)
            }
            Self::ActualMissingColumn {
                position,
                expected,
                actual,
            } => write!(
                f,
                "Actual is missing column '{}' (found '{}' at position {})",
                expected, actual, position
            ),
            Self::DifferentHeaderConfig { expected, actual } => write!(
                f,
                "Header configuration differs: expected has header = {}, actual has header = {}",
                expected, actual
            ),
            Self::ActualMissingRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Actual is missing row {} [{}] (closest actual row after sorting: [{}])",
                row, expected, actual
            ),
            Self::ActualOtherValue {
                row,
                column,
                header,
                expected,
                actual,
            } => write!(
                f,
                "Row {}, column '{}' (#{}): expected '{}' but was '{}'",
                row, header, column, expected, actual
            ),
        }
    }
}

/// First disagreement between two JSON documents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDifference {
    ActualIsNull {
        path: JsonPath,
        expected: String,
    },
    ExpectedIsNull {
        path: JsonPath,
        actual: String,
    },
    ActualOtherType {
        path: JsonPath,
        expected_type: NodeKind,
        actual_type: NodeKind,
        expected: String,
        actual: String,
    },
    ActualOtherValue {
        path: JsonPath,
        expected: String,
        actual: String,
    },
    ActualMissesProperty {
        path: JsonPath,
        property: String,
    },
    ExpectedMissesProperty {
        path: JsonPath,
        property: String,
    },
    DifferentLength {
        path: JsonPath,
        expected: usize,
        actual: usize,
    },
}

impl NodeDifference {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ActualIsNull { .. } => "ActualIsNull",
            Self::ExpectedIsNull { .. } => "ExpectedIsNull",
            Self::ActualOtherType { .. } => "ActualOtherType",
            Self::ActualOtherValue { .. } => "ActualOtherValue",
            Self::ActualMissesProperty { .. } => "ActualMissesProperty",
            Self::ExpectedMissesProperty { .. } => "ExpectedMissesProperty",
            Self::DifferentLength { .. } => "DifferentLength",
        }
    }

    pub fn path(&self) -> &JsonPath {
        match self {
            Self::ActualIsNull { path, .. }
            | Self::ExpectedIsNull { path, .. }
            | Self::ActualOtherType { path, .. }
            | Self::ActualOtherValue { path, .. }
            | Self::ActualMissesProperty { path, .. }
            | Self::ExpectedMissesProperty { path, .. }
            | Self::DifferentLength { path, .. } => path,
        }
    }
}

impl fmt::Display for NodeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActualIsNull { path, expected } => {
                write!(f, "At '{}': expected {} but actual is null", path, expected)
            }
            Self::ExpectedIsNull { path, actual } => {
                write!(f, "At '{}': expected null but actual is {}", path, actual)
            }
            Self::ActualOtherType {
                path,
                expected_type,
                actual_type,
                expected,
                actual,
            } => write!(
                f,
                "At '{}': expected {} {} but actual is {} {}",
                path, expected_type, expected, actual_type, actual
            ),
            Self::ActualOtherValue {
                path,
                expected,
                actual,
            } => write!(f, "At '{}': expected {} but was {}", path, expected, actual),
            Self::ActualMissesProperty { path, property } => {
                write!(f, "At '{}': actual is missing property '{}'", path, property)
            }
            Self::ExpectedMissesProperty { path, property } => write!(
                f,
                "At '{}': actual has unexpected property '{}'",
                path, property
            ),
            Self::DifferentLength {
                path,
                expected,
                actual,
            } => write!(
                f,
                "At '{}': expected {} elements but actual has {} elements",
                path, expected, actual
            ),
        }
    }
}

/// A difference from either comparer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Difference {
    Table(TableDifference),
    Node(NodeDifference),
}

impl Difference {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Table(difference) => difference.kind(),
            Self::Node(difference) => difference.kind(),
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(difference) => difference.fmt(f),
            Self::Node(difference) => difference.fmt(f),
        }
    }
}

impl From<TableDifference> for Difference {
    fn from(difference: TableDifference) -> Self {
        Self::Table(difference)
    }
}

impl From<NodeDifference> for Difference {
    fn from(difference: NodeDifference) -> Self {
        Self::Node(difference)
    }
}
