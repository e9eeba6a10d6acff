//! Error types for assertdiff operations

use crate::difference::Difference;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssertdiffError>;

#[derive(Error, Debug)]
pub enum AssertdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Malformed table: {message}\nInput:\n{input}")]
    TableParse { message: String, input: String },

    #[error("Malformed JSON: {message}\nInput:\n{input}")]
    JsonParse { message: String, input: String },

    #[error("Configuration conflict: {message}")]
    ConfigConflict { message: String },

    #[error("{message}")]
    AssertionFailed {
        message: String,
        difference: Box<Difference>,
    },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl AssertdiffError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn table_parse(msg: impl Into<String>, input: impl Into<String>) -> Self {
        Self::TableParse {
            message: msg.into(),
            input: input.into(),
        }
    }

    pub fn json_parse(msg: impl Into<String>, input: impl Into<String>) -> Self {
        Self::JsonParse {
            message: msg.into(),
            input: input.into(),
        }
    }

    pub fn config_conflict(msg: impl Into<String>) -> Self {
        Self::ConfigConflict {
            message: msg.into(),
        }
    }

    pub fn assertion_failed(msg: impl Into<String>, difference: impl Into<Difference>) -> Self {
        Self::AssertionFailed {
            message: msg.into(),
            difference: Box::new(difference.into()),
        }
    }

    /// The difference behind a failed assertion, if this is one
    pub fn difference(&self) -> Option<&Difference> {
        match self {
            Self::AssertionFailed { difference, .. } => Some(difference),
            _ => None,
        }
    }

    /// Whether this error came from a mismatch rather than bad input
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed { .. })
    }
}
