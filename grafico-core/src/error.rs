use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the grafico workspace.
///
/// Covers field lookups, missing symbols, argument validation, source-tagged
/// fetch failures, and data issues detected during alignment.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraficoError {
    /// A column name did not resolve to a known OHLCV field.
    #[error("unknown field: {field}")]
    UnknownField {
        /// The field name as requested (e.g. "Close", "adj_close").
        field: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series for AAPL".
        what: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The upstream data source failed.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with returned or expected data (empty fetch, misaligned rows, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl GraficoError {
    /// Helper: build an `UnknownField` error for a column name.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }
}
