//! Error handling for groundwater analytics operations.
//!
//! Whole-input failures (I/O, unreadable headers, configuration) are
//! [`GroundwaterError`] variants. Problems confined to a single data row are
//! [`RowError`]s, which the parser collects instead of aborting.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroundwaterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found at path: {path}")]
    DataNotFound { path: PathBuf },

    #[error("Input is empty: no header row found")]
    EmptyInput,

    #[error("Required column '{column}' missing from header")]
    MissingColumn { column: String },

    #[error("Cannot select a latest record from an empty record set")]
    EmptyRecordSet,

    #[error("Strict mode: {rejected} of {total} rows rejected, first issue: {first_issue}")]
    RejectedRows {
        rejected: usize,
        total: usize,
        first_issue: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GroundwaterError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

/// A recoverable problem with one data row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error("empty value for required column '{column}'")]
    EmptyField { column: &'static str },

    #[error("invalid number for '{column}': '{value}'")]
    InvalidNumber { column: &'static str, value: String },

    #[error("invalid year: '{value}'")]
    InvalidYear { value: String },
}

pub type Result<T> = std::result::Result<T, GroundwaterError>;
