//! Parsing statistics and result structures
//!
//! Tracks how many rows were read, accepted and rejected, and keeps every
//! rejected row's issue so callers can surface them as warnings.

use crate::error::RowError;
use crate::models::Record;
use serde::Serialize;
use std::fmt;

/// Parsing result with records and statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Successfully parsed records in input order
    pub records: Vec<Record>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// A rejected row and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowIssue {
    /// 1-based line number in the input text
    pub line: u64,

    /// Rendered reason
    pub message: String,

    #[serde(skip)]
    pub error: RowError,
}

impl RowIssue {
    pub fn new(line: u64, error: RowError) -> Self {
        Self {
            line,
            message: error.to_string(),
            error,
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    /// Number of non-blank data rows encountered
    pub total_rows: usize,

    /// Number of rows successfully parsed
    pub rows_parsed: usize,

    /// Number of rows rejected
    pub rows_skipped: usize,

    /// Issues for every rejected row
    pub issues: Vec<RowIssue>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected row
    pub fn add_issue(&mut self, line: u64, error: RowError) {
        self.rows_skipped += 1;
        self.issues.push(RowIssue::new(line, error));
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// True when no row was rejected
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} of {} rows parsed ({:.1}%), {} skipped",
            self.rows_parsed,
            self.total_rows,
            self.success_rate(),
            self.rows_skipped
        )
    }
}
