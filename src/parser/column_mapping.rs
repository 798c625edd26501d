//! Column mapping for the monitoring table header
//!
//! Resolves every required column to its position so rows can be read by
//! name rather than by assumed order.

use crate::constants::columns;
use crate::error::{GroundwaterError, Result};
use csv::StringRecord;
use std::collections::HashMap;

use super::field_parsers::clean_field;

/// Column name to index mapping for one input table
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Number of fields declared by the header
    pub field_count: usize,
}

impl ColumnMapping {
    /// Analyze the header row and check that every required column is present
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated header names
            name_to_index
                .entry(clean_field(header).to_string())
                .or_insert(index);
        }

        for column in columns::REQUIRED {
            if !name_to_index.contains_key(*column) {
                return Err(GroundwaterError::missing_column(*column));
            }
        }

        Ok(ColumnMapping {
            name_to_index,
            field_count: headers.len(),
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Columns present in the header that the engine does not use
    pub fn extra_columns(&self) -> Vec<&str> {
        let mut extra: Vec<&str> = self
            .name_to_index
            .keys()
            .map(String::as_str)
            .filter(|name| !columns::REQUIRED.contains(name))
            .collect();
        extra.sort_unstable();
        extra
    }
}
