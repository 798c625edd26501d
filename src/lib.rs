//! Groundwater Analytics Library
//!
//! A Rust library for turning per-location yearly groundwater monitoring
//! records into health diagnostics.
//!
//! This library provides tools for:
//! - Parsing monitoring tables with per-row validation and parse statistics
//! - Indexing records by case-insensitive location for O(1) lookups
//! - Classifying water levels into safe, moderate and critical tiers
//! - Computing a composite health score and quality/usage/depletion sub-indices
//! - Generating ordered, severity-tagged insights from a location's history
//!
//! All analytics are pure functions over a caller-owned [`Dataset`]; the
//! only I/O is [`dataset::load_dataset`].

pub mod analytics;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod models;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use analytics::{Diagnostic, LocationOutcome, diagnose_location};
pub use config::EngineConfig;
pub use dataset::Dataset;
pub use error::{GroundwaterError, Result, RowError};
pub use models::Record;
