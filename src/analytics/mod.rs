//! Groundwater analytics engine
//!
//! Pure, synchronous functions over records already resident in memory:
//!
//! - [`latest`] - Latest-record selection and year ordering
//! - [`status`] - Three-tier water-level classification
//! - [`score`] - Composite health score and sub-indices
//! - [`insights`] - Ordered rule-based findings
//! - [`diagnostic`] - Per-location assembly and query outcomes
//!
//! # Example Usage
//!
//! ```rust
//! use groundwater_analytics::analytics::{LocationOutcome, diagnose_location};
//! use groundwater_analytics::dataset::Dataset;
//!
//! let dataset = Dataset::parse(
//!     "Location,Year,Water_Level,Rainfall,Groundwater_Depletion,pH,Agricultural_Usage,Industrial_Usage,Household_Usage\n\
//!      Deolali,2022,5,1200,0,7.5,0,0,0\n",
//! )
//! .unwrap();
//!
//! match diagnose_location(&dataset, "deolali", 5) {
//!     LocationOutcome::Ready(diagnostic) => assert_eq!(diagnostic.score.value, 100),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod diagnostic;
pub mod insights;
pub mod latest;
pub mod score;
pub mod status;

#[cfg(test)]
pub mod tests;

pub use diagnostic::{Diagnostic, LocationOutcome, diagnose_location};
pub use insights::{Insight, InsightTopic, Severity, generate_insights};
pub use latest::{latest_record, sorted_by_year};
pub use score::{HealthScore, IndexScore, ScoreLabel, SubIndices, health_score, sub_indices};
pub use status::{StatusReport, StatusTier, classify_status};
