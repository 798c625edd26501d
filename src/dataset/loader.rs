//! File loading adapter
//!
//! The only I/O in the crate: reads the monitoring table from disk and
//! hands the text to the synchronous parser.

use std::path::Path;
use tracing::info;

use super::Dataset;
use crate::error::{GroundwaterError, Result};

/// Read and parse a monitoring table from disk
///
/// With `strict` set, any rejected row fails the load.
pub async fn load_dataset(path: &Path, strict: bool) -> Result<Dataset> {
    if !tokio::fs::try_exists(path).await? {
        return Err(GroundwaterError::DataNotFound {
            path: path.to_path_buf(),
        });
    }

    info!("Loading monitoring data: {}", path.display());
    let content = tokio::fs::read_to_string(path).await?;

    let dataset = Dataset::parse(&content)?;
    let stats = dataset.parse_stats();

    if strict && !stats.is_clean() {
        return Err(GroundwaterError::RejectedRows {
            rejected: stats.rows_skipped,
            total: stats.total_rows,
            first_issue: stats
                .issues
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
        });
    }

    info!(
        "Loaded {} records for {} locations",
        dataset.record_count(),
        dataset.index().location_count()
    );

    Ok(dataset)
}
