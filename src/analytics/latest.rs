//! Latest-record selection

use crate::error::{GroundwaterError, Result};
use crate::models::Record;

/// Select the record with the maximum year
///
/// On a tie the first record in input order wins. An empty slice is a
/// precondition violation reported as [`GroundwaterError::EmptyRecordSet`].
pub fn latest_record(records: &[Record]) -> Result<&Record> {
    let (first, rest) = records
        .split_first()
        .ok_or(GroundwaterError::EmptyRecordSet)?;

    Ok(rest
        .iter()
        .fold(first, |best, candidate| {
            if candidate.year > best.year {
                candidate
            } else {
                best
            }
        }))
}

/// Records sorted by year ascending; equal years keep input order
pub fn sorted_by_year(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.year);
    sorted
}
