//! Headline statistics across a whole dataset

use crate::models::Record;
use serde::Serialize;

/// Dataset-wide summary figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Distinct display-case locations
    pub total_locations: usize,

    /// Records in the dataset
    pub total_records: usize,

    /// Most recent year present
    pub latest_year: Option<i32>,

    /// Mean rainfall (mm) over records of the latest year
    pub avg_rainfall_latest: Option<f64>,

    /// Mean water level (m) over records of the latest year
    pub avg_water_level_latest: Option<f64>,
}

impl DatasetSummary {
    /// Compute the summary; every optional figure is `None` for an empty dataset
    pub fn compute(records: &[Record], total_locations: usize) -> Self {
        let latest_year = records.iter().map(|r| r.year).max();

        let (avg_rainfall_latest, avg_water_level_latest) = match latest_year {
            Some(year) => {
                let latest: Vec<&Record> = records.iter().filter(|r| r.year == year).collect();
                let count = latest.len() as f64;
                (
                    Some(latest.iter().map(|r| r.rainfall).sum::<f64>() / count),
                    Some(latest.iter().map(|r| r.water_level).sum::<f64>() / count),
                )
            }
            None => (None, None),
        };

        Self {
            total_locations,
            total_records: records.len(),
            latest_year,
            avg_rainfall_latest,
            avg_water_level_latest,
        }
    }

    /// Average rainfall rounded to whole millimetres for display
    pub fn rainfall_display(&self) -> Option<String> {
        self.avg_rainfall_latest.map(|v| format!("{:.0}", v))
    }

    /// Average water level to one decimal for display
    pub fn water_level_display(&self) -> Option<String> {
        self.avg_water_level_latest.map(|v| format!("{:.1}", v))
    }
}
