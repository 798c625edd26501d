//! Application constants for groundwater analytics
//!
//! Column names of the ingestion table, classification thresholds and the
//! normalization reference points used by the score calculator.

// =============================================================================
// Column Names
// =============================================================================

/// Header names of the ingestion table
pub mod columns {
    pub const LOCATION: &str = "Location";
    pub const YEAR: &str = "Year";
    pub const WATER_LEVEL: &str = "Water_Level";
    pub const RAINFALL: &str = "Rainfall";
    pub const GROUNDWATER_DEPLETION: &str = "Groundwater_Depletion";
    pub const PH: &str = "pH";
    pub const AGRICULTURAL_USAGE: &str = "Agricultural_Usage";
    pub const INDUSTRIAL_USAGE: &str = "Industrial_Usage";
    pub const HOUSEHOLD_USAGE: &str = "Household_Usage";

    /// Every column a record requires, in canonical order
    pub const REQUIRED: &[&str] = &[
        LOCATION,
        YEAR,
        WATER_LEVEL,
        RAINFALL,
        GROUNDWATER_DEPLETION,
        PH,
        AGRICULTURAL_USAGE,
        INDUSTRIAL_USAGE,
        HOUSEHOLD_USAGE,
    ];
}

// =============================================================================
// Status Thresholds (meters below surface)
// =============================================================================

/// Readings at or below this level are safe
pub const SAFE_WATER_LEVEL_MAX: f64 = 8.0;

/// Readings above the safe level and at or below this one are moderate
pub const MODERATE_WATER_LEVEL_MAX: f64 = 15.0;

// =============================================================================
// Score Normalization
// =============================================================================

/// Ideal groundwater pH
pub const IDEAL_PH: f64 = 7.5;

/// pH deviation that collapses the quality index to zero
pub const MAX_PH_DEVIATION: f64 = 2.0;

/// Combined usage (megalitres) treated as saturation
pub const MAX_TOTAL_USAGE_ML: f64 = 900.0;

/// Water level (m) treated as the practical worst case
pub const WORST_WATER_LEVEL_M: f64 = 25.0;

/// Rainfall (mm) treated as the practical best case
pub const BEST_RAINFALL_MM: f64 = 1200.0;

/// Composite score weights
pub const WATER_WEIGHT: f64 = 0.4;
pub const RAIN_WEIGHT: f64 = 0.3;
pub const DEPLETION_WEIGHT: f64 = 0.3;

/// Score at or above which the label is Good
pub const GOOD_SCORE_MIN: u8 = 70;

/// Score at or above which the label is Moderate
pub const MODERATE_SCORE_MIN: u8 = 40;

// =============================================================================
// Insight Thresholds
// =============================================================================

/// Safe drinking pH range
pub const SAFE_PH_MIN: f64 = 6.5;
pub const SAFE_PH_MAX: f64 = 8.5;

/// Depletion percentages above which insights escalate
pub const DEPLETION_DANGER_PCT: f64 = 60.0;
pub const DEPLETION_WARNING_PCT: f64 = 40.0;

/// Water level rise (m) over the record span that counts as decline
pub const DECLINE_TREND_M: f64 = 2.0;

/// Water level fall (m) over the record span that counts as recovery
pub const RECOVERY_TREND_M: f64 = 1.0;

/// Annual rainfall (mm) below which drought advice is given
pub const LOW_RAINFALL_MM: f64 = 500.0;

// =============================================================================
// Defaults
// =============================================================================

/// Data file read when no path is configured
pub const DEFAULT_DATA_PATH: &str = "data.csv";

/// Known locations offered when a query has no data
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "groundwater-analytics";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";
