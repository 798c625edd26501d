//! Health score and sub-index calculation
//!
//! The composite score blends water level, rainfall and depletion
//! components. The three sub-indices use their own formulas; the depletion
//! sub-index and the depletion component happen to coincide but are kept
//! apart so either can change independently.

use crate::constants::{
    BEST_RAINFALL_MM, DEPLETION_WEIGHT, GOOD_SCORE_MIN, IDEAL_PH, MAX_PH_DEVIATION,
    MAX_TOTAL_USAGE_ML, MODERATE_SCORE_MIN, RAIN_WEIGHT, WATER_WEIGHT, WORST_WATER_LEVEL_M,
};
use crate::models::Record;
use serde::Serialize;
use std::fmt;

/// Qualitative band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreLabel {
    Good,
    Moderate,
    Critical,
}

impl ScoreLabel {
    pub fn from_score(score: u8) -> Self {
        if score >= GOOD_SCORE_MIN {
            ScoreLabel::Good
        } else if score >= MODERATE_SCORE_MIN {
            ScoreLabel::Moderate
        } else {
            ScoreLabel::Critical
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLabel::Good => write!(f, "Good"),
            ScoreLabel::Moderate => write!(f, "Moderate"),
            ScoreLabel::Critical => write!(f, "Critical"),
        }
    }
}

/// Composite groundwater health score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthScore {
    pub value: u8,
    pub label: ScoreLabel,
}

/// A sub-index value with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexScore {
    pub value: u8,
    pub band: ScoreLabel,
}

impl IndexScore {
    fn new(value: u8) -> Self {
        Self {
            value,
            band: ScoreLabel::from_score(value),
        }
    }
}

/// Quality, usage and depletion sub-indices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubIndices {
    pub quality: IndexScore,
    pub usage: IndexScore,
    pub depletion: IndexScore,
}

/// Round and clamp into an integer score in [0, 100]
fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Water-level component: 0 m scores 100, 25 m or deeper scores 0
pub fn water_component(water_level: f64) -> f64 {
    (100.0 - (water_level / WORST_WATER_LEVEL_M) * 100.0).max(0.0)
}

/// Rainfall component: 1200 mm or more scores 100
pub fn rain_component(rainfall: f64) -> f64 {
    ((rainfall / BEST_RAINFALL_MM) * 100.0).min(100.0)
}

/// Depletion component of the composite score
pub fn depletion_component(depletion: f64) -> f64 {
    (100.0 - depletion).max(0.0)
}

/// Composite health score for one record
pub fn health_score(record: &Record) -> HealthScore {
    let blended = WATER_WEIGHT * water_component(record.water_level)
        + RAIN_WEIGHT * rain_component(record.rainfall)
        + DEPLETION_WEIGHT * depletion_component(record.groundwater_depletion);

    let value = to_score(blended);
    HealthScore {
        value,
        label: ScoreLabel::from_score(value),
    }
}

/// pH-based quality index: 7.5 scores 100, a deviation of 2 or more scores 0
pub fn quality_index(ph: f64) -> u8 {
    let deviation = (ph - IDEAL_PH).abs();
    to_score(100.0 - (deviation / MAX_PH_DEVIATION) * 100.0)
}

/// Usage index: no usage scores 100, 900 Ml or more scores 0
pub fn usage_index(total_usage: f64) -> u8 {
    to_score(100.0 - (total_usage / MAX_TOTAL_USAGE_ML) * 100.0)
}

/// Depletion index: the inverse of the depletion percentage
pub fn depletion_index(depletion: f64) -> u8 {
    to_score(100.0 - depletion)
}

/// All three sub-indices for one record
pub fn sub_indices(record: &Record) -> SubIndices {
    SubIndices {
        quality: IndexScore::new(quality_index(record.ph)),
        usage: IndexScore::new(usage_index(record.total_usage())),
        depletion: IndexScore::new(depletion_index(record.groundwater_depletion)),
    }
}
