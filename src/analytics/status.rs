//! Water-level status classification

use crate::constants::{MODERATE_WATER_LEVEL_MAX, SAFE_WATER_LEVEL_MAX};
use serde::Serialize;
use std::fmt;

/// Three-tier groundwater status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Safe,
    Moderate,
    Critical,
}

impl StatusTier {
    /// Classify a water level in meters below surface
    ///
    /// Total over all inputs: anything that is neither safe nor moderate
    /// (including NaN) is critical.
    pub fn classify(water_level: f64) -> Self {
        if water_level <= SAFE_WATER_LEVEL_MAX {
            StatusTier::Safe
        } else if water_level <= MODERATE_WATER_LEVEL_MAX {
            StatusTier::Moderate
        } else {
            StatusTier::Critical
        }
    }

    /// Upper-case label for display
    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::Safe => "SAFE",
            StatusTier::Moderate => "MODERATE",
            StatusTier::Critical => "CRITICAL",
        }
    }

    /// Guidance text for the tier
    pub fn description(&self) -> &'static str {
        match self {
            StatusTier::Safe => {
                "Groundwater levels are healthy in this area. Continue sustainable practices."
            }
            StatusTier::Moderate => {
                "Moderate water stress detected. Consider water conservation measures and rainwater harvesting."
            }
            StatusTier::Critical => {
                "Critical water levels detected! Urgent conservation action and policy intervention needed."
            }
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status tier with its description, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub tier: StatusTier,
    pub label: &'static str,
    pub description: &'static str,
}

/// Classify a water level into a status report
pub fn classify_status(water_level: f64) -> StatusReport {
    let tier = StatusTier::classify(water_level);
    StatusReport {
        tier,
        label: tier.label(),
        description: tier.description(),
    }
}
