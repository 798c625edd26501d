//! Rule-based insight generation
//!
//! Each rule is a pure function over the latest record and the location's
//! record history. Rules run in a fixed order and every rule that matches
//! contributes one insight, so the output is already in display priority.

use super::latest::sorted_by_year;
use super::status::StatusTier;
use crate::constants::{
    DECLINE_TREND_M, DEPLETION_DANGER_PCT, DEPLETION_WARNING_PCT, LOW_RAINFALL_MM,
    RECOVERY_TREND_M, SAFE_PH_MAX, SAFE_PH_MIN,
};
use crate::models::Record;
use serde::Serialize;
use std::fmt;

/// Insight severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Danger => write!(f, "danger"),
            Severity::Warning => write!(f, "warning"),
            Severity::Success => write!(f, "success"),
        }
    }
}

/// What an insight is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightTopic {
    WaterLevel,
    WaterQuality,
    Depletion,
    Trend,
    Rainfall,
}

/// One severity-tagged finding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub severity: Severity,
    pub topic: InsightTopic,
    pub message: String,
}

impl Insight {
    fn new(severity: Severity, topic: InsightTopic, message: String) -> Self {
        Self {
            severity,
            topic,
            message,
        }
    }
}

/// Inputs every rule sees
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    /// Most recent record for the location
    pub latest: &'a Record,
    /// Every record for the location, in any order
    pub records: &'a [Record],
}

/// A single insight rule
pub type InsightRule = fn(&InsightContext<'_>) -> Option<Insight>;

/// All rules in emission order
pub const INSIGHT_RULES: &[InsightRule] = &[
    water_level_insight,
    ph_insight,
    depletion_insight,
    trend_insight,
    rainfall_insight,
];

/// Run every rule in order and collect the insights that fire
pub fn generate_insights(latest: &Record, records: &[Record]) -> Vec<Insight> {
    let ctx = InsightContext { latest, records };
    INSIGHT_RULES.iter().filter_map(|rule| rule(&ctx)).collect()
}

/// Always fires: one message per water-level tier
pub fn water_level_insight(ctx: &InsightContext<'_>) -> Option<Insight> {
    let level = ctx.latest.water_level;

    let insight = match StatusTier::classify(level) {
        StatusTier::Critical => Insight::new(
            Severity::Danger,
            InsightTopic::WaterLevel,
            format!(
                "Water level is {}m below surface, which is in the critical zone. Immediate conservation measures are recommended.",
                level
            ),
        ),
        StatusTier::Moderate => Insight::new(
            Severity::Warning,
            InsightTopic::WaterLevel,
            format!(
                "Water level at {}m indicates moderate stress. Rainwater harvesting and reduced borewell usage is advisable.",
                level
            ),
        ),
        StatusTier::Safe => Insight::new(
            Severity::Success,
            InsightTopic::WaterLevel,
            format!(
                "Water level at {}m is within healthy range. Continue maintaining current conservation practices.",
                level
            ),
        ),
    };

    Some(insight)
}

/// Fires when pH leaves the safe drinking range
pub fn ph_insight(ctx: &InsightContext<'_>) -> Option<Insight> {
    let ph = ctx.latest.ph;

    (ph < SAFE_PH_MIN || ph > SAFE_PH_MAX).then(|| {
        Insight::new(
            Severity::Warning,
            InsightTopic::WaterQuality,
            format!(
                "pH level ({}) is outside the safe drinking range ({}-{}). Water quality testing is recommended.",
                ph, SAFE_PH_MIN, SAFE_PH_MAX
            ),
        )
    })
}

/// Always fires: one message per depletion band
pub fn depletion_insight(ctx: &InsightContext<'_>) -> Option<Insight> {
    let depletion = ctx.latest.groundwater_depletion;

    let insight = if depletion > DEPLETION_DANGER_PCT {
        Insight::new(
            Severity::Danger,
            InsightTopic::Depletion,
            format!(
                "Groundwater depletion at {}% is alarming. Recharge structures like percolation pits and check dams are urgently needed.",
                depletion
            ),
        )
    } else if depletion > DEPLETION_WARNING_PCT {
        Insight::new(
            Severity::Warning,
            InsightTopic::Depletion,
            format!(
                "Depletion rate of {}% shows moderate concern. Reducing agricultural pumping and fixing leakages will help.",
                depletion
            ),
        )
    } else {
        Insight::new(
            Severity::Success,
            InsightTopic::Depletion,
            format!(
                "Depletion rate of {}% is relatively manageable. Sustainable usage should continue.",
                depletion
            ),
        )
    };

    Some(insight)
}

/// Compares the earliest and latest years; silent inside the dead zone
pub fn trend_insight(ctx: &InsightContext<'_>) -> Option<Insight> {
    if ctx.records.len() < 2 {
        return None;
    }

    let sorted = sorted_by_year(ctx.records);
    let (first, last) = (sorted.first()?, sorted.last()?);
    let change = last.water_level - first.water_level;

    if change > DECLINE_TREND_M {
        Some(Insight::new(
            Severity::Danger,
            InsightTopic::Trend,
            format!(
                "Water level has dropped {:.1}m from {} to {}, indicating a declining trend.",
                change, first.year, last.year
            ),
        ))
    } else if change < -RECOVERY_TREND_M {
        Some(Insight::new(
            Severity::Success,
            InsightTopic::Trend,
            format!(
                "Water level improved by {:.1}m since {}, a positive recovery sign.",
                change.abs(),
                first.year
            ),
        ))
    } else {
        None
    }
}

/// Fires on low rainfall
pub fn rainfall_insight(ctx: &InsightContext<'_>) -> Option<Insight> {
    let rainfall = ctx.latest.rainfall;

    (rainfall < LOW_RAINFALL_MM).then(|| {
        Insight::new(
            Severity::Warning,
            InsightTopic::Rainfall,
            format!(
                "Low rainfall ({}mm) recorded. Drought-resistant crops and water-saving techniques are recommended.",
                rainfall
            ),
        )
    })
}
