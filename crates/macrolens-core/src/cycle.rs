//! # Cycle Phase Assessor
//!
//! Maps a basket of cycle indicators to a 0-100 risk score and a named
//! business-cycle phase.
//!
//! Each indicator is danger, warning or normal. Danger counts double:
//!
//! ```text
//! risk = round(100 × (2·danger + warning) / (2·total))
//! ```
//!
//! Phase bands are half-open, so boundaries belong to the higher band:
//! `[0,25)` early, `[25,50)` mid, `[50,75)` late, `[75,100]` crisis.

use crate::types::CycleIndicator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the mid-cycle band.
pub const MID_CYCLE_FLOOR: u8 = 25;
/// Lower bound of the late-cycle band.
pub const LATE_CYCLE_FLOOR: u8 = 50;
/// Lower bound of the crisis band.
pub const CRISIS_FLOOR: u8 = 75;

// =============================================================================
// STATUS & PHASE
// =============================================================================

/// Classification of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    Normal,
    Warning,
    Danger,
}

impl IndicatorStatus {
    /// Classify one indicator against its thresholds.
    ///
    /// Inverted indicators signal danger with low values and compare with `<=`.
    #[must_use]
    pub fn of(indicator: &CycleIndicator) -> Self {
        let value = indicator.current_value;
        let (danger, warning) = if indicator.inverted {
            (
                value <= indicator.danger_threshold,
                value <= indicator.warning_threshold,
            )
        } else {
            (
                value >= indicator.danger_threshold,
                value >= indicator.warning_threshold,
            )
        };

        if danger {
            Self::Danger
        } else if warning {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Business-cycle risk phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Early,
    Mid,
    Late,
    Crisis,
}

impl CyclePhase {
    /// Band lookup for a risk score.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= CRISIS_FLOOR {
            Self::Crisis
        } else if score >= LATE_CYCLE_FLOOR {
            Self::Late
        } else if score >= MID_CYCLE_FLOOR {
            Self::Mid
        } else {
            Self::Early
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Early => "Early Cycle",
            Self::Mid => "Mid Cycle",
            Self::Late => "Late Cycle",
            Self::Crisis => "Crisis Risk",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// ASSESSMENT
// =============================================================================

/// Aggregate result over the whole basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleAssessment {
    pub risk_score: u8,
    pub phase: CyclePhase,
    pub danger_count: usize,
    pub warning_count: usize,
    pub normal_count: usize,
}

/// Assess a basket of indicators. An empty basket scores 0 (early cycle).
#[must_use]
pub fn assess(indicators: &[CycleIndicator]) -> CycleAssessment {
    let mut danger_count = 0usize;
    let mut warning_count = 0usize;
    let mut normal_count = 0usize;

    for indicator in indicators {
        match IndicatorStatus::of(indicator) {
            IndicatorStatus::Danger => danger_count += 1,
            IndicatorStatus::Warning => warning_count += 1,
            IndicatorStatus::Normal => normal_count += 1,
        }
    }

    let risk_score = risk_score(danger_count, warning_count, indicators.len());

    CycleAssessment {
        risk_score,
        phase: CyclePhase::from_score(risk_score),
        danger_count,
        warning_count,
        normal_count,
    }
}

/// `round(100 × (2d + w) / 2n)` in integer arithmetic, halves rounded up.
fn risk_score(danger: usize, warning: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let numerator = 100 * (2 * danger as u64 + warning as u64);
    let denominator = 2 * total as u64;
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    rounded.min(100) as u8
}

// =============================================================================
// PER-INDICATOR READINGS
// =============================================================================

/// One row of the indicator table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorReading {
    pub name: String,
    pub unit: String,
    pub current_value: f64,
    pub status: IndicatorStatus,
    /// `current_value - historical_average`.
    pub deviation_from_average: f64,
}

/// Status and deviation of every indicator, in basket order.
#[must_use]
pub fn indicator_readings(indicators: &[CycleIndicator]) -> Vec<IndicatorReading> {
    indicators
        .iter()
        .map(|indicator| IndicatorReading {
            name: indicator.name.clone(),
            unit: indicator.unit.clone(),
            current_value: indicator.current_value,
            status: IndicatorStatus::of(indicator),
            deviation_from_average: indicator.current_value - indicator.historical_average,
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
