//! # Engine Configuration
//!
//! Named weights, tolerances and thresholds for the assessors.
//!
//! Every value has a canonical default. A config file only needs to name the
//! values it overrides (`#[serde(default)]` on every struct).
//!
//! The two subtractive penalties (`original_sin_penalty`, `safe_haven_penalty`)
//! are heuristics. They have no documented empirical calibration.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// SIMILARITY WEIGHTS
// =============================================================================

/// Public debt factor weight.
pub const DEFAULT_PUBLIC_DEBT_WEIGHT: f64 = 20.0;
/// Private debt factor weight.
pub const DEFAULT_PRIVATE_DEBT_WEIGHT: f64 = 20.0;
/// Interest rate factor weight.
pub const DEFAULT_INTEREST_RATE_WEIGHT: f64 = 15.0;
/// Unemployment factor weight.
pub const DEFAULT_UNEMPLOYMENT_WEIGHT: f64 = 10.0;
/// Equity valuation factor weight.
pub const DEFAULT_STOCK_VALUATION_WEIGHT: f64 = 20.0;
/// Yield curve factor weight.
pub const DEFAULT_YIELD_CURVE_WEIGHT: f64 = 15.0;
/// Current account factor weight.
pub const DEFAULT_CURRENT_ACCOUNT_WEIGHT: f64 = 10.0;
/// Foreign-currency debt factor weight.
pub const DEFAULT_FX_DEBT_WEIGHT: f64 = 10.0;
/// Capital flow risk factor weight.
pub const DEFAULT_CAPITAL_FLOW_WEIGHT: f64 = 10.0;

/// Subtracted when the crisis had heavy FX debt but today has almost none.
pub const DEFAULT_ORIGINAL_SIN_PENALTY: f64 = 10.0;
/// Subtracted when the crisis had high capital flow risk but today's is low.
pub const DEFAULT_SAFE_HAVEN_PENALTY: f64 = 5.0;

/// Weights and tolerances of the similarity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarityWeights {
    pub public_debt: f64,
    pub private_debt: f64,
    pub interest_rate: f64,
    pub unemployment: f64,
    pub stock_valuation: f64,
    pub yield_curve: f64,
    pub current_account: f64,
    pub fx_debt: f64,
    pub capital_flow: f64,

    /// Public debt matches when |diff| < this (points of GDP).
    pub public_debt_tolerance: f64,
    /// Private debt matches when |diff| < this (points of GDP).
    pub private_debt_tolerance: f64,
    /// Private debt credit is `weight - |diff| / divisor`.
    pub private_debt_divisor: f64,
    pub interest_rate_tolerance: f64,
    pub unemployment_tolerance: f64,
    pub stock_valuation_tolerance: f64,
    pub yield_curve_tolerance: f64,
    pub current_account_tolerance: f64,
    pub fx_debt_tolerance: f64,

    /// A historical current account below this (% of GDP) is flagged when it
    /// does not match.
    pub current_account_stress: f64,
    /// Historical FX debt share above which "original sin" applies.
    pub original_sin_historical_min: f64,
    /// Current FX debt share below which "original sin" is absent today.
    pub original_sin_current_max: f64,

    pub original_sin_penalty: f64,
    pub safe_haven_penalty: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            public_debt: DEFAULT_PUBLIC_DEBT_WEIGHT,
            private_debt: DEFAULT_PRIVATE_DEBT_WEIGHT,
            interest_rate: DEFAULT_INTEREST_RATE_WEIGHT,
            unemployment: DEFAULT_UNEMPLOYMENT_WEIGHT,
            stock_valuation: DEFAULT_STOCK_VALUATION_WEIGHT,
            yield_curve: DEFAULT_YIELD_CURVE_WEIGHT,
            current_account: DEFAULT_CURRENT_ACCOUNT_WEIGHT,
            fx_debt: DEFAULT_FX_DEBT_WEIGHT,
            capital_flow: DEFAULT_CAPITAL_FLOW_WEIGHT,

            public_debt_tolerance: 20.0,
            private_debt_tolerance: 30.0,
            private_debt_divisor: 1.5,
            interest_rate_tolerance: 2.0,
            unemployment_tolerance: 2.0,
            stock_valuation_tolerance: 10.0,
            yield_curve_tolerance: 1.0,
            current_account_tolerance: 3.0,
            fx_debt_tolerance: 20.0,

            current_account_stress: -5.0,
            original_sin_historical_min: 50.0,
            original_sin_current_max: 10.0,

            original_sin_penalty: DEFAULT_ORIGINAL_SIN_PENALTY,
            safe_haven_penalty: DEFAULT_SAFE_HAVEN_PENALTY,
        }
    }
}

impl SimilarityWeights {
    /// Denominator of the score ratio: every factor weight, matched or not.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.public_debt
            + self.private_debt
            + self.interest_rate
            + self.unemployment
            + self.stock_valuation
            + self.yield_curve
            + self.current_account
            + self.fx_debt
            + self.capital_flow
    }

    fn named_values(&self) -> [(&'static str, f64); 22] {
        [
            ("publicDebt", self.public_debt),
            ("privateDebt", self.private_debt),
            ("interestRate", self.interest_rate),
            ("unemployment", self.unemployment),
            ("stockValuation", self.stock_valuation),
            ("yieldCurve", self.yield_curve),
            ("currentAccount", self.current_account),
            ("fxDebt", self.fx_debt),
            ("capitalFlow", self.capital_flow),
            ("publicDebtTolerance", self.public_debt_tolerance),
            ("privateDebtTolerance", self.private_debt_tolerance),
            ("privateDebtDivisor", self.private_debt_divisor),
            ("interestRateTolerance", self.interest_rate_tolerance),
            ("unemploymentTolerance", self.unemployment_tolerance),
            ("stockValuationTolerance", self.stock_valuation_tolerance),
            ("yieldCurveTolerance", self.yield_curve_tolerance),
            ("currentAccountTolerance", self.current_account_tolerance),
            ("fxDebtTolerance", self.fx_debt_tolerance),
            ("originalSinHistoricalMin", self.original_sin_historical_min),
            ("originalSinCurrentMax", self.original_sin_current_max),
            ("originalSinPenalty", self.original_sin_penalty),
            ("safeHavenPenalty", self.safe_haven_penalty),
        ]
    }

    /// Reject weights that would make the score meaningless.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidWeights(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !self.current_account_stress.is_finite() {
            return Err(CatalogError::InvalidWeights(
                "currentAccountStress must be finite".to_string(),
            ));
        }
        if self.private_debt_divisor == 0.0 {
            return Err(CatalogError::InvalidWeights(
                "privateDebtDivisor must be positive".to_string(),
            ));
        }
        if self.total_weight() <= 0.0 {
            return Err(CatalogError::InvalidWeights(
                "factor weights sum to zero".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// GENERATION THRESHOLDS
// =============================================================================

/// Cut-offs used by the generation classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationThresholds {
    /// FX debt share (%) at or above which a crisis is balance-sheet driven.
    pub fx_exposure: f64,
    /// Public debt (% of GDP) below which fundamentals count as moderate.
    pub moderate_debt_max: f64,
    /// Inflation (%) below which fundamentals count as moderate.
    pub moderate_inflation_max: f64,
    /// Current account (% of GDP) above which fundamentals count as moderate.
    pub moderate_current_account_min: f64,
    /// Case-insensitive substrings in `characteristics` that mark a currency
    /// mismatch.
    pub mismatch_markers: Vec<String>,
}

impl Default for GenerationThresholds {
    fn default() -> Self {
        Self {
            fx_exposure: 40.0,
            moderate_debt_max: 60.0,
            moderate_inflation_max: 10.0,
            moderate_current_account_min: -5.0,
            mismatch_markers: [
                "currency mismatch",
                "original sin",
                "foreign currency debt",
                "dollarization",
                "dollar-denominated",
                "balance sheet",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        }
    }
}

// =============================================================================
// LEVEL WEIGHTS
// =============================================================================

/// Intensity weights for the weighted capital flow balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelWeights {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

impl Default for LevelWeights {
    fn default() -> Self {
        Self {
            low: 1,
            medium: 2,
            high: 3,
        }
    }
}

impl LevelWeights {
    #[must_use]
    pub fn weight(&self, level: crate::Level) -> u32 {
        match level {
            crate::Level::Low => self.low,
            crate::Level::Medium => self.medium,
            crate::Level::High => self.high,
        }
    }
}

// =============================================================================
// ENGINE CONFIG
// =============================================================================

/// Everything tunable in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub similarity: SimilarityWeights,
    pub generation: GenerationThresholds,
    pub levels: LevelWeights,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.similarity.validate()?;
        let g = &self.generation;
        for (name, value) in [
            ("fxExposure", g.fx_exposure),
            ("moderateDebtMax", g.moderate_debt_max),
            ("moderateInflationMax", g.moderate_inflation_max),
            ("moderateCurrentAccountMin", g.moderate_current_account_min),
        ] {
            if !value.is_finite() {
                return Err(CatalogError::InvalidWeights(format!(
                    "generation.{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_total_weight_is_130() {
        assert_eq!(SimilarityWeights::default().total_weight(), 130.0);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_penalty_rejected() {
        let weights = SimilarityWeights {
            safe_haven_penalty: -5.0,
            ..SimilarityWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(CatalogError::InvalidWeights(_))
        ));
    }

    #[test]
    fn zero_total_weight_rejected() {
        let weights = SimilarityWeights {
            public_debt: 0.0,
            private_debt: 0.0,
            interest_rate: 0.0,
            unemployment: 0.0,
            stock_valuation: 0.0,
            yield_curve: 0.0,
            current_account: 0.0,
            fx_debt: 0.0,
            capital_flow: 0.0,
            ..SimilarityWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn level_weights_lookup() {
        let levels = LevelWeights::default();
        assert_eq!(levels.weight(crate::Level::Low), 1);
        assert_eq!(levels.weight(crate::Level::High), 3);
    }
}
