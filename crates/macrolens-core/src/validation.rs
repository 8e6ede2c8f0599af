//! # Catalog Validation
//!
//! Load-time checks that keep the assessors total.
//!
//! Anything rejected here would otherwise surface as a silent misclassification
//! at evaluation time, so all checks run before a [`Catalog`](crate::Catalog)
//! exists.

use crate::error::{CatalogError, Result};
use crate::types::{CrisisEvent, CycleIndicator, MacroSnapshot};

/// Lowest permitted severity.
pub const MIN_SEVERITY: u8 = 1;
/// Highest permitted severity.
pub const MAX_SEVERITY: u8 = 5;

/// Check a crisis event in isolation.
pub fn validate_crisis(crisis: &CrisisEvent) -> Result<()> {
    if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&crisis.severity) {
        return Err(CatalogError::SeverityOutOfRange {
            id: crisis.id.clone(),
            severity: crisis.severity,
        });
    }
    Ok(())
}

/// Check that every numeric field of a snapshot is finite.
pub fn validate_snapshot(context: &str, snapshot: &MacroSnapshot) -> Result<()> {
    let fields = [
        ("debtToGdp", snapshot.debt_to_gdp),
        ("privateDebt", snapshot.private_debt),
        ("interestRates", snapshot.interest_rates),
        ("inflation", snapshot.inflation),
        ("unemployment", snapshot.unemployment),
        ("yieldCurve", snapshot.yield_curve),
        ("stockValuation", snapshot.stock_valuation),
        ("currentAccountGdp", snapshot.current_account_gdp),
        ("foreignCurrencyDebt", snapshot.foreign_currency_debt),
        ("shortTermDebtReserves", snapshot.short_term_debt_reserves),
        ("realExchangeRateDeviation", snapshot.real_exchange_rate_deviation),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CatalogError::NonFiniteValue {
                context: context.to_string(),
                field,
            });
        }
    }
    Ok(())
}

/// Check that an indicator's thresholds are ordered in its danger direction.
///
/// Non-inverted: `average <= warning < danger`.
/// Inverted: `average >= warning > danger`.
pub fn validate_indicator(indicator: &CycleIndicator) -> Result<()> {
    let fields = [
        ("currentValue", indicator.current_value),
        ("warningThreshold", indicator.warning_threshold),
        ("dangerThreshold", indicator.danger_threshold),
        ("historicalAverage", indicator.historical_average),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CatalogError::NonFiniteValue {
                context: format!("indicator '{}'", indicator.name),
                field,
            });
        }
    }

    let average = indicator.historical_average;
    let warning = indicator.warning_threshold;
    let danger = indicator.danger_threshold;

    let monotonic = if indicator.inverted {
        average >= warning && warning > danger
    } else {
        average <= warning && warning < danger
    };

    if monotonic {
        Ok(())
    } else {
        Err(CatalogError::NonMonotonicThresholds {
            indicator: indicator.name.clone(),
            average,
            warning,
            danger,
            inverted: indicator.inverted,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(average: f64, warning: f64, danger: f64, inverted: bool) -> CycleIndicator {
        CycleIndicator {
            name: "test".into(),
            unit: "%".into(),
            current_value: 0.0,
            warning_threshold: warning,
            danger_threshold: danger,
            historical_average: average,
            inverted,
        }
    }

    #[test]
    fn rising_thresholds_accepted() {
        assert!(validate_indicator(&indicator(17.0, 25.0, 30.0, false)).is_ok());
    }

    #[test]
    fn falling_thresholds_accepted_when_inverted() {
        assert!(validate_indicator(&indicator(1.5, 0.25, 0.0, true)).is_ok());
    }

    #[test]
    fn inverted_direction_mismatch_rejected() {
        let result = validate_indicator(&indicator(1.5, 0.25, 0.0, false));
        assert!(matches!(
            result,
            Err(CatalogError::NonMonotonicThresholds { .. })
        ));
    }

    #[test]
    fn equal_warning_and_danger_rejected() {
        assert!(validate_indicator(&indicator(1.0, 2.0, 2.0, false)).is_err());
    }

    #[test]
    fn average_above_warning_rejected() {
        assert!(validate_indicator(&indicator(500.0, 450.0, 600.0, false)).is_err());
    }

    #[test]
    fn nan_threshold_rejected() {
        let result = validate_indicator(&indicator(1.0, f64::NAN, 3.0, false));
        assert!(matches!(result, Err(CatalogError::NonFiniteValue { .. })));
    }
}
