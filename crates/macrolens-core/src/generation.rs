//! # Generation Classifier
//!
//! Tags each crisis with an academic generation model.
//!
//! Precedence:
//!
//! 1. An explicit `crisis_generation` on the event always wins.
//! 2. **3rd** (balance-sheet): heavy foreign-currency debt, or a currency
//!    mismatch marker among the characteristics.
//! 3. **2nd** (self-fulfilling): a currency or sovereign-debt crisis with
//!    moderate fundamentals but high capital flow risk.
//! 4. **1st** (fundamentals-based): everything else.
//!
//! Total: every input yields exactly one tag.

use crate::catalog::Catalog;
use crate::config::GenerationThresholds;
use crate::types::{CrisisConditions, CrisisEvent, CrisisGeneration, CrisisId, Level};
use serde::{Deserialize, Serialize};

/// Classify with the canonical thresholds.
#[must_use]
pub fn classify(crisis: &CrisisEvent, conditions: Option<&CrisisConditions>) -> CrisisGeneration {
    classify_with(crisis, conditions, &GenerationThresholds::default())
}

/// Classify with explicit thresholds.
#[must_use]
pub fn classify_with(
    crisis: &CrisisEvent,
    conditions: Option<&CrisisConditions>,
    thresholds: &GenerationThresholds,
) -> CrisisGeneration {
    if let Some(explicit) = crisis.crisis_generation {
        return explicit;
    }

    let Some(conditions) = conditions else {
        return CrisisGeneration::First;
    };

    if is_balance_sheet(conditions, thresholds) {
        return CrisisGeneration::Third;
    }

    if crisis.crisis_type.is_external()
        && conditions.capital_flow_risk == Level::High
        && has_moderate_fundamentals(conditions, thresholds)
    {
        return CrisisGeneration::Second;
    }

    CrisisGeneration::First
}

fn is_balance_sheet(conditions: &CrisisConditions, thresholds: &GenerationThresholds) -> bool {
    conditions.foreign_currency_debt >= thresholds.fx_exposure
        || has_mismatch_marker(&conditions.characteristics, &thresholds.mismatch_markers)
}

fn has_mismatch_marker(characteristics: &[String], markers: &[String]) -> bool {
    characteristics.iter().any(|text| {
        let text = text.to_lowercase();
        markers
            .iter()
            .any(|marker| text.contains(&marker.to_lowercase()))
    })
}

fn has_moderate_fundamentals(
    conditions: &CrisisConditions,
    thresholds: &GenerationThresholds,
) -> bool {
    conditions.debt_to_gdp < thresholds.moderate_debt_max
        && conditions.inflation < thresholds.moderate_inflation_max
        && conditions.current_account_gdp > thresholds.moderate_current_account_min
}

// =============================================================================
// CATALOG-LEVEL HELPERS
// =============================================================================

/// Classify a catalog crisis by arena slot. `None` for an unknown slot.
#[must_use]
pub fn classify_in_catalog(
    catalog: &Catalog,
    id: CrisisId,
    thresholds: &GenerationThresholds,
) -> Option<CrisisGeneration> {
    let crisis = catalog.crisis(id)?;
    Some(classify_with(crisis, catalog.conditions_for(id), thresholds))
}

/// Generation tag of one crisis, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedCrisis {
    pub crisis_id: String,
    pub crisis_name: String,
    pub year: i32,
    pub generation: CrisisGeneration,
    /// Whether the tag came from an explicit override.
    pub explicit: bool,
}

/// Per-crisis tags in catalog order, plus counts per generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationBreakdown {
    pub crises: Vec<ClassifiedCrisis>,
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

impl GenerationBreakdown {
    #[must_use]
    pub fn count(&self, generation: CrisisGeneration) -> usize {
        match generation {
            CrisisGeneration::First => self.first,
            CrisisGeneration::Second => self.second,
            CrisisGeneration::Third => self.third,
        }
    }
}

/// Classify every crisis in the catalog.
#[must_use]
pub fn classify_all(catalog: &Catalog, thresholds: &GenerationThresholds) -> GenerationBreakdown {
    let mut breakdown = GenerationBreakdown::default();

    for (id, crisis) in catalog.crises() {
        let generation = classify_with(crisis, catalog.conditions_for(id), thresholds);
        match generation {
            CrisisGeneration::First => breakdown.first += 1,
            CrisisGeneration::Second => breakdown.second += 1,
            CrisisGeneration::Third => breakdown.third += 1,
        }
        breakdown.crises.push(ClassifiedCrisis {
            crisis_id: crisis.id.clone(),
            crisis_name: crisis.name.clone(),
            year: crisis.year,
            generation,
            explicit: crisis.crisis_generation.is_some(),
        });
    }

    breakdown
}

// =============================================================================
// TESTS
// =============================================================================
