//! # Indicator Repository
//!
//! The validated, immutable set of reference catalogs.
//!
//! Crisis events live in an arena addressed by [`CrisisId`]. A `BTreeMap`
//! resolves string keys to arena slots. Pre-crisis conditions are joined to
//! their crisis once, here, so no assessor ever sees a dangling key.
//!
//! Orphan conditions (a key with no crisis) are skipped and reported as
//! [`Diagnostic`]s instead of failing the load.

use crate::error::{CatalogError, Result};
use crate::types::{
    ConditionsRecord, CrisisConditions, CrisisEvent, CrisisId, CurrentConditions, CycleIndicator,
    DebtCyclePhase, PushPullFactor,
};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// RAW CATALOG
// =============================================================================

/// Unvalidated catalog as it arrives from the data-loading layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalog {
    #[serde(default)]
    pub crises: Vec<CrisisEvent>,
    #[serde(default)]
    pub conditions: Vec<ConditionsRecord>,
    pub current: CurrentConditions,
    #[serde(default)]
    pub cycle_indicators: Vec<CycleIndicator>,
    #[serde(default)]
    pub push_pull_factors: Vec<PushPullFactor>,
    #[serde(default)]
    pub debt_cycle_phases: Vec<DebtCyclePhase>,
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Non-fatal data-integrity finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A conditions record names a crisis that does not exist.
    OrphanConditions { crisis_id: String, position: usize },
    /// A second conditions record for a crisis that already has one.
    DuplicateConditions { crisis_id: String, position: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanConditions {
                crisis_id,
                position,
            } => write!(
                f,
                "conditions #{position} reference unknown crisis '{crisis_id}', skipped"
            ),
            Self::DuplicateConditions {
                crisis_id,
                position,
            } => write!(
                f,
                "conditions #{position} duplicate an earlier record for '{crisis_id}', skipped"
            ),
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// A loaded, validated catalog.
///
/// Immutable after [`Catalog::load`]. Share it behind an `Arc` or a
/// [`CatalogStore`](crate::CatalogStore).
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Crisis arena, in catalog order.
    crises: Vec<CrisisEvent>,

    /// Key lookup: crisis key -> arena slot.
    index: BTreeMap<String, CrisisId>,

    /// Joined pre-crisis snapshots, in catalog order.
    conditions: Vec<(CrisisId, CrisisConditions)>,

    /// Reverse join: arena slot -> position in `conditions`.
    conditions_by_crisis: BTreeMap<CrisisId, usize>,

    current: CurrentConditions,
    cycle_indicators: Vec<CycleIndicator>,
    push_pull_factors: Vec<PushPullFactor>,
    debt_cycle_phases: Vec<DebtCyclePhase>,

    /// Findings collected while joining.
    diagnostics: Vec<Diagnostic>,
}

impl Catalog {
    /// Validate a raw catalog and build the arena and join indexes.
    ///
    /// Fails on duplicate crisis keys, out-of-range severities, non-finite
    /// values and non-monotonic indicator thresholds. Orphan or duplicate
    /// conditions records are skipped and recorded in [`Catalog::diagnostics`].
    pub fn load(raw: RawCatalog) -> Result<Self> {
        let RawCatalog {
            crises,
            conditions: records,
            current,
            cycle_indicators,
            push_pull_factors,
            debt_cycle_phases,
        } = raw;

        let mut index = BTreeMap::new();
        for (slot, crisis) in crises.iter().enumerate() {
            validation::validate_crisis(crisis)?;
            let id = CrisisId(slot as u32);
            if index.insert(crisis.id.clone(), id).is_some() {
                return Err(CatalogError::DuplicateCrisisId(crisis.id.clone()));
            }
        }

        validation::validate_snapshot("current conditions", &current)?;
        for indicator in &cycle_indicators {
            validation::validate_indicator(indicator)?;
        }

        let mut diagnostics = Vec::new();
        let mut conditions = Vec::with_capacity(records.len());
        let mut conditions_by_crisis = BTreeMap::new();

        for (position, record) in records.into_iter().enumerate() {
            let Some(&crisis_id) = index.get(&record.crisis_id) else {
                tracing::warn!(
                    crisis_id = %record.crisis_id,
                    position,
                    "conditions reference unknown crisis, skipping"
                );
                diagnostics.push(Diagnostic::OrphanConditions {
                    crisis_id: record.crisis_id,
                    position,
                });
                continue;
            };

            if conditions_by_crisis.contains_key(&crisis_id) {
                tracing::warn!(
                    crisis_id = %record.crisis_id,
                    position,
                    "duplicate conditions for crisis, skipping"
                );
                diagnostics.push(Diagnostic::DuplicateConditions {
                    crisis_id: record.crisis_id,
                    position,
                });
                continue;
            }

            validation::validate_snapshot(
                &format!("conditions for '{}'", record.crisis_id),
                &record.snapshot,
            )?;
            conditions_by_crisis.insert(crisis_id, conditions.len());
            conditions.push((crisis_id, record.snapshot));
        }

        tracing::debug!(
            crises = crises.len(),
            conditions = conditions.len(),
            indicators = cycle_indicators.len(),
            factors = push_pull_factors.len(),
            phases = debt_cycle_phases.len(),
            skipped = diagnostics.len(),
            "catalog loaded"
        );

        Ok(Self {
            crises,
            index,
            conditions,
            conditions_by_crisis,
            current,
            cycle_indicators,
            push_pull_factors,
            debt_cycle_phases,
            diagnostics,
        })
    }

    /// Replace the current-conditions snapshot wholesale.
    ///
    /// Returns a new catalog; the reference data is untouched.
    pub fn with_current(mut self, current: CurrentConditions) -> Result<Self> {
        validation::validate_snapshot("current conditions", &current)?;
        self.current = current;
        Ok(self)
    }

    /// Swap the current snapshot in place. Callers validate first.
    pub(crate) fn set_current(&mut self, current: CurrentConditions) {
        self.current = current;
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Crisis at an arena slot.
    #[must_use]
    pub fn crisis(&self, id: CrisisId) -> Option<&CrisisEvent> {
        self.crises.get(id.index())
    }

    /// Resolve a crisis key to its arena slot.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<CrisisId> {
        self.index.get(key).copied()
    }

    /// Crisis by string key.
    #[must_use]
    pub fn crisis_by_key(&self, key: &str) -> Option<&CrisisEvent> {
        self.id_of(key).and_then(|id| self.crisis(id))
    }

    /// Pre-crisis snapshot of a crisis, if the catalog has one.
    #[must_use]
    pub fn conditions_for(&self, id: CrisisId) -> Option<&CrisisConditions> {
        let position = *self.conditions_by_crisis.get(&id)?;
        self.conditions.get(position).map(|(_, snapshot)| snapshot)
    }

    /// All crises in catalog order, with their arena slots.
    pub fn crises(&self) -> impl Iterator<Item = (CrisisId, &CrisisEvent)> {
        self.crises
            .iter()
            .enumerate()
            .map(|(slot, crisis)| (CrisisId(slot as u32), crisis))
    }

    /// Every joined (crisis, conditions) pair in conditions-catalog order.
    pub fn joined_conditions(
        &self,
    ) -> impl Iterator<Item = (CrisisId, &CrisisEvent, &CrisisConditions)> {
        self.conditions.iter().filter_map(|(id, snapshot)| {
            self.crises
                .get(id.index())
                .map(|crisis| (*id, crisis, snapshot))
        })
    }

    #[must_use]
    pub fn current(&self) -> &CurrentConditions {
        &self.current
    }

    #[must_use]
    pub fn cycle_indicators(&self) -> &[CycleIndicator] {
        &self.cycle_indicators
    }

    #[must_use]
    pub fn push_pull_factors(&self) -> &[PushPullFactor] {
        &self.push_pull_factors
    }

    #[must_use]
    pub fn debt_cycle_phases(&self) -> &[DebtCyclePhase] {
        &self.debt_cycle_phases
    }

    /// Data-integrity findings from the load.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn crisis_count(&self) -> usize {
        self.crises.len()
    }

    #[must_use]
    pub fn conditions_count(&self) -> usize {
        self.conditions.len()
    }
}

// =============================================================================
// SERIALIZATION SUPPORT
// =============================================================================

impl From<&Catalog> for RawCatalog {
    fn from(catalog: &Catalog) -> Self {
        Self {
            crises: catalog.crises.clone(),
            conditions: catalog
                .joined_conditions()
                .map(|(_, crisis, snapshot)| ConditionsRecord {
                    crisis_id: crisis.id.clone(),
                    snapshot: snapshot.clone(),
                })
                .collect(),
            current: catalog.current.clone(),
            cycle_indicators: catalog.cycle_indicators.clone(),
            push_pull_factors: catalog.push_pull_factors.clone(),
            debt_cycle_phases: catalog.debt_cycle_phases.clone(),
        }
    }
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        Self::load(raw)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::types::{CrisisOutcome, CrisisType};

    fn crisis(id: &str, severity: u8) -> CrisisEvent {
        CrisisEvent {
            id: id.to_string(),
            name: id.to_uppercase(),
            year: 2000,
            end_year: None,
            country: "Testland".into(),
            country_code: "TL".into(),
            crisis_type: CrisisType::Banking,
            severity,
            description: String::new(),
            causes: Vec::new(),
            consequences: Vec::new(),
            outcome: CrisisOutcome::default(),
            crisis_generation: None,
        }
    }

    fn raw_with(crises: Vec<CrisisEvent>, keys: &[&str]) -> RawCatalog {
        let current = builtin::current_conditions();
        RawCatalog {
            crises,
            conditions: keys
                .iter()
                .map(|key| ConditionsRecord {
                    crisis_id: (*key).to_string(),
                    snapshot: current.clone(),
                })
                .collect(),
            current,
            cycle_indicators: Vec::new(),
            push_pull_factors: Vec::new(),
            debt_cycle_phases: Vec::new(),
        }
    }

    #[test]
    fn load_joins_conditions() {
        let raw = raw_with(vec![crisis("a", 3), crisis("b", 4)], &["b", "a"]);
        let catalog = Catalog::load(raw).unwrap();

        assert_eq!(catalog.crisis_count(), 2);
        assert_eq!(catalog.conditions_count(), 2);
        assert!(catalog.diagnostics().is_empty());

        let order: Vec<_> = catalog
            .joined_conditions()
            .map(|(_, c, _)| c.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "a"]);

        let a = catalog.id_of("a").unwrap();
        assert!(catalog.conditions_for(a).is_some());
    }

    #[test]
    fn orphan_conditions_skipped_with_diagnostic() {
        let raw = raw_with(vec![crisis("a", 3)], &["a", "ghost"]);
        let catalog = Catalog::load(raw).unwrap();

        assert_eq!(catalog.conditions_count(), 1);
        assert_eq!(
            catalog.diagnostics(),
            &[Diagnostic::OrphanConditions {
                crisis_id: "ghost".into(),
                position: 1
            }]
        );
    }

    #[test]
    fn duplicate_conditions_keep_first() {
        let raw = raw_with(vec![crisis("a", 3)], &["a", "a"]);
        let catalog = Catalog::load(raw).unwrap();

        assert_eq!(catalog.conditions_count(), 1);
        assert!(matches!(
            catalog.diagnostics()[0],
            Diagnostic::DuplicateConditions { position: 1, .. }
        ));
    }

    #[test]
    fn duplicate_crisis_id_rejected() {
        let raw = raw_with(vec![crisis("a", 3), crisis("a", 2)], &[]);
        assert!(matches!(
            Catalog::load(raw),
            Err(CatalogError::DuplicateCrisisId(id)) if id == "a"
        ));
    }

    #[test]
    fn severity_out_of_range_rejected() {
        let raw = raw_with(vec![crisis("a", 0)], &[]);
        assert!(matches!(
            Catalog::load(raw),
            Err(CatalogError::SeverityOutOfRange { severity: 0, .. })
        ));

        let raw = raw_with(vec![crisis("b", 6)], &[]);
        assert!(Catalog::load(raw).is_err());
    }

    #[test]
    fn with_current_replaces_snapshot() {
        let catalog = Catalog::load(raw_with(vec![crisis("a", 3)], &["a"])).unwrap();
        let mut next = catalog.current().clone();
        next.inflation = 9.9;

        let replaced = catalog.with_current(next).unwrap();
        assert_eq!(replaced.current().inflation, 9.9);
        assert_eq!(replaced.conditions_count(), 1);
    }

    #[test]
    fn raw_roundtrip_drops_orphans() {
        let raw = raw_with(vec![crisis("a", 3)], &["a", "ghost"]);
        let catalog = Catalog::load(raw).unwrap();

        let exported = RawCatalog::from(&catalog);
        assert_eq!(exported.conditions.len(), 1);

        let reloaded = Catalog::try_from(exported).unwrap();
        assert!(reloaded.diagnostics().is_empty());
        assert_eq!(reloaded.crisis_count(), 1);
    }
}
