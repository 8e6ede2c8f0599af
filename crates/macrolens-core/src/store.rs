//! # Catalog Store
//!
//! Atomic hot-swap of the loaded catalog.
//!
//! Readers take an `Arc<Catalog>` snapshot and compute against it. A refresh
//! publishes a whole new catalog with a single pointer store, so an
//! in-flight computation never observes a half-updated catalog.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::CurrentConditions;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Shared, swappable holder of the active catalog.
#[derive(Debug)]
pub struct CatalogStore {
    active: ArcSwap<Catalog>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            active: ArcSwap::from_pointee(catalog),
        }
    }

    /// Consistent view of the active catalog.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.active.load_full()
    }

    /// Publish a new catalog. Returns the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        tracing::debug!(crises = catalog.crisis_count(), "replacing catalog");
        self.active.swap(Arc::new(catalog))
    }

    /// Publish a copy of the active catalog with a new current snapshot.
    ///
    /// Concurrent refreshes are serialized by `rcu`, so the last writer wins
    /// without losing reference data.
    pub fn replace_current(&self, current: CurrentConditions) -> Result<()> {
        crate::validation::validate_snapshot("current conditions", &current)?;
        self.active.rcu(|active| {
            let mut next = Catalog::clone(active);
            next.set_current(current.clone());
            next
        });
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::catalog::RawCatalog;
    use std::thread;

    #[test]
    fn snapshot_survives_replace() {
        let store = CatalogStore::new(builtin::catalog().unwrap());
        let before = store.snapshot();
        let count = before.crisis_count();

        let mut raw: RawCatalog = builtin::raw_catalog();
        raw.crises.truncate(2);
        raw.conditions.retain(|c| raw.crises.iter().any(|e| e.id == c.crisis_id));
        store.replace(Catalog::load(raw).unwrap());

        assert_eq!(before.crisis_count(), count);
        assert_eq!(store.snapshot().crisis_count(), 2);
    }

    #[test]
    fn replace_current_keeps_reference_data() {
        let store = CatalogStore::new(builtin::catalog().unwrap());
        let mut next = store.snapshot().current().clone();
        next.inflation = 7.5;

        store.replace_current(next).unwrap();

        let active = store.snapshot();
        assert_eq!(active.current().inflation, 7.5);
        assert_eq!(active.crisis_count(), builtin::crises().len());
    }

    #[test]
    fn replace_current_rejects_nan() {
        let store = CatalogStore::new(builtin::catalog().unwrap());
        let mut next = store.snapshot().current().clone();
        next.debt_to_gdp = f64::NAN;
        assert!(store.replace_current(next).is_err());
    }

    #[test]
    fn readers_see_whole_catalogs() {
        let store = Arc::new(CatalogStore::new(builtin::catalog().unwrap()));
        let full = builtin::crises().len();

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..50 {
                    let mut raw = builtin::raw_catalog();
                    if round % 2 == 0 {
                        raw.crises.truncate(3);
                        raw.conditions
                            .retain(|c| raw.crises.iter().any(|e| e.id == c.crisis_id));
                    }
                    store.replace(Catalog::load(raw).unwrap());
                }
            })
        };

        for _ in 0..200 {
            let view = store.snapshot();
            // Either the full catalog or the truncated one, never a mix.
            assert!(view.crisis_count() == full || view.crisis_count() == 3);
            assert_eq!(view.crisis_count(), view.conditions_count());
        }

        writer.join().unwrap();
    }
}
