//! # Debt Cycle Timeline
//!
//! Year lookups over the long- and short-term debt-cycle catalog.

use crate::types::{CycleType, DebtCyclePhase};

/// First phase, in catalog order, of the given cycle type that contains `year`.
#[must_use]
pub fn phase_for_year(
    phases: &[DebtCyclePhase],
    year: i32,
    cycle_type: CycleType,
) -> Option<&DebtCyclePhase> {
    phases
        .iter()
        .find(|phase| phase.cycle_type == cycle_type && phase.contains_year(year))
}

/// Phases of one cycle type, sorted by start year. Equal starts keep catalog order.
#[must_use]
pub fn timeline(phases: &[DebtCyclePhase], cycle_type: CycleType) -> Vec<&DebtCyclePhase> {
    let mut selected: Vec<_> = phases
        .iter()
        .filter(|phase| phase.cycle_type == cycle_type)
        .collect();
    selected.sort_by_key(|phase| phase.start_year);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::types::DebtPhaseTag;

    #[test]
    fn finds_long_term_phase() {
        let phases = builtin::debt_cycle_phases();
        let phase = phase_for_year(&phases, 1931, CycleType::LongTerm);
        assert_eq!(phase.map(|p| p.phase), Some(DebtPhaseTag::Depression));
    }

    #[test]
    fn cycle_type_filters() {
        let phases = builtin::debt_cycle_phases();
        let short = phase_for_year(&phases, 2020, CycleType::ShortTerm);
        assert_eq!(short.map(|p| p.phase), Some(DebtPhaseTag::Recession));
    }

    #[test]
    fn year_outside_catalog_is_none() {
        let phases = builtin::debt_cycle_phases();
        assert!(phase_for_year(&phases, 1800, CycleType::LongTerm).is_none());
    }

    #[test]
    fn timeline_is_chronological() {
        let phases = builtin::debt_cycle_phases();
        let years: Vec<_> = timeline(&phases, CycleType::LongTerm)
            .iter()
            .map(|p| p.start_year)
            .collect();
        let mut sorted = years.clone();
        sorted.sort_unstable();
        assert_eq!(years, sorted);
        assert!(!years.is_empty());
    }
}
