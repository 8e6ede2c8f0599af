//! # Capital Flow Balance Assessor
//!
//! Aggregates push (global) and pull (domestic) factors into a net-flow
//! verdict. Pull dominance means inflow, push dominance means outflow, and an
//! exact tie is neutral. Every variant keeps that tie-break.

use crate::config::LevelWeights;
use crate::types::{FactorKind, FlowDirection, PushPullFactor};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Net direction of capital flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetFlow {
    Inflow,
    Outflow,
    Neutral,
}

impl NetFlow {
    /// Verdict from push and pull pressure.
    #[must_use]
    pub fn from_pressure(push: u32, pull: u32) -> Self {
        match pull.cmp(&push) {
            Ordering::Greater => Self::Inflow,
            Ordering::Less => Self::Outflow,
            Ordering::Equal => Self::Neutral,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inflow => "inflow",
            Self::Outflow => "outflow",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for NetFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count-based balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowBalance {
    pub push: u32,
    pub pull: u32,
    pub net: NetFlow,
}

/// Count push and pull factors. Levels are ignored.
#[must_use]
pub fn assess(factors: &[PushPullFactor]) -> FlowBalance {
    let push = factors.iter().filter(|f| f.kind == FactorKind::Push).count() as u32;
    let pull = factors.iter().filter(|f| f.kind == FactorKind::Pull).count() as u32;

    FlowBalance {
        push,
        pull,
        net: NetFlow::from_pressure(push, pull),
    }
}

/// Intensity-weighted balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFlowBalance {
    /// Sum of level weights over push factors.
    pub push_pressure: u32,
    /// Sum of level weights over pull factors.
    pub pull_pressure: u32,
    pub net: NetFlow,
    /// Factors pointing toward inflows.
    pub inflow_factors: u32,
    /// Factors pointing toward outflows.
    pub outflow_factors: u32,
}

/// Weight each factor by its current level before comparing.
#[must_use]
pub fn assess_weighted(factors: &[PushPullFactor], levels: &LevelWeights) -> WeightedFlowBalance {
    let mut push_pressure = 0u32;
    let mut pull_pressure = 0u32;
    let mut inflow_factors = 0u32;
    let mut outflow_factors = 0u32;

    for factor in factors {
        let weight = levels.weight(factor.current_level);
        match factor.kind {
            FactorKind::Push => push_pressure = push_pressure.saturating_add(weight),
            FactorKind::Pull => pull_pressure = pull_pressure.saturating_add(weight),
        }
        match factor.direction {
            FlowDirection::Inflow => inflow_factors += 1,
            FlowDirection::Outflow => outflow_factors += 1,
        }
    }

    WeightedFlowBalance {
        push_pressure,
        pull_pressure,
        net: NetFlow::from_pressure(push_pressure, pull_pressure),
        inflow_factors,
        outflow_factors,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;

    fn factor(kind: FactorKind, level: Level) -> PushPullFactor {
        PushPullFactor {
            id: format!("{kind:?}-{level}"),
            name: "factor".into(),
            kind,
            direction: FlowDirection::Inflow,
            current_level: level,
            description: String::new(),
        }
    }

    #[test]
    fn two_high_push_one_low_pull_is_outflow() {
        let factors = vec![
            factor(FactorKind::Push, Level::High),
            factor(FactorKind::Push, Level::High),
            factor(FactorKind::Pull, Level::Low),
        ];
        assert_eq!(
            assess(&factors),
            FlowBalance {
                push: 2,
                pull: 1,
                net: NetFlow::Outflow
            }
        );
    }

    #[test]
    fn pull_dominance_is_inflow() {
        let factors = vec![
            factor(FactorKind::Pull, Level::Low),
            factor(FactorKind::Pull, Level::Low),
            factor(FactorKind::Push, Level::High),
        ];
        assert_eq!(assess(&factors).net, NetFlow::Inflow);
    }

    #[test]
    fn tie_is_neutral() {
        let factors = vec![
            factor(FactorKind::Push, Level::High),
            factor(FactorKind::Pull, Level::Low),
        ];
        assert_eq!(assess(&factors).net, NetFlow::Neutral);
        assert_eq!(assess(&[]).net, NetFlow::Neutral);
    }

    #[test]
    fn weighted_uses_levels() {
        let factors = vec![
            factor(FactorKind::Push, Level::High),
            factor(FactorKind::Pull, Level::Low),
            factor(FactorKind::Pull, Level::Low),
        ];
        // counts favour pull, weights favour push: 3 vs 2
        assert_eq!(assess(&factors).net, NetFlow::Inflow);
        let weighted = assess_weighted(&factors, &LevelWeights::default());
        assert_eq!(weighted.push_pressure, 3);
        assert_eq!(weighted.pull_pressure, 2);
        assert_eq!(weighted.net, NetFlow::Outflow);
        assert_eq!(weighted.inflow_factors, 3);
    }

    #[test]
    fn weighted_tie_is_neutral() {
        let factors = vec![
            factor(FactorKind::Push, Level::Medium),
            factor(FactorKind::Pull, Level::Low),
            factor(FactorKind::Pull, Level::Low),
        ];
        assert_eq!(
            assess_weighted(&factors, &LevelWeights::default()).net,
            NetFlow::Neutral
        );
    }
}
