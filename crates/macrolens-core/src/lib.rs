//! # Macrolens Core
//!
//! The deterministic engine behind Macrolens.
//!
//! Given already-loaded catalogs, it answers four questions:
//!
//! 1. How closely does today's macro snapshot resemble the run-up to each
//!    historical crisis? ([`score_similarity`])
//! 2. Which academic generation model does a crisis belong to?
//!    ([`classify_generation`])
//! 3. Where in the business cycle are we, judged by a basket of indicators?
//!    ([`assess_cycle_phase`])
//! 4. Do push or pull factors dominate capital flows right now?
//!    ([`assess_capital_flow_balance`])
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                    Indicator Repository                       │
//! │  RawCatalog ──validate──► Catalog (arena + index, immutable)  │
//! └───────────────┬───────────────┬──────────────┬────────────────┘
//!                 │               │              │
//!       ┌─────────▼──┐   ┌────────▼───┐   ┌──────▼─────┐   ┌────────────┐
//!       │ similarity │   │ generation │   │   cycle    │   │capital_flow│
//!       └────────────┘   └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! Every assessor is a pure function. No I/O, no interior mutability, no
//! global state. The "current conditions" snapshot is always an explicit
//! parameter so callers can compare several what-if snapshots side by side.

pub mod builtin;
pub mod capital_flow;
pub mod catalog;
pub mod config;
pub mod cycle;
pub mod debt_cycle;
pub mod error;
pub mod formats;
pub mod generation;
pub mod similarity;
pub mod store;
pub mod types;
pub mod validation;

pub use capital_flow::{
    FlowBalance, NetFlow, WeightedFlowBalance, assess as assess_capital_flow_balance,
    assess_weighted as assess_capital_flow_weighted,
};
pub use catalog::{Catalog, Diagnostic, RawCatalog};
pub use config::{EngineConfig, GenerationThresholds, LevelWeights, SimilarityWeights};
pub use cycle::{CycleAssessment, CyclePhase, IndicatorReading, IndicatorStatus, assess as assess_cycle_phase};
pub use debt_cycle::phase_for_year;
pub use error::{CatalogError, Result};
pub use generation::{GenerationBreakdown, classify as classify_generation};
pub use similarity::{HistoricalComparison, SimilarityReport, SimilarityScore, score_similarity};
pub use store::CatalogStore;
pub use types::{
    ConditionsRecord, CrisisConditions, CrisisEvent, CrisisGeneration, CrisisId, CrisisOutcome,
    CrisisType, CurrentConditions, CycleIndicator, CycleType, DebtCyclePhase, DebtPhaseTag,
    FactorKind, FlowDirection, Level, MacroSnapshot, PushPullFactor,
};
