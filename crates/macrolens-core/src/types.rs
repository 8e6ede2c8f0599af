//! # Core Types
//!
//! The data model shared by every assessor.
//!
//! Field names serialize in camelCase so catalog files keep the shape of the
//! upstream data sets. Enum variants serialize in snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Arena index of a crisis inside a loaded [`Catalog`](crate::Catalog).
///
/// Only valid for the catalog that issued it. The stable, human-facing key is
/// [`CrisisEvent::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CrisisId(pub u32);

impl CrisisId {
    /// Position in the crisis arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CrisisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crisis#{}", self.0)
    }
}

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Broad crisis category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisType {
    Banking,
    SovereignDebt,
    Currency,
    Inflation,
    StockMarket,
}

impl CrisisType {
    /// Currency and sovereign-debt crises are the ones exposed to
    /// speculative attacks and multiple equilibria.
    #[must_use]
    pub fn is_external(self) -> bool {
        matches!(self, Self::Currency | Self::SovereignDebt)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Banking => "banking",
            Self::SovereignDebt => "sovereign_debt",
            Self::Currency => "currency",
            Self::Inflation => "inflation",
            Self::StockMarket => "stock_market",
        }
    }
}

impl fmt::Display for CrisisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-step ordinal used for capital flow risk and factor intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Academic crisis generation model.
///
/// - 1st: fundamentals-based (Krugman 1979)
/// - 2nd: self-fulfilling, multiple equilibria (Obstfeld 1994)
/// - 3rd: balance-sheet and currency mismatch (Krugman 1999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrisisGeneration {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

impl CrisisGeneration {
    /// All generations in ordinal order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Short tag ("1st", "2nd", "3rd").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "1st",
            Self::Second => "2nd",
            Self::Third => "3rd",
        }
    }

    /// Name of the underlying model.
    #[must_use]
    pub fn model_name(self) -> &'static str {
        match self {
            Self::First => "Fundamentals-based",
            Self::Second => "Self-fulfilling",
            Self::Third => "Balance-sheet",
        }
    }
}

impl fmt::Display for CrisisGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a capital-flow factor originates abroad (push) or at home (pull).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Push,
    Pull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    Inflow,
    Outflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    LongTerm,
    ShortTerm,
}

/// Stage label of a debt-cycle period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtPhaseTag {
    Early,
    Bubble,
    Top,
    Depression,
    Deleveraging,
    Normalization,
    Expansion,
    Recession,
}

// =============================================================================
// MACRO SNAPSHOT
// =============================================================================

/// A fully populated macroeconomic snapshot.
///
/// Used both for the pre-crisis conditions of a historical episode and for
/// the "now" snapshot. All ratios are percentages (of GDP unless noted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSnapshot {
    /// Public debt, % of GDP.
    pub debt_to_gdp: f64,
    /// Private (household + corporate) debt, % of GDP.
    pub private_debt: f64,
    /// Policy or short-term interest rate, %.
    pub interest_rates: f64,
    /// CPI inflation, %.
    pub inflation: f64,
    /// Unemployment rate, %.
    pub unemployment: f64,
    /// Long minus short yield spread, percentage points.
    pub yield_curve: f64,
    /// Equity valuation (CAPE).
    pub stock_valuation: f64,
    /// Current account balance, % of GDP.
    pub current_account_gdp: f64,
    /// Share of debt denominated in foreign currency, %.
    pub foreign_currency_debt: f64,
    /// Short-term external debt over FX reserves, %.
    pub short_term_debt_reserves: f64,
    /// REER deviation from long-run average, %.
    pub real_exchange_rate_deviation: f64,
    pub capital_flow_risk: Level,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// Pre-crisis snapshot attached to a historical crisis.
pub type CrisisConditions = MacroSnapshot;

/// The snapshot representing "now".
pub type CurrentConditions = MacroSnapshot;

// =============================================================================
// CRISIS EVENT
// =============================================================================

/// Optional outcome metrics of a crisis. None of these affect scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrisisOutcome {
    pub gdp_decline: Option<f64>,
    pub recovery_years: Option<f64>,
    pub peak_inflation: Option<f64>,
    pub currency_decline: Option<f64>,
    pub bank_failures: Option<u32>,
    pub debt_to_gdp: Option<f64>,
}

/// A historical financial crisis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisEvent {
    /// Unique catalog key, e.g. `"asian-financial-1997"`.
    pub id: String,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    pub country: String,
    pub country_code: String,
    #[serde(rename = "type")]
    pub crisis_type: CrisisType,
    /// 1 (mild) to 5 (systemic).
    pub severity: u8,
    pub description: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub consequences: Vec<String>,
    #[serde(default)]
    pub outcome: CrisisOutcome,
    /// Explicit generation tag. When present it always wins over the
    /// computed classification.
    #[serde(default)]
    pub crisis_generation: Option<CrisisGeneration>,
}

impl CrisisEvent {
    /// Number of years the crisis lasted, counting the start year.
    #[must_use]
    pub fn duration_years(&self) -> u32 {
        match self.end_year {
            Some(end) if end >= self.year => (end - self.year) as u32 + 1,
            _ => 1,
        }
    }
}

/// Links a pre-crisis snapshot to a crisis by its string key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsRecord {
    pub crisis_id: String,
    pub snapshot: CrisisConditions,
}

// =============================================================================
// CYCLE INDICATORS & CAPITAL FLOWS
// =============================================================================

/// One indicator in the business-cycle basket.
///
/// `inverted` means danger is signalled by a *low* value (for example a
/// flattening yield curve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleIndicator {
    pub name: String,
    pub unit: String,
    pub current_value: f64,
    pub warning_threshold: f64,
    pub danger_threshold: f64,
    pub historical_average: f64,
    #[serde(default)]
    pub inverted: bool,
}

/// A driver of cross-border capital flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPullFactor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FactorKind,
    pub direction: FlowDirection,
    pub current_level: Level,
    pub description: String,
}

/// A dated period of the long- or short-term debt cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtCyclePhase {
    pub id: String,
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub cycle_type: CycleType,
    pub phase: DebtPhaseTag,
    pub interest_rate_trend: String,
    pub debt_trend: String,
    pub asset_prices: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

impl DebtCyclePhase {
    /// Inclusive year containment.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_labels() {
        assert_eq!(CrisisGeneration::First.label(), "1st");
        assert_eq!(CrisisGeneration::Third.to_string(), "3rd");
        assert_eq!(CrisisGeneration::Second.model_name(), "Self-fulfilling");
    }

    #[test]
    fn external_crisis_types() {
        assert!(CrisisType::Currency.is_external());
        assert!(CrisisType::SovereignDebt.is_external());
        assert!(!CrisisType::Banking.is_external());
        assert!(!CrisisType::StockMarket.is_external());
    }

    #[test]
    fn level_ordering() {
        assert!(Level::Low < Level::Medium);
        assert!(Level::Medium < Level::High);
    }

    #[test]
    fn debt_phase_contains_year_inclusive() {
        let phase = DebtCyclePhase {
            id: "p".into(),
            name: "Bubble".into(),
            start_year: 2002,
            end_year: 2007,
            cycle_type: CycleType::LongTerm,
            phase: DebtPhaseTag::Bubble,
            interest_rate_trend: "rising".into(),
            debt_trend: "rising".into(),
            asset_prices: "rising".into(),
            characteristics: Vec::new(),
        };
        assert!(phase.contains_year(2002));
        assert!(phase.contains_year(2007));
        assert!(!phase.contains_year(2008));
    }

    #[test]
    fn crisis_duration() {
        let mut crisis = CrisisEvent {
            id: "x".into(),
            name: "X".into(),
            year: 1929,
            end_year: Some(1939),
            country: "United States".into(),
            country_code: "US".into(),
            crisis_type: CrisisType::StockMarket,
            severity: 5,
            description: String::new(),
            causes: Vec::new(),
            consequences: Vec::new(),
            outcome: CrisisOutcome::default(),
            crisis_generation: None,
        };
        assert_eq!(crisis.duration_years(), 11);
        crisis.end_year = None;
        assert_eq!(crisis.duration_years(), 1);
    }
}
