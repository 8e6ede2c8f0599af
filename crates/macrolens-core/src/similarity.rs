//! # Similarity Scorer
//!
//! Scores how closely a current macro snapshot resembles the pre-crisis
//! conditions of each historical crisis.
//!
//! ## Algorithm
//!
//! Additive weighted scoring. Every factor adds its weight to the
//! denominator whether it matches or not. Matching factors add credit to the
//! numerator. Two protective divergences subtract from it:
//!
//! | Factor              | Rule                                                  |
//! |---------------------|-------------------------------------------------------|
//! | Public debt         | |diff| < 20 ⇒ + (20 − |diff|)                          |
//! | Private debt        | |diff| < 30 ⇒ + (20 − |diff| / 1.5)                   |
//! | Interest rate       | |diff| < 2 ⇒ + 15                                     |
//! | Unemployment        | |diff| < 2 ⇒ + 10                                     |
//! | Stock valuation     | |diff| < 10 ⇒ + 20                                    |
//! | Yield curve         | |diff| < 1 ⇒ + 15                                     |
//! | Current account     | |diff| < 3 ⇒ + 10, else flag a historical deficit     |
//! | FX debt             | original sin absent today ⇒ − 10, |diff| < 20 ⇒ + 10  |
//! | Capital flow risk   | equal ⇒ + 10, high then / low now ⇒ − 5               |
//!
//! The final score is `round(clamp(100 × score / weight, 0, 100))`. The
//! clamp at zero matters: the penalties can push the raw ratio negative.

use crate::catalog::{Catalog, Diagnostic};
use crate::config::SimilarityWeights;
use crate::types::{CrisisConditions, CurrentConditions, Level};
use serde::{Deserialize, Serialize};

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Score of one historical snapshot against the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    /// 0 (nothing alike) to 100 (identical).
    pub similarity_score: u8,
    pub matching_factors: Vec<String>,
    pub differing_factors: Vec<String>,
}

/// One row of the ranked comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalComparison {
    pub crisis_id: String,
    pub crisis_name: String,
    pub year: i32,
    pub similarity_score: u8,
    pub matching_factors: Vec<String>,
    pub differing_factors: Vec<String>,
}

/// Ranked comparisons plus the catalog entries that could not be scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    /// Sorted by score, descending. Ties keep catalog order.
    pub comparisons: Vec<HistoricalComparison>,
    /// Data-integrity findings for skipped entries.
    pub skipped: Vec<Diagnostic>,
}

impl SimilarityReport {
    /// The closest historical match, if any.
    #[must_use]
    pub fn best_match(&self) -> Option<&HistoricalComparison> {
        self.comparisons.first()
    }

    /// Comparisons scoring at least `min_score`.
    pub fn above(&self, min_score: u8) -> impl Iterator<Item = &HistoricalComparison> {
        self.comparisons
            .iter()
            .filter(move |c| c.similarity_score >= min_score)
    }
}

// =============================================================================
// ACCUMULATOR
// =============================================================================

/// Running numerator, denominator and factor texts.
#[derive(Debug, Default)]
struct Tally {
    score: f64,
    weight: f64,
    matching: Vec<String>,
    differing: Vec<String>,
}

impl Tally {
    fn credit(&mut self, amount: f64, text: String) {
        self.score += amount;
        self.matching.push(text);
    }

    fn penalty(&mut self, amount: f64, text: String) {
        self.score -= amount;
        self.differing.push(text);
    }

    fn differ(&mut self, text: String) {
        self.differing.push(text);
    }

    fn finish(self) -> SimilarityScore {
        SimilarityScore {
            similarity_score: to_percent(self.score, self.weight),
            matching_factors: self.matching,
            differing_factors: self.differing,
        }
    }
}

/// `round(clamp(100 * score / weight, 0, 100))`.
fn to_percent(score: f64, weight: f64) -> u8 {
    if weight <= 0.0 || !score.is_finite() {
        return 0;
    }
    (100.0 * score / weight).clamp(0.0, 100.0).round() as u8
}

fn num(value: f64) -> String {
    format!("{value:.1}")
}

fn higher_or_lower(current: f64, historical: f64) -> &'static str {
    if current > historical { "higher" } else { "lower" }
}

// =============================================================================
// SCORING
// =============================================================================

/// Score one historical snapshot with the canonical weights.
#[must_use]
pub fn score(current: &CurrentConditions, crisis: &CrisisConditions) -> SimilarityScore {
    score_with(current, crisis, &SimilarityWeights::default())
}

/// Score one historical snapshot with explicit weights.
///
/// Reads only the fixed snapshot shape; crisis outcome metrics never
/// influence the result.
#[must_use]
pub fn score_with(
    current: &CurrentConditions,
    crisis: &CrisisConditions,
    w: &SimilarityWeights,
) -> SimilarityScore {
    let mut tally = Tally::default();

    // Public debt: graded credit
    tally.weight += w.public_debt;
    let diff = (current.debt_to_gdp - crisis.debt_to_gdp).abs();
    if diff < w.public_debt_tolerance {
        tally.credit(
            (w.public_debt - diff).max(0.0),
            format!(
                "Public debt levels similar ({}% vs {}% of GDP)",
                num(current.debt_to_gdp),
                num(crisis.debt_to_gdp)
            ),
        );
    } else {
        tally.differ(format!(
            "Public debt much {} ({}% vs {}% of GDP)",
            higher_or_lower(current.debt_to_gdp, crisis.debt_to_gdp),
            num(current.debt_to_gdp),
            num(crisis.debt_to_gdp)
        ));
    }

    // Private debt: graded credit, softer slope
    tally.weight += w.private_debt;
    let diff = (current.private_debt - crisis.private_debt).abs();
    if diff < w.private_debt_tolerance {
        tally.credit(
            (w.private_debt - diff / w.private_debt_divisor).max(0.0),
            format!(
                "Private debt levels similar ({}% vs {}% of GDP)",
                num(current.private_debt),
                num(crisis.private_debt)
            ),
        );
    } else {
        tally.differ(format!(
            "Private debt much {} ({}% vs {}% of GDP)",
            higher_or_lower(current.private_debt, crisis.private_debt),
            num(current.private_debt),
            num(crisis.private_debt)
        ));
    }

    // Binary factors
    binary_factor(
        &mut tally,
        w.interest_rate,
        w.interest_rate_tolerance,
        current.interest_rates,
        crisis.interest_rates,
        "Interest rate environment",
        "%",
    );
    binary_factor(
        &mut tally,
        w.unemployment,
        w.unemployment_tolerance,
        current.unemployment,
        crisis.unemployment,
        "Unemployment",
        "%",
    );
    binary_factor(
        &mut tally,
        w.stock_valuation,
        w.stock_valuation_tolerance,
        current.stock_valuation,
        crisis.stock_valuation,
        "Equity valuation (CAPE)",
        "",
    );
    binary_factor(
        &mut tally,
        w.yield_curve,
        w.yield_curve_tolerance,
        current.yield_curve,
        crisis.yield_curve,
        "Yield curve",
        "pp",
    );

    // Current account: a large historical deficit is worth flagging on a miss
    tally.weight += w.current_account;
    let diff = (current.current_account_gdp - crisis.current_account_gdp).abs();
    if diff < w.current_account_tolerance {
        tally.credit(
            w.current_account,
            format!(
                "Similar external balance (current account {}% vs {}% of GDP)",
                num(current.current_account_gdp),
                num(crisis.current_account_gdp)
            ),
        );
    } else if crisis.current_account_gdp < w.current_account_stress {
        tally.differ(format!(
            "Pre-crisis current account deficit of {}% of GDP not present today ({}%)",
            num(crisis.current_account_gdp.abs()),
            num(current.current_account_gdp)
        ));
    }

    // FX debt: original sin then, absent now, is a protective divergence
    tally.weight += w.fx_debt;
    let diff = (current.foreign_currency_debt - crisis.foreign_currency_debt).abs();
    if crisis.foreign_currency_debt > w.original_sin_historical_min
        && current.foreign_currency_debt < w.original_sin_current_max
    {
        tally.penalty(
            w.original_sin_penalty,
            format!(
                "No original sin today: foreign-currency debt {}% vs {}% before the crisis",
                num(current.foreign_currency_debt),
                num(crisis.foreign_currency_debt)
            ),
        );
    } else if diff < w.fx_debt_tolerance {
        tally.credit(
            w.fx_debt,
            format!(
                "Similar foreign-currency debt exposure ({}% vs {}%)",
                num(current.foreign_currency_debt),
                num(crisis.foreign_currency_debt)
            ),
        );
    }

    // Capital flow risk: categorical
    tally.weight += w.capital_flow;
    if current.capital_flow_risk == crisis.capital_flow_risk {
        tally.credit(
            w.capital_flow,
            format!("Same capital flow risk ({})", current.capital_flow_risk),
        );
    } else if crisis.capital_flow_risk == Level::High && current.capital_flow_risk == Level::Low {
        tally.penalty(
            w.safe_haven_penalty,
            "Safe-haven inflows today versus high capital flight risk before the crisis"
                .to_string(),
        );
    }

    tally.finish()
}

fn binary_factor(
    tally: &mut Tally,
    weight: f64,
    tolerance: f64,
    current: f64,
    historical: f64,
    label: &str,
    unit: &str,
) {
    tally.weight += weight;
    let diff = (current - historical).abs();
    if diff < tolerance {
        tally.credit(
            weight,
            format!("{label} similar ({}{unit} vs {}{unit})", num(current), num(historical)),
        );
    } else {
        tally.differ(format!(
            "{label} {} ({}{unit} vs {}{unit})",
            higher_or_lower(current, historical),
            num(current),
            num(historical)
        ));
    }
}

// =============================================================================
// BATCH
// =============================================================================

/// Score every joined crisis in the catalog with the canonical weights.
#[must_use]
pub fn score_similarity(current: &CurrentConditions, catalog: &Catalog) -> SimilarityReport {
    score_similarity_with(current, catalog, &SimilarityWeights::default())
}

/// Score every joined crisis in the catalog.
///
/// Results are sorted by score descending; the sort is stable, so ties keep
/// catalog order.
#[must_use]
pub fn score_similarity_with(
    current: &CurrentConditions,
    catalog: &Catalog,
    weights: &SimilarityWeights,
) -> SimilarityReport {
    let mut comparisons: Vec<HistoricalComparison> = catalog
        .joined_conditions()
        .map(|(_, crisis, conditions)| {
            let scored = score_with(current, conditions, weights);
            HistoricalComparison {
                crisis_id: crisis.id.clone(),
                crisis_name: crisis.name.clone(),
                year: crisis.year,
                similarity_score: scored.similarity_score,
                matching_factors: scored.matching_factors,
                differing_factors: scored.differing_factors,
            }
        })
        .collect();

    comparisons.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score));

    SimilarityReport {
        comparisons,
        skipped: catalog.diagnostics().to_vec(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawCatalog;
    use crate::types::{ConditionsRecord, CrisisEvent, CrisisOutcome, CrisisType, MacroSnapshot};

    fn today() -> MacroSnapshot {
        MacroSnapshot {
            debt_to_gdp: 123.0,
            private_debt: 150.0,
            interest_rates: 5.3,
            inflation: 3.2,
            unemployment: 3.9,
            yield_curve: -0.4,
            stock_valuation: 32.0,
            current_account_gdp: -3.0,
            foreign_currency_debt: 5.0,
            short_term_debt_reserves: 30.0,
            real_exchange_rate_deviation: 10.0,
            capital_flow_risk: Level::Medium,
            characteristics: Vec::new(),
        }
    }

    fn us_1929() -> MacroSnapshot {
        MacroSnapshot {
            debt_to_gdp: 16.0,
            private_debt: 190.0,
            interest_rates: 6.0,
            inflation: 0.0,
            unemployment: 3.2,
            yield_curve: 0.8,
            stock_valuation: 32.0,
            current_account_gdp: 0.7,
            foreign_currency_debt: 0.0,
            short_term_debt_reserves: 10.0,
            real_exchange_rate_deviation: 0.0,
            capital_flow_risk: Level::Low,
            characteristics: Vec::new(),
        }
    }

    fn divergent_emerging_market() -> MacroSnapshot {
        MacroSnapshot {
            debt_to_gdp: 30.0,
            private_debt: 60.0,
            interest_rates: 15.0,
            inflation: 12.0,
            unemployment: 9.0,
            yield_curve: 3.0,
            stock_valuation: 10.0,
            current_account_gdp: -8.0,
            foreign_currency_debt: 80.0,
            short_term_debt_reserves: 150.0,
            real_exchange_rate_deviation: 25.0,
            capital_flow_risk: Level::High,
            characteristics: Vec::new(),
        }
    }

    #[test]
    fn identical_snapshot_scores_100() {
        let now = today();
        let result = score(&now, &now);
        assert_eq!(result.similarity_score, 100);
        assert!(result.differing_factors.is_empty());
        assert_eq!(result.matching_factors.len(), 9);
    }

    #[test]
    fn identical_snapshot_with_heavy_fx_debt_scores_100() {
        // Original-sin and safe-haven rules must stay silent on equal values.
        let crisis = divergent_emerging_market();
        let result = score(&crisis, &crisis);
        assert_eq!(result.similarity_score, 100);
    }

    #[test]
    fn maximal_divergence_clamps_to_zero() {
        let mut now = today();
        now.capital_flow_risk = Level::Low;
        now.current_account_gdp = 4.0;
        let result = score(&now, &divergent_emerging_market());

        assert_eq!(result.similarity_score, 0);
        assert!(result.matching_factors.is_empty());
        assert!(
            result
                .differing_factors
                .iter()
                .any(|f| f.starts_with("No original sin"))
        );
        assert!(
            result
                .differing_factors
                .iter()
                .any(|f| f.starts_with("Safe-haven"))
        );
    }

    #[test]
    fn great_depression_is_partial_match() {
        let result = score(&today(), &us_1929());

        // 15 (rates) + 10 (unemployment) + 20 (valuation) + 10 (fx) = 55 of 130
        assert_eq!(result.similarity_score, 42);
        assert!(
            result
                .matching_factors
                .iter()
                .any(|f| f.starts_with("Equity valuation (CAPE) similar"))
        );
        assert!(
            result
                .differing_factors
                .iter()
                .any(|f| f.starts_with("Public debt much higher"))
        );
    }

    #[test]
    fn public_debt_credit_is_graded() {
        let now = today();
        let mut crisis = now.clone();
        crisis.debt_to_gdp = now.debt_to_gdp - 13.0;
        // 130 - 13 = 117 of 130
        assert_eq!(score(&now, &crisis).similarity_score, 90);
    }

    #[test]
    fn private_debt_credit_is_graded() {
        let now = today();
        let mut crisis = now.clone();
        crisis.private_debt = now.private_debt + 15.0;
        // 130 - 15 / 1.5 = 120 of 130
        assert_eq!(score(&now, &crisis).similarity_score, 92);
    }

    #[test]
    fn current_account_miss_flags_only_historical_deficit() {
        let now = today();

        let mut surplus = now.clone();
        surplus.current_account_gdp = 4.0;
        let result = score(&now, &surplus);
        assert!(
            !result
                .differing_factors
                .iter()
                .any(|f| f.contains("current account"))
        );

        let mut deficit = now.clone();
        deficit.current_account_gdp = -9.0;
        let result = score(&now, &deficit);
        assert!(
            result
                .differing_factors
                .iter()
                .any(|f| f.contains("current account deficit"))
        );
        // both miss the same 10 points
        assert_eq!(result.similarity_score, 92);
    }

    #[test]
    fn safe_haven_penalty_only_for_high_then_low_now() {
        let mut now = today();
        let mut crisis = now.clone();

        now.capital_flow_risk = Level::Medium;
        crisis.capital_flow_risk = Level::High;
        // missed 10 points, no penalty: 120/130
        assert_eq!(score(&now, &crisis).similarity_score, 92);

        now.capital_flow_risk = Level::Low;
        // missed 10 points and 5 penalty: 115/130
        assert_eq!(score(&now, &crisis).similarity_score, 88);
    }

    #[test]
    fn custom_penalty_weights_apply() {
        let mut now = today();
        now.capital_flow_risk = Level::Low;
        let mut crisis = now.clone();
        crisis.capital_flow_risk = Level::High;

        let weights = SimilarityWeights {
            safe_haven_penalty: 0.0,
            ..SimilarityWeights::default()
        };
        assert_eq!(score_with(&now, &crisis, &weights).similarity_score, 92);
    }

    fn crisis(id: &str, year: i32) -> CrisisEvent {
        CrisisEvent {
            id: id.to_string(),
            name: format!("Crisis {id}"),
            year,
            end_year: None,
            country: "Testland".into(),
            country_code: "TL".into(),
            crisis_type: CrisisType::Banking,
            severity: 3,
            description: String::new(),
            causes: Vec::new(),
            consequences: Vec::new(),
            outcome: CrisisOutcome::default(),
            crisis_generation: None,
        }
    }

    #[test]
    fn batch_sorted_with_stable_ties() {
        let now = today();
        let raw = RawCatalog {
            crises: vec![crisis("far", 1929), crisis("twin-a", 2000), crisis("twin-b", 2001)],
            conditions: vec![
                ConditionsRecord {
                    crisis_id: "far".into(),
                    snapshot: divergent_emerging_market(),
                },
                ConditionsRecord {
                    crisis_id: "twin-b".into(),
                    snapshot: now.clone(),
                },
                ConditionsRecord {
                    crisis_id: "twin-a".into(),
                    snapshot: now.clone(),
                },
                ConditionsRecord {
                    crisis_id: "missing".into(),
                    snapshot: now.clone(),
                },
            ],
            current: now.clone(),
            cycle_indicators: Vec::new(),
            push_pull_factors: Vec::new(),
            debt_cycle_phases: Vec::new(),
        };
        let catalog = Catalog::load(raw).unwrap();
        let report = score_similarity(&now, &catalog);

        let ids: Vec<_> = report
            .comparisons
            .iter()
            .map(|c| c.crisis_id.as_str())
            .collect();
        assert_eq!(ids, vec!["twin-b", "twin-a", "far"]);
        assert_eq!(report.best_match().map(|c| c.similarity_score), Some(100));
        assert_eq!(report.above(50).count(), 2);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn to_percent_guards_zero_weight() {
        assert_eq!(to_percent(10.0, 0.0), 0);
        assert_eq!(to_percent(-15.0, 130.0), 0);
        assert_eq!(to_percent(200.0, 130.0), 100);
    }
}
