//! # Built-in Reference Catalog
//!
//! A compact reference data set: major crises since 1923 with their
//! pre-crisis snapshots, a "now" snapshot for an advanced reserve-currency
//! economy, a cycle-indicator basket, capital-flow factors and debt-cycle
//! phases.
//!
//! Figures are rounded approximations from public sources (IMF, BIS,
//! Reinhart & Rogoff, Shiller). Use them for demos and tests. Production
//! callers load their own catalog.

use crate::catalog::{Catalog, RawCatalog};
use crate::error::Result;
use crate::types::{
    ConditionsRecord, CrisisEvent, CrisisGeneration, CrisisOutcome, CrisisType, CurrentConditions,
    CycleIndicator, CycleType, DebtCyclePhase, DebtPhaseTag, FactorKind, FlowDirection, Level,
    MacroSnapshot, PushPullFactor,
};

/// Load the built-in catalog.
pub fn catalog() -> Result<Catalog> {
    Catalog::load(raw_catalog())
}

/// The built-in catalog before validation.
#[must_use]
pub fn raw_catalog() -> RawCatalog {
    RawCatalog {
        crises: crises(),
        conditions: conditions(),
        current: current_conditions(),
        cycle_indicators: cycle_indicators(),
        push_pull_factors: push_pull_factors(),
        debt_cycle_phases: debt_cycle_phases(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// =============================================================================
// CRISES
// =============================================================================

struct CrisisRow<'a> {
    id: &'a str,
    name: &'a str,
    year: i32,
    end_year: Option<i32>,
    country: &'a str,
    country_code: &'a str,
    crisis_type: CrisisType,
    severity: u8,
    description: &'a str,
    causes: &'a [&'a str],
    consequences: &'a [&'a str],
}

fn crisis(row: CrisisRow<'_>, outcome: CrisisOutcome) -> CrisisEvent {
    CrisisEvent {
        id: row.id.to_string(),
        name: row.name.to_string(),
        year: row.year,
        end_year: row.end_year,
        country: row.country.to_string(),
        country_code: row.country_code.to_string(),
        crisis_type: row.crisis_type,
        severity: row.severity,
        description: row.description.to_string(),
        causes: strings(row.causes),
        consequences: strings(row.consequences),
        outcome,
        crisis_generation: None,
    }
}

/// Historical crisis events.
#[must_use]
pub fn crises() -> Vec<CrisisEvent> {
    let mut latin_america = crisis(
        CrisisRow {
            id: "latin-american-debt-1982",
            name: "Latin American Debt Crisis",
            year: 1982,
            end_year: Some(1989),
            country: "Mexico",
            country_code: "MX",
            crisis_type: CrisisType::SovereignDebt,
            severity: 4,
            description: "Mexico's moratorium on external debt triggered a region-wide lost decade.",
            causes: &["Petrodollar recycling loans", "Volcker rate shock", "Falling oil prices"],
            consequences: &["Brady bonds", "Lost decade of growth", "IMF structural adjustment"],
        },
        CrisisOutcome {
            gdp_decline: Some(4.2),
            recovery_years: Some(8.0),
            peak_inflation: Some(131.0),
            currency_decline: Some(70.0),
            ..CrisisOutcome::default()
        },
    );
    // Textbook first-generation case despite heavy dollar debt.
    latin_america.crisis_generation = Some(CrisisGeneration::First);

    vec![
        crisis(
            CrisisRow {
                id: "weimar-hyperinflation-1923",
                name: "Weimar Hyperinflation",
                year: 1921,
                end_year: Some(1923),
                country: "Germany",
                country_code: "DE",
                crisis_type: CrisisType::Inflation,
                severity: 5,
                description: "Monetary financing of reparations and deficits destroyed the mark.",
                causes: &["War reparations", "Deficit monetization", "Occupation of the Ruhr"],
                consequences: &["Rentenmark reform", "Wiped-out middle class savings"],
            },
            CrisisOutcome {
                peak_inflation: Some(29_500.0),
                currency_decline: Some(100.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "great-depression-1929",
                name: "Great Depression",
                year: 1929,
                end_year: Some(1939),
                country: "United States",
                country_code: "US",
                crisis_type: CrisisType::StockMarket,
                severity: 5,
                description: "Margin-fuelled equity bubble burst, followed by banking panics and deflation.",
                causes: &["Margin lending", "Gold standard constraints", "Bank runs"],
                consequences: &["Glass-Steagall", "FDIC", "Abandonment of the gold standard"],
            },
            CrisisOutcome {
                gdp_decline: Some(26.7),
                recovery_years: Some(10.0),
                bank_failures: Some(9_000),
                ..CrisisOutcome::default()
            },
        ),
        latin_america,
        crisis(
            CrisisRow {
                id: "japan-asset-bubble-1990",
                name: "Japanese Asset Price Bubble",
                year: 1990,
                end_year: Some(2003),
                country: "Japan",
                country_code: "JP",
                crisis_type: CrisisType::Banking,
                severity: 4,
                description: "Collapse of land and equity prices left banks with a decade of bad loans.",
                causes: &["Loose monetary policy after Plaza Accord", "Land-collateral lending"],
                consequences: &["Lost decades", "Zombie banks", "Zero interest rate policy"],
            },
            CrisisOutcome {
                gdp_decline: Some(2.0),
                recovery_years: Some(13.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "erm-crisis-1992",
                name: "ERM Crisis (Black Wednesday)",
                year: 1992,
                end_year: Some(1993),
                country: "United Kingdom",
                country_code: "GB",
                crisis_type: CrisisType::Currency,
                severity: 2,
                description: "Speculative attacks forced sterling and the lira out of the Exchange Rate Mechanism.",
                causes: &["Bundesbank tightening", "Inconsistent peg", "Speculative attack"],
                consequences: &["Inflation targeting in the UK", "Sterling devaluation"],
            },
            CrisisOutcome {
                currency_decline: Some(15.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "tequila-crisis-1994",
                name: "Tequila Crisis",
                year: 1994,
                end_year: Some(1995),
                country: "Mexico",
                country_code: "MX",
                crisis_type: CrisisType::Currency,
                severity: 4,
                description: "Peso devaluation with dollar-linked tesobonos coming due.",
                causes: &["Tesobono rollover risk", "Political shocks", "Current account deficit"],
                consequences: &["US-led rescue package", "Banking crisis"],
            },
            CrisisOutcome {
                gdp_decline: Some(6.3),
                recovery_years: Some(2.0),
                currency_decline: Some(50.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "asian-financial-1997",
                name: "Asian Financial Crisis",
                year: 1997,
                end_year: Some(1998),
                country: "Thailand",
                country_code: "TH",
                crisis_type: CrisisType::Currency,
                severity: 5,
                description: "Collapse of the baht spread across East Asia through balance-sheet contagion.",
                causes: &["Dollar-denominated corporate debt", "Hot money inflows", "Fixed peg"],
                consequences: &["IMF programmes", "Reserve accumulation across Asia"],
            },
            CrisisOutcome {
                gdp_decline: Some(10.5),
                recovery_years: Some(5.0),
                currency_decline: Some(55.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "russian-default-1998",
                name: "Russian Financial Crisis",
                year: 1998,
                end_year: Some(1999),
                country: "Russia",
                country_code: "RU",
                crisis_type: CrisisType::SovereignDebt,
                severity: 4,
                description: "Default on domestic GKO debt and rouble devaluation.",
                causes: &["Fiscal deficits", "Oil price collapse", "Short-term GKO financing"],
                consequences: &["LTCM collapse", "Rouble float"],
            },
            CrisisOutcome {
                gdp_decline: Some(5.3),
                currency_decline: Some(70.0),
                peak_inflation: Some(84.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "dotcom-2000",
                name: "Dot-com Bubble",
                year: 2000,
                end_year: Some(2002),
                country: "United States",
                country_code: "US",
                crisis_type: CrisisType::StockMarket,
                severity: 3,
                description: "Technology equity valuations collapsed after a speculative boom.",
                causes: &["Extreme valuations", "Speculative IPOs"],
                consequences: &["Nasdaq -78%", "Mild recession"],
            },
            CrisisOutcome {
                gdp_decline: Some(0.3),
                recovery_years: Some(2.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "argentina-2001",
                name: "Argentine Crisis",
                year: 2001,
                end_year: Some(2002),
                country: "Argentina",
                country_code: "AR",
                crisis_type: CrisisType::SovereignDebt,
                severity: 5,
                description: "Collapse of the currency board and the largest sovereign default of its time.",
                causes: &["Currency board", "Dollarized liabilities", "Fiscal slippage"],
                consequences: &["Corralito deposit freeze", "Peso devaluation"],
            },
            CrisisOutcome {
                gdp_decline: Some(10.9),
                recovery_years: Some(4.0),
                currency_decline: Some(75.0),
                debt_to_gdp: Some(166.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "global-financial-2008",
                name: "Global Financial Crisis",
                year: 2008,
                end_year: Some(2009),
                country: "United States",
                country_code: "US",
                crisis_type: CrisisType::Banking,
                severity: 5,
                description: "Subprime mortgage losses froze wholesale funding and toppled major banks.",
                causes: &["Subprime lending", "Securitization", "Leverage in shadow banking"],
                consequences: &["Dodd-Frank", "Quantitative easing", "Basel III"],
            },
            CrisisOutcome {
                gdp_decline: Some(4.3),
                recovery_years: Some(6.0),
                bank_failures: Some(465),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "iceland-banking-2008",
                name: "Icelandic Banking Collapse",
                year: 2008,
                end_year: Some(2011),
                country: "Iceland",
                country_code: "IS",
                crisis_type: CrisisType::Banking,
                severity: 5,
                description: "Banks ten times the size of GDP failed within a week.",
                causes: &["Foreign-currency wholesale funding", "Carry-trade inflows"],
                consequences: &["Capital controls", "Bank nationalisations"],
            },
            CrisisOutcome {
                gdp_decline: Some(10.0),
                currency_decline: Some(50.0),
                bank_failures: Some(3),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "zimbabwe-hyperinflation-2008",
                name: "Zimbabwe Hyperinflation",
                year: 2007,
                end_year: Some(2009),
                country: "Zimbabwe",
                country_code: "ZW",
                crisis_type: CrisisType::Inflation,
                severity: 5,
                description: "Money printing and output collapse drove inflation into the billions of percent.",
                causes: &["Deficit monetization", "Land reform output collapse"],
                consequences: &["Dollarization", "Abandonment of the Zimbabwe dollar"],
            },
            CrisisOutcome {
                gdp_decline: Some(17.0),
                peak_inflation: Some(89_700_000_000_000_000_000.0),
                ..CrisisOutcome::default()
            },
        ),
        crisis(
            CrisisRow {
                id: "eurozone-greece-2010",
                name: "Greek Sovereign Debt Crisis",
                year: 2010,
                end_year: Some(2018),
                country: "Greece",
                country_code: "GR",
                crisis_type: CrisisType::SovereignDebt,
                severity: 4,
                description: "Revised deficit figures triggered a sovereign funding crisis inside the euro area.",
                causes: &["Hidden fiscal deficits", "Loss of competitiveness", "No exchange rate lever"],
                consequences: &["Troika bailouts", "PSI haircut", "ECB OMT"],
            },
            CrisisOutcome {
                gdp_decline: Some(25.0),
                recovery_years: Some(9.0),
                debt_to_gdp: Some(180.0),
                ..CrisisOutcome::default()
            },
        ),
    ]
}

// =============================================================================
// PRE-CRISIS CONDITIONS
// =============================================================================

fn record(crisis_id: &str, snapshot: MacroSnapshot) -> ConditionsRecord {
    ConditionsRecord {
        crisis_id: crisis_id.to_string(),
        snapshot,
    }
}

/// Argument order follows the snapshot field order.
fn snapshot(
    debt_to_gdp: f64,
    private_debt: f64,
    interest_rates: f64,
    inflation: f64,
    unemployment: f64,
    yield_curve: f64,
    stock_valuation: f64,
    current_account_gdp: f64,
    foreign_currency_debt: f64,
    short_term_debt_reserves: f64,
    real_exchange_rate_deviation: f64,
    capital_flow_risk: Level,
    characteristics: &[&str],
) -> MacroSnapshot {
    MacroSnapshot {
        debt_to_gdp,
        private_debt,
        interest_rates,
        inflation,
        unemployment,
        yield_curve,
        stock_valuation,
        current_account_gdp,
        foreign_currency_debt,
        short_term_debt_reserves,
        real_exchange_rate_deviation,
        capital_flow_risk,
        characteristics: strings(characteristics),
    }
}

/// Pre-crisis snapshots, keyed by crisis id.
#[must_use]
pub fn conditions() -> Vec<ConditionsRecord> {
    vec![
        record(
            "weimar-hyperinflation-1923",
            snapshot(
                160.0, 40.0, 5.0, 140.0, 3.0, 0.0, 8.0, -4.0, 60.0, 200.0, -20.0, Level::High,
                &["Reparations payable in gold marks", "Deficit monetization"],
            ),
        ),
        record(
            "great-depression-1929",
            snapshot(
                16.0, 190.0, 6.0, 0.0, 3.2, 0.8, 32.0, 0.7, 0.0, 10.0, 0.0, Level::Low,
                &["Margin debt boom", "Gold standard"],
            ),
        ),
        record(
            "latin-american-debt-1982",
            snapshot(
                50.0, 30.0, 16.0, 28.0, 4.5, -2.0, 6.0, -5.5, 80.0, 180.0, 20.0, Level::High,
                &["Syndicated dollar loans", "Floating-rate external debt"],
            ),
        ),
        record(
            "japan-asset-bubble-1990",
            snapshot(
                64.0, 215.0, 6.0, 3.1, 2.1, -0.3, 70.0, 1.4, 5.0, 20.0, 5.0, Level::Low,
                &["Land price bubble", "Keiretsu cross-shareholdings"],
            ),
        ),
        record(
            "erm-crisis-1992",
            snapshot(
                35.0, 110.0, 10.0, 3.7, 9.7, -1.0, 14.0, -2.0, 10.0, 60.0, 12.0, Level::High,
                &["Fixed exchange rate peg", "Speculative attack"],
            ),
        ),
        record(
            "tequila-crisis-1994",
            snapshot(
                30.0, 40.0, 15.0, 7.0, 3.7, 1.0, 12.0, -7.0, 55.0, 400.0, 20.0, Level::High,
                &["Dollar-indexed tesobonos", "Crawling peg"],
            ),
        ),
        record(
            "asian-financial-1997",
            snapshot(
                15.0, 160.0, 12.0, 5.8, 1.5, 0.0, 15.0, -8.0, 65.0, 150.0, 25.0, Level::High,
                &["Currency mismatch in corporate sector", "Hot money inflows", "Fixed peg to USD"],
            ),
        ),
        record(
            "russian-default-1998",
            snapshot(
                50.0, 20.0, 40.0, 11.0, 12.0, -15.0, 4.0, 0.5, 45.0, 250.0, 15.0, Level::High,
                &["Short-term GKO financing", "Commodity dependence"],
            ),
        ),
        record(
            "dotcom-2000",
            snapshot(
                55.0, 145.0, 6.5, 3.4, 4.0, 0.1, 44.0, -4.0, 0.0, 5.0, 15.0, Level::Low,
                &["Technology valuation bubble", "Retail speculation"],
            ),
        ),
        record(
            "argentina-2001",
            snapshot(
                53.0, 25.0, 12.0, -1.0, 15.0, 2.0, 10.0, -3.0, 90.0, 130.0, 30.0, Level::High,
                &["Currency board", "Dollarization of deposits and loans"],
            ),
        ),
        record(
            "global-financial-2008",
            snapshot(
                64.0, 170.0, 5.25, 2.8, 4.6, -0.2, 27.0, -5.0, 0.0, 5.0, 5.0, Level::Low,
                &["Subprime mortgage boom", "Shadow banking leverage"],
            ),
        ),
        record(
            "iceland-banking-2008",
            snapshot(
                27.0, 300.0, 13.0, 5.0, 1.0, -2.0, 25.0, -25.0, 70.0, 900.0, 20.0, Level::High,
                &["Banking sector ten times GDP", "Currency mismatch on household loans"],
            ),
        ),
        record(
            "zimbabwe-hyperinflation-2008",
            snapshot(
                200.0, 10.0, 500.0, 1_000.0, 80.0, 0.0, 5.0, -15.0, 30.0, 500.0, -50.0, Level::High,
                &["Deficit monetization", "Output collapse"],
            ),
        ),
        record(
            "eurozone-greece-2010",
            snapshot(
                127.0, 120.0, 1.0, 1.2, 9.6, 2.5, 10.0, -14.0, 0.0, 30.0, 10.0, Level::High,
                &["Monetary union without fiscal union", "Sudden stop in periphery funding"],
            ),
        ),
    ]
}

/// Snapshot of an advanced, reserve-currency economy in a late-cycle state.
#[must_use]
pub fn current_conditions() -> CurrentConditions {
    snapshot(
        123.0,
        150.0,
        5.3,
        3.2,
        3.9,
        -0.4,
        32.0,
        -3.0,
        5.0,
        30.0,
        10.0,
        Level::Medium,
        &["Reserve currency issuer", "Inverted yield curve", "Elevated fiscal deficits"],
    )
}

// =============================================================================
// CYCLE INDICATORS
// =============================================================================

fn indicator(
    name: &str,
    unit: &str,
    current_value: f64,
    warning_threshold: f64,
    danger_threshold: f64,
    historical_average: f64,
    inverted: bool,
) -> CycleIndicator {
    CycleIndicator {
        name: name.to_string(),
        unit: unit.to_string(),
        current_value,
        warning_threshold,
        danger_threshold,
        historical_average,
        inverted,
    }
}

/// Business-cycle indicator basket.
#[must_use]
pub fn cycle_indicators() -> Vec<CycleIndicator> {
    vec![
        indicator("Yield Curve (10Y-2Y)", "pp", -0.4, 0.25, 0.0, 1.5, true),
        indicator("High Yield Spread", "%", 3.2, 5.0, 7.0, 4.5, false),
        indicator("Household Debt Service Ratio", "%", 9.8, 11.0, 13.0, 10.5, false),
        indicator("CAPE Ratio", "x", 32.0, 25.0, 30.0, 17.0, false),
        indicator("Unemployment Rate", "%", 3.9, 4.5, 3.8, 5.8, true),
        indicator("Corporate Debt to GDP", "%", 48.0, 45.0, 50.0, 40.0, false),
        indicator("Margin Debt to GDP", "%", 3.2, 2.5, 3.0, 1.8, false),
        indicator("Consumer Sentiment", "index", 68.0, 75.0, 60.0, 85.0, true),
    ]
}

// =============================================================================
// CAPITAL FLOW FACTORS
// =============================================================================

fn factor(
    id: &str,
    name: &str,
    kind: FactorKind,
    direction: FlowDirection,
    current_level: Level,
    description: &str,
) -> PushPullFactor {
    PushPullFactor {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        direction,
        current_level,
        description: description.to_string(),
    }
}

/// Push and pull drivers of emerging-market capital flows.
#[must_use]
pub fn push_pull_factors() -> Vec<PushPullFactor> {
    use FactorKind::{Pull, Push};
    use FlowDirection::{Inflow, Outflow};

    vec![
        factor(
            "us-interest-rates",
            "US Interest Rates",
            Push,
            Outflow,
            Level::High,
            "Higher US yields draw capital back to dollar assets.",
        ),
        factor(
            "global-risk-appetite",
            "Global Risk Appetite",
            Push,
            Inflow,
            Level::Medium,
            "Low volatility encourages search for yield abroad.",
        ),
        factor(
            "commodity-prices",
            "Commodity Prices",
            Push,
            Inflow,
            Level::Low,
            "Commodity booms lift exporters' terms of trade.",
        ),
        factor(
            "dollar-strength",
            "Dollar Strength",
            Push,
            Outflow,
            Level::High,
            "A strong dollar tightens financial conditions for dollar borrowers.",
        ),
        factor(
            "growth-differential",
            "Growth Differential",
            Pull,
            Inflow,
            Level::Medium,
            "Faster domestic growth attracts equity and FDI.",
        ),
        factor(
            "domestic-rates",
            "Domestic Interest Rates",
            Pull,
            Inflow,
            Level::High,
            "High local real rates attract carry trades.",
        ),
        factor(
            "institutional-quality",
            "Institutional Quality",
            Pull,
            Inflow,
            Level::Medium,
            "Credible institutions lower country risk premia.",
        ),
        factor(
            "fiscal-position",
            "Fiscal Position",
            Pull,
            Outflow,
            Level::Low,
            "Weak public finances deter long-term investors.",
        ),
    ]
}

// =============================================================================
// DEBT CYCLE PHASES
// =============================================================================

fn phase(
    id: &str,
    name: &str,
    years: (i32, i32),
    cycle_type: CycleType,
    tag: DebtPhaseTag,
    trends: (&str, &str, &str),
    characteristics: &[&str],
) -> DebtCyclePhase {
    DebtCyclePhase {
        id: id.to_string(),
        name: name.to_string(),
        start_year: years.0,
        end_year: years.1,
        cycle_type,
        phase: tag,
        interest_rate_trend: trends.0.to_string(),
        debt_trend: trends.1.to_string(),
        asset_prices: trends.2.to_string(),
        characteristics: strings(characteristics),
    }
}

/// Long- and short-term debt cycle periods.
#[must_use]
pub fn debt_cycle_phases() -> Vec<DebtCyclePhase> {
    use CycleType::{LongTerm, ShortTerm};
    use DebtPhaseTag::{
        Bubble, Deleveraging, Depression, Early, Expansion, Normalization, Recession, Top,
    };

    vec![
        phase(
            "lt-roaring-twenties",
            "Roaring Twenties",
            (1922, 1928),
            LongTerm,
            Bubble,
            ("stable", "rising", "rising"),
            &["Margin lending", "Consumer credit boom"],
        ),
        phase(
            "lt-1929-top",
            "1929 Top",
            (1929, 1929),
            LongTerm,
            Top,
            ("rising", "peak", "peak"),
            &["Fed tightening", "Equity peak"],
        ),
        phase(
            "lt-great-depression",
            "Great Depression",
            (1930, 1933),
            LongTerm,
            Depression,
            ("falling", "defaulting", "collapsing"),
            &["Bank failures", "Deflation"],
        ),
        phase(
            "lt-deleveraging-1933",
            "Beautiful Deleveraging",
            (1934, 1945),
            LongTerm,
            Deleveraging,
            ("low", "falling", "recovering"),
            &["Dollar devaluation", "Financial repression"],
        ),
        phase(
            "lt-postwar",
            "Post-war Early Cycle",
            (1946, 1965),
            LongTerm,
            Early,
            ("low", "rising", "rising"),
            &["Bretton Woods", "Productivity boom"],
        ),
        phase(
            "lt-great-moderation",
            "Great Moderation",
            (1982, 2006),
            LongTerm,
            Bubble,
            ("falling", "rising", "rising"),
            &["Disinflation", "Financial deregulation"],
        ),
        phase(
            "lt-2007-top",
            "2007 Top",
            (2007, 2007),
            LongTerm,
            Top,
            ("rising", "peak", "peak"),
            &["Subprime peak"],
        ),
        phase(
            "lt-gfc",
            "Global Financial Crisis",
            (2008, 2009),
            LongTerm,
            Depression,
            ("falling", "defaulting", "collapsing"),
            &["Zero lower bound", "Bank rescues"],
        ),
        phase(
            "lt-qe-era",
            "QE Deleveraging",
            (2010, 2019),
            LongTerm,
            Deleveraging,
            ("low", "shifting to public sector", "recovering"),
            &["Quantitative easing", "Household deleveraging"],
        ),
        phase(
            "lt-post-pandemic",
            "Post-pandemic Normalization",
            (2020, 2025),
            LongTerm,
            Normalization,
            ("rising", "high", "volatile"),
            &["Inflation surge", "Rate normalization"],
        ),
        phase(
            "st-2001-recession",
            "Dot-com Recession",
            (2001, 2001),
            ShortTerm,
            Recession,
            ("falling", "stable", "falling"),
            &["Tech capex bust"],
        ),
        phase(
            "st-2002-expansion",
            "Housing Expansion",
            (2002, 2007),
            ShortTerm,
            Expansion,
            ("rising", "rising", "rising"),
            &["Housing boom"],
        ),
        phase(
            "st-2010s-expansion",
            "2010s Expansion",
            (2010, 2019),
            ShortTerm,
            Expansion,
            ("low", "rising", "rising"),
            &["Longest US expansion on record"],
        ),
        phase(
            "st-covid",
            "Pandemic Recession",
            (2020, 2020),
            ShortTerm,
            Recession,
            ("falling", "rising", "volatile"),
            &["Lockdowns", "Fiscal transfers"],
        ),
        phase(
            "st-2021-expansion",
            "Reopening Expansion",
            (2021, 2025),
            ShortTerm,
            Expansion,
            ("rising", "stable", "rising"),
            &["Labour shortages", "Tightening cycle"],
        ),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
