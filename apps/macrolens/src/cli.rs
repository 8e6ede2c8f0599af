//! # CLI Commands
//!
//! One `cmd_*` function per subcommand. Each loads what it needs, runs one
//! engine operation and prints either a human table or JSON on stdout.
//!
//! Catalog files may be JSON (`RawCatalog`) or binary snapshots; the
//! snapshot magic decides which.

use crate::error::AppError;
use macrolens_core::formats::{self, SNAPSHOT_MAGIC};
use macrolens_core::{
    Catalog, CurrentConditions, CycleType, EngineConfig, RawCatalog, assess_capital_flow_balance,
    assess_capital_flow_weighted, assess_cycle_phase, builtin, cycle, debt_cycle, generation,
    phase_for_year, similarity,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

// =============================================================================
// LOADING
// =============================================================================

/// Load and validate a catalog. `None` means the built-in catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    let Some(path) = path else {
        tracing::debug!("using built-in catalog");
        return Ok(builtin::catalog()?);
    };

    let bytes = fs::read(path).map_err(|e| AppError::io(path, e))?;
    let catalog = if bytes.starts_with(&SNAPSHOT_MAGIC) {
        tracing::debug!(path = %path.display(), "loading binary snapshot");
        formats::import_catalog(&bytes)?
    } else {
        tracing::debug!(path = %path.display(), "loading JSON catalog");
        let raw: RawCatalog = serde_json::from_slice(&bytes).map_err(|e| AppError::json(path, e))?;
        Catalog::load(raw)?
    };

    for diagnostic in catalog.diagnostics() {
        tracing::warn!(%diagnostic, "catalog diagnostic");
    }
    Ok(catalog)
}

/// Load and validate an engine config. `None` means the canonical defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, AppError> {
    let config = match path {
        Some(path) => read_json::<EngineConfig>(path)?,
        None => EngineConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Load a current-conditions snapshot from JSON.
pub fn load_current(path: &Path) -> Result<CurrentConditions, AppError> {
    read_json(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| AppError::json(path, e))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// SIMILARITY
// =============================================================================

/// Rank historical crises by resemblance to the current snapshot.
///
/// `current` replaces the catalog's own current conditions for this run.
pub fn cmd_similarity(
    catalog: Option<&Path>,
    config: &EngineConfig,
    current: Option<&Path>,
    top: Option<usize>,
    json: bool,
) -> Result<(), AppError> {
    let catalog = load_catalog(catalog)?;
    let current = match current {
        Some(path) => {
            let snapshot = load_current(path)?;
            macrolens_core::validation::validate_snapshot("current conditions", &snapshot)?;
            snapshot
        }
        None => catalog.current().clone(),
    };

    let mut report = similarity::score_similarity_with(&current, &catalog, &config.similarity);
    if let Some(top) = top {
        report.comparisons.truncate(top);
    }
    tracing::info!(
        compared = report.comparisons.len(),
        skipped = report.skipped.len(),
        "similarity scored"
    );

    if json {
        return print_json(&report);
    }

    println!("Historical crisis similarity");
    println!("{:>3}  {:>5}  {:>4}  Crisis", "#", "Score", "Year");
    for (rank, row) in report.comparisons.iter().enumerate() {
        println!(
            "{:>3}  {:>5}  {:>4}  {}",
            rank + 1,
            row.similarity_score,
            row.year,
            row.crisis_name
        );
        for factor in &row.matching_factors {
            println!("              + {factor}");
        }
        for factor in &row.differing_factors {
            println!("              - {factor}");
        }
    }
    for skipped in &report.skipped {
        println!("skipped: {skipped}");
    }
    Ok(())
}

// =============================================================================
// GENERATIONS
// =============================================================================

/// Tag every crisis with its generation model.
pub fn cmd_generations(
    catalog: Option<&Path>,
    config: &EngineConfig,
    json: bool,
) -> Result<(), AppError> {
    let catalog = load_catalog(catalog)?;
    let breakdown = generation::classify_all(&catalog, &config.generation);

    if json {
        return print_json(&breakdown);
    }

    for row in &breakdown.crises {
        let marker = if row.explicit { " (catalog)" } else { "" };
        println!(
            "{:<4} {:<40} {} {}{marker}",
            row.year,
            row.crisis_name,
            row.generation.label(),
            row.generation.model_name()
        );
    }
    println!(
        "\n1st: {}  2nd: {}  3rd: {}",
        breakdown.first, breakdown.second, breakdown.third
    );
    Ok(())
}

// =============================================================================
// CYCLE
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CycleOutput<'a> {
    assessment: cycle::CycleAssessment,
    indicators: Vec<cycle::IndicatorReading>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    debt_cycle: Vec<&'a macrolens_core::DebtCyclePhase>,
}

/// Cycle risk from the indicator basket.
///
/// With `year`, also report the long- and short-term debt-cycle phases that
/// contain it.
pub fn cmd_cycle(catalog: Option<&Path>, year: Option<i32>, json: bool) -> Result<(), AppError> {
    let catalog = load_catalog(catalog)?;
    let indicators = catalog.cycle_indicators();
    let assessment = assess_cycle_phase(indicators);

    let debt_cycle: Vec<_> = year
        .map(|year| {
            [CycleType::LongTerm, CycleType::ShortTerm]
                .into_iter()
                .filter_map(|kind| phase_for_year(catalog.debt_cycle_phases(), year, kind))
                .collect()
        })
        .unwrap_or_default();

    let output = CycleOutput {
        assessment,
        indicators: cycle::indicator_readings(indicators),
        debt_cycle,
    };

    if json {
        return print_json(&output);
    }

    println!(
        "Risk score {} / 100: {}",
        output.assessment.risk_score,
        output.assessment.phase.label()
    );
    println!(
        "danger {}  warning {}  normal {}",
        output.assessment.danger_count,
        output.assessment.warning_count,
        output.assessment.normal_count
    );
    for reading in &output.indicators {
        println!(
            "  {:<32} {:>8.2}{:<4} {:?} ({:+.2} vs average)",
            reading.name,
            reading.current_value,
            reading.unit,
            reading.status,
            reading.deviation_from_average
        );
    }
    if let Some(year) = year {
        if output.debt_cycle.is_empty() {
            println!("No debt-cycle phase covers {year}");
        }
        for phase in &output.debt_cycle {
            println!(
                "{year}: {} ({}-{}, {:?})",
                phase.name, phase.start_year, phase.end_year, phase.phase
            );
        }
    }
    Ok(())
}

/// Print the debt-cycle timeline of one cycle type, oldest first.
pub fn cmd_timeline(
    catalog: Option<&Path>,
    cycle_type: CycleType,
    json: bool,
) -> Result<(), AppError> {
    let catalog = load_catalog(catalog)?;
    let phases = debt_cycle::timeline(catalog.debt_cycle_phases(), cycle_type);

    if json {
        return print_json(&phases);
    }

    for phase in phases {
        println!(
            "{}-{}  {:<36} {:?}",
            phase.start_year, phase.end_year, phase.name, phase.phase
        );
    }
    Ok(())
}

// =============================================================================
// CAPITAL FLOWS
// =============================================================================

/// Net capital flow from the push/pull factor list.
pub fn cmd_flows(
    catalog: Option<&Path>,
    config: &EngineConfig,
    weighted: bool,
    json: bool,
) -> Result<(), AppError> {
    let catalog = load_catalog(catalog)?;
    let factors = catalog.push_pull_factors();

    if weighted {
        let balance = assess_capital_flow_weighted(factors, &config.levels);
        if json {
            return print_json(&balance);
        }
        println!(
            "push pressure {}  pull pressure {}  net {}",
            balance.push_pressure, balance.pull_pressure, balance.net
        );
        println!(
            "inflow factors {}  outflow factors {}",
            balance.inflow_factors, balance.outflow_factors
        );
        return Ok(());
    }

    let balance = assess_capital_flow_balance(factors);
    if json {
        return print_json(&balance);
    }
    println!(
        "push {}  pull {}  net {}",
        balance.push, balance.pull, balance.net
    );
    Ok(())
}

// =============================================================================
// VALIDATE
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationOutput<'a> {
    crises: usize,
    conditions: usize,
    indicators: usize,
    factors: usize,
    phases: usize,
    diagnostics: &'a [macrolens_core::Diagnostic],
}

/// Load catalog and config, report counts and diagnostics.
///
/// Any configuration error surfaces as `Err` and a non-zero exit.
pub fn cmd_validate(
    catalog: Option<&Path>,
    config: Option<&Path>,
    json: bool,
) -> Result<(), AppError> {
    load_config(config)?;
    let catalog = load_catalog(catalog)?;

    let output = ValidationOutput {
        crises: catalog.crisis_count(),
        conditions: catalog.conditions_count(),
        indicators: catalog.cycle_indicators().len(),
        factors: catalog.push_pull_factors().len(),
        phases: catalog.debt_cycle_phases().len(),
        diagnostics: catalog.diagnostics(),
    };

    if json {
        return print_json(&output);
    }

    println!(
        "OK: {} crises, {} conditions, {} indicators, {} factors, {} phases",
        output.crises, output.conditions, output.indicators, output.factors, output.phases
    );
    for diagnostic in output.diagnostics {
        println!("warning: {diagnostic}");
    }
    Ok(())
}

// =============================================================================
// EXPORT / IMPORT
// =============================================================================

/// Write the loaded catalog as a binary snapshot.
pub fn cmd_export(catalog: Option<&Path>, out: &Path) -> Result<(), AppError> {
    let catalog = load_catalog(catalog)?;
    let bytes = formats::export_catalog(&catalog)?;
    fs::write(out, &bytes).map_err(|e| AppError::io(out, e))?;
    tracing::info!(path = %out.display(), bytes = bytes.len(), "snapshot exported");
    Ok(())
}

/// Read a binary snapshot, validate it, and optionally write it back as JSON.
pub fn cmd_import(input: &Path, out: Option<&Path>, json: bool) -> Result<(), AppError> {
    let bytes = fs::read(input).map_err(|e| AppError::io(input, e))?;
    let catalog = formats::import_catalog(&bytes)?;
    tracing::info!(
        path = %input.display(),
        crises = catalog.crisis_count(),
        "snapshot imported"
    );

    if let Some(out) = out {
        let text = serde_json::to_string_pretty(&RawCatalog::from(&catalog))?;
        fs::write(out, text).map_err(|e| AppError::io(out, e))?;
    }

    if json {
        return print_json(&RawCatalog::from(&catalog));
    }
    println!(
        "Imported {} crises and {} conditions",
        catalog.crisis_count(),
        catalog.conditions_count()
    );
    Ok(())
}
