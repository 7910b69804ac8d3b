use std::path::Path;

use comfy_table::Table;
use eyre::Result;
use jiff::civil::Date;

use sprout_core::models::evaluation::Evaluation;
use sprout_core::models::score::ScoreMap;
use sprout_engine::aggregate::foreign_items;
use sprout_engine::ceiling::ceiling_report;
use sprout_engine::interpret::{interpret_evaluation, mastery_band};
use sprout_engine::lifecycle::AgeCalculator;
use sprout_engine::render::render_summary;
use sprout_engine::{ProgressTrend, compute_summaries};
use sprout_protocols::ProtocolCatalog;
use sprout_protocols::age::format_years_months;
use sprout_protocols::error::ProtocolError;

use sprout_cli::age::CalendarAgeCalculator;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn list_protocols(catalog: &ProtocolCatalog) {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Values", "Domains", "Items", "Ceiling"]);
    for protocol in catalog.protocols() {
        table.add_row(vec![
            protocol.id.clone(),
            protocol.name.clone(),
            protocol.values.id.clone(),
            protocol.domains.len().to_string(),
            protocol.item_count().to_string(),
            protocol.ceiling_threshold.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn summarize(
    catalog: &ProtocolCatalog,
    protocol_id: &str,
    scores_path: &Path,
    json: bool,
) -> Result<()> {
    let protocol = catalog.get_protocol(protocol_id)?;
    let scores: ScoreMap = read_json(scores_path)?;
    let unknown = foreign_items(protocol, &scores);
    if !unknown.is_empty() {
        tracing::warn!(
            count = unknown.len(),
            item_ids = %unknown.join(", "),
            protocol_id,
            "scores for items outside protocol are ignored"
        );
    }
    let summary = compute_summaries(protocol, &scores)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print!("{}", render_summary(protocol, &summary));
    let ceilings = ceiling_report(protocol, &scores);
    if !ceilings.is_empty() {
        println!("\nCeiling reached in {} sequence(s); consider stopping:", ceilings.len());
        for c in &ceilings {
            println!("  {} / {}", c.domain_id, c.sequence_id);
        }
    }
    Ok(())
}

/// Check that every persisted summary equals a fresh recomputation.
/// Returns the number of mismatches.
pub fn verify(catalog: &ProtocolCatalog, evaluations_path: &Path) -> Result<usize> {
    let evaluations: Vec<Evaluation> = read_json(evaluations_path)?;
    let mut mismatches = 0;
    for evaluation in &evaluations {
        let protocol = match catalog.get_protocol(&evaluation.protocol_id) {
            Ok(p) => p,
            Err(ProtocolError::ProtocolNotFound(id)) => {
                println!("{}: unknown protocol {id}", evaluation.id);
                mismatches += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let recomputed = compute_summaries(protocol, &evaluation.scores)?;
        if recomputed == evaluation.summary {
            println!("{}: ok", evaluation.id);
        } else {
            println!(
                "{}: stale summary (stored {}%, recomputed {}%)",
                evaluation.id, evaluation.summary.overall_percentage, recomputed.overall_percentage
            );
            mismatches += 1;
        }
    }
    Ok(mismatches)
}

pub fn trend(evaluations_path: &Path, top: usize, json: bool) -> Result<()> {
    let evaluations: Vec<Evaluation> = read_json(evaluations_path)?;
    let trend = ProgressTrend::new(&evaluations);
    let report = trend.report(top)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} completed evaluations, overall change {:+} points",
        report.evaluations, report.overall_delta
    );

    let mut table = Table::new();
    table.set_header(vec!["Domain", "First", "Last", "Change", "Band"]);
    for d in &report.domain_deltas {
        table.add_row(vec![
            d.domain_id.clone(),
            format!("{}%", d.first),
            format!("{}%", d.last),
            format!("{:+}", d.delta),
            format!("{:?}", mastery_band(d.last)),
        ]);
    }
    println!("{table}");

    if !report.top_improved.is_empty() {
        let ids: Vec<_> = report.top_improved.iter().map(|d| d.domain_id.as_str()).collect();
        println!("Most improved: {}", ids.join(", "));
    }
    if !report.needs_attention.is_empty() {
        let ids: Vec<_> = report.needs_attention.iter().map(|d| d.domain_id.as_str()).collect();
        println!("Needs attention: {}", ids.join(", "));
    }
    if let Some(reading) = evaluations.last().and_then(interpret_evaluation) {
        println!(
            "Latest developmental age {} at chronological age {} ({:?}, quotient {:.0})",
            format_years_months(reading.developmental_age_months),
            format_years_months(f64::from(reading.chronological_age_months)),
            reading.band,
            reading.quotient
        );
    }
    Ok(())
}

pub fn age(birth_date: Date, on: Date) -> Result<()> {
    let months = CalendarAgeCalculator.age_in_months(birth_date, on)?;
    println!("{months} months ({})", format_years_months(f64::from(months)));
    Ok(())
}
