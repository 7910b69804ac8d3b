//! Per-domain and overall summaries derived from a score map.
//!
//! Summaries are a cache: [`compute_summaries`] is pure and deterministic,
//! and any persisted snapshot must equal a fresh recomputation.

use std::collections::BTreeMap;

use tracing::debug;

use sprout_core::models::score::ScoreMap;
use sprout_core::models::summary::{DomainSummary, SummarySnapshot};
use sprout_protocols::{Credit, Protocol, ProtocolDomain, ProtocolItem};

use crate::ceiling::{CeilingRule, CeilingStreak};
use crate::error::EngineError;

/// Summarize every domain of `protocol` plus the overall figures.
pub fn compute_summaries(
    protocol: &Protocol,
    scores: &ScoreMap,
) -> Result<SummarySnapshot, EngineError> {
    let mut domain_summaries = BTreeMap::new();
    for domain in &protocol.domains {
        let summary = summarize_domain(protocol, domain, scores)?;
        domain_summaries.insert(domain.id.clone(), summary);
    }

    let percentages: Vec<u32> = domain_summaries
        .values()
        .filter(|d| d.has_data)
        .map(|d| d.percentage)
        .collect();
    let has_data = !percentages.is_empty();
    let overall_percentage = if has_data {
        rounded_ratio(percentages.iter().map(|p| u64::from(*p)).sum(), percentages.len() as u64)
    } else {
        0
    };

    let ages: Vec<f64> = domain_summaries
        .values()
        .filter_map(|d| d.developmental_age_months)
        .map(f64::from)
        .collect();
    let overall_developmental_age_months = if protocol.age_referenced && !ages.is_empty() {
        Some(ages.iter().sum::<f64>() / ages.len() as f64)
    } else {
        None
    };

    debug!(
        protocol_id = %protocol.id,
        scored = scores.len(),
        overall_percentage,
        "summaries computed"
    );

    Ok(SummarySnapshot {
        domain_summaries,
        overall_percentage,
        has_data,
        overall_developmental_age_months,
    })
}

/// Summarize one domain. Fails on a domain with no items, which is a
/// catalog-authoring error rather than a scoring state.
pub fn summarize_domain(
    protocol: &Protocol,
    domain: &ProtocolDomain,
    scores: &ScoreMap,
) -> Result<DomainSummary, EngineError> {
    if domain.item_count() == 0 {
        return Err(EngineError::EmptyProtocolDomain {
            protocol_id: protocol.id.clone(),
            domain_id: domain.id.clone(),
        });
    }

    let mut summary = DomainSummary {
        domain_id: domain.id.clone(),
        total: 0,
        mastered_count: 0,
        emerging_count: 0,
        absent_count: 0,
        value_counts: BTreeMap::new(),
        percentage: 0,
        has_data: false,
        developmental_age_months: None,
        ceiling_sequences: Vec::new(),
    };

    for item in domain.items() {
        let Some(record) = scores.get(&item.id) else {
            continue;
        };
        let Some(credit) = protocol.values.credit(&record.value) else {
            debug!(item_id = %item.id, value = %record.value, "ignoring score outside vocabulary");
            continue;
        };
        summary.total += 1;
        match credit {
            Credit::Full => summary.mastered_count += 1,
            Credit::Partial => summary.emerging_count += 1,
            Credit::None => summary.absent_count += 1,
        }
        *summary
            .value_counts
            .entry(record.value.as_str().to_string())
            .or_insert(0) += 1;
    }

    summary.has_data = summary.total > 0;
    if summary.has_data {
        summary.percentage = rounded_ratio(
            u64::from(summary.mastered_count) * 100,
            u64::from(summary.total),
        );
    }
    if protocol.age_referenced {
        summary.developmental_age_months = developmental_age(protocol, domain, scores);
    }

    let rule = CeilingRule::for_protocol(protocol);
    summary.ceiling_sequences = domain
        .sequences
        .iter()
        .filter(|s| rule.reached(s, scores))
        .map(|s| s.id.clone())
        .collect();

    Ok(summary)
}

/// Highest item age with sustained positive scores.
///
/// Items are scanned by ascending age with the ceiling rule's run semantics:
/// isolated failures are tolerated, and the scan stops once the ceiling
/// threshold of consecutive failures is reached. Any positive score (full
/// or partial credit) raises the estimate.
pub fn developmental_age(
    protocol: &Protocol,
    domain: &ProtocolDomain,
    scores: &ScoreMap,
) -> Option<u32> {
    let mut items: Vec<&ProtocolItem> = domain.items().collect();
    // Stable: equal ages keep sequence and ordinal order.
    items.sort_by_key(|i| i.age_months);

    let mut streak = CeilingStreak::new(&protocol.values, protocol.ceiling_threshold);
    let mut estimate = None;
    for item in items {
        if streak.observe(item, scores) {
            break;
        }
        let positive = scores
            .get(&item.id)
            .is_some_and(|r| protocol.values.is_positive(&r.value));
        if positive {
            estimate = Some(estimate.map_or(item.age_months, |age: u32| age.max(item.age_months)));
        }
    }
    estimate
}

/// Scored item ids the protocol does not define, in id order. Aggregation
/// ignores these.
pub fn foreign_items<'a>(protocol: &Protocol, scores: &'a ScoreMap) -> Vec<&'a str> {
    scores
        .keys()
        .map(String::as_str)
        .filter(|id| !protocol.contains_item(id))
        .collect()
}

/// `numerator / denominator` rounded half up. `denominator` must be non-zero.
fn rounded_ratio(numerator: u64, denominator: u64) -> u32 {
    ((numerator * 2 + denominator) / (denominator * 2)) as u32
}
