use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregated scores for one protocol domain.
///
/// Derived data: always re-derivable from the evaluation's score map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainSummary {
    pub domain_id: String,
    /// Number of scored items. Unscored items are not counted.
    pub total: u32,
    /// Items scored at full credit (achieved / mastered).
    pub mastered_count: u32,
    /// Items scored at partial credit (emerging).
    pub emerging_count: u32,
    /// Items scored at the lowest value (not achieved / absent).
    pub absent_count: u32,
    /// Count per score code, for every code that occurs at least once.
    pub value_counts: BTreeMap<String, u32>,
    /// Rounded `mastered_count / total * 100`; 0 when `has_data` is false.
    pub percentage: u32,
    /// False when no item of the domain has been scored yet.
    pub has_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developmental_age_months: Option<u32>,
    /// Sequences of this domain whose ceiling rule has been reached.
    #[serde(default)]
    pub ceiling_sequences: Vec<String>,
}

/// Domain summaries plus overall figures, as persisted on an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummarySnapshot {
    pub domain_summaries: BTreeMap<String, DomainSummary>,
    /// Mean of the percentages of domains with data, rounded.
    pub overall_percentage: u32,
    /// False when no domain has data.
    pub has_data: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_developmental_age_months: Option<f64>,
}

impl SummarySnapshot {
    pub fn domain(&self, domain_id: &str) -> Option<&DomainSummary> {
        self.domain_summaries.get(domain_id)
    }

    /// Percentage of a domain, or `None` if the domain is absent or has no data.
    pub fn domain_percentage(&self, domain_id: &str) -> Option<u32> {
        self.domain(domain_id)
            .filter(|d| d.has_data)
            .map(|d| d.percentage)
    }
}
