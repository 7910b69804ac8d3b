//! Longitudinal progress across a subject's completed evaluations.
//!
//! Works only on persisted summary snapshots, never on raw item scores.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sprout_core::models::evaluation::Evaluation;

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDelta {
    pub domain_id: String,
    /// Percentage in the first evaluation; 0 if the domain had no data there.
    pub first: u32,
    /// Percentage in the last evaluation; 0 if the domain had no data there.
    pub last: u32,
    pub delta: i32,
}

/// One point of a domain's percentage over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub evaluation_id: Uuid,
    pub completed_at: Option<jiff::Timestamp>,
    /// `None` when the domain has no data in that evaluation.
    pub percentage: Option<u32>,
}

/// Everything a progress view needs in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    pub evaluations: usize,
    pub overall_delta: i32,
    pub domain_deltas: Vec<DomainDelta>,
    pub top_improved: Vec<DomainDelta>,
    pub needs_attention: Vec<DomainDelta>,
}

/// Trend over completed evaluations, oldest first.
///
/// The caller supplies evaluations in chronological order for one subject
/// and protocol family; that order is kept as given. Evaluations that are
/// not completed do not contribute.
#[derive(Debug, Clone)]
pub struct ProgressTrend<'a> {
    evaluations: Vec<&'a Evaluation>,
}

impl<'a> ProgressTrend<'a> {
    pub fn new(evaluations: &'a [Evaluation]) -> Self {
        Self {
            evaluations: evaluations.iter().filter(|e| e.is_completed()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    fn endpoints(&self) -> Result<(&'a Evaluation, &'a Evaluation), EngineError> {
        match (self.evaluations.first(), self.evaluations.last()) {
            (Some(first), Some(last)) if self.evaluations.len() >= 2 => Ok((*first, *last)),
            _ => Err(EngineError::InsufficientHistory {
                available: self.evaluations.len(),
            }),
        }
    }

    /// Last overall percentage minus first.
    pub fn overall_delta(&self) -> Result<i32, EngineError> {
        let (first, last) = self.endpoints()?;
        Ok(signed_delta(
            first.summary.overall_percentage,
            last.summary.overall_percentage,
        ))
    }

    /// Deltas for every domain with data in either endpoint, ordered by
    /// domain id. A side without data counts as 0, so new coverage is a full
    /// improvement and lost coverage a full drop.
    pub fn domain_deltas(&self) -> Result<Vec<DomainDelta>, EngineError> {
        let (first, last) = self.endpoints()?;
        let covered: BTreeSet<&str> = [first, last]
            .into_iter()
            .flat_map(|e| e.summary.domain_summaries.values())
            .filter(|d| d.has_data)
            .map(|d| d.domain_id.as_str())
            .collect();
        let deltas = covered
            .into_iter()
            .map(|domain_id| {
                let before = first.summary.domain_percentage(domain_id).unwrap_or(0);
                let after = last.summary.domain_percentage(domain_id).unwrap_or(0);
                DomainDelta {
                    domain_id: domain_id.to_string(),
                    first: before,
                    last: after,
                    delta: signed_delta(before, after),
                }
            })
            .collect();
        Ok(deltas)
    }

    /// Up to `n` domains with positive delta, largest first.
    pub fn top_improved(&self, n: usize) -> Result<Vec<DomainDelta>, EngineError> {
        let mut deltas: Vec<_> = self
            .domain_deltas()?
            .into_iter()
            .filter(|d| d.delta > 0)
            .collect();
        deltas.sort_by(|a, b| by_delta(b, a).then_with(|| a.domain_id.cmp(&b.domain_id)));
        deltas.truncate(n);
        Ok(deltas)
    }

    /// Up to `n` domains with negative delta, largest drop first.
    pub fn needs_attention(&self, n: usize) -> Result<Vec<DomainDelta>, EngineError> {
        let mut deltas: Vec<_> = self
            .domain_deltas()?
            .into_iter()
            .filter(|d| d.delta < 0)
            .collect();
        deltas.sort_by(|a, b| by_delta(a, b).then_with(|| a.domain_id.cmp(&b.domain_id)));
        deltas.truncate(n);
        Ok(deltas)
    }

    /// A domain's percentage across every evaluation in the trend.
    pub fn domain_series(&self, domain_id: &str) -> Vec<TrendPoint> {
        self.evaluations
            .iter()
            .map(|e| TrendPoint {
                evaluation_id: e.id,
                completed_at: e.completed_at,
                percentage: e.summary.domain_percentage(domain_id),
            })
            .collect()
    }

    /// Every domain id seen in any evaluation of the trend.
    pub fn domain_ids(&self) -> BTreeSet<&'a str> {
        self.evaluations
            .iter()
            .copied()
            .flat_map(|e| e.summary.domain_summaries.keys().map(String::as_str))
            .collect()
    }

    pub fn report(&self, n: usize) -> Result<TrendReport, EngineError> {
        Ok(TrendReport {
            evaluations: self.len(),
            overall_delta: self.overall_delta()?,
            domain_deltas: self.domain_deltas()?,
            top_improved: self.top_improved(n)?,
            needs_attention: self.needs_attention(n)?,
        })
    }
}

fn signed_delta(first: u32, last: u32) -> i32 {
    i64::from(last).saturating_sub(i64::from(first)) as i32
}

fn by_delta(a: &DomainDelta, b: &DomainDelta) -> Ordering {
    a.delta.cmp(&b.delta)
}
