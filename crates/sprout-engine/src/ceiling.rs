//! Advisory ceiling rule: has the subject failed enough consecutive items
//! in a sequence that further testing is unlikely to succeed?
//!
//! Never blocks scoring; callers surface it as a warning.

use serde::{Deserialize, Serialize};

use sprout_core::models::score::ScoreMap;
use sprout_protocols::{Credit, Protocol, ProtocolItem, ProtocolSequence, ScoreValueDomain};

/// Running count of consecutive lowest-value scores.
///
/// Unscored items (and codes outside the vocabulary) neither extend nor
/// reset the run.
#[derive(Debug, Clone)]
pub(crate) struct CeilingStreak<'a> {
    values: &'a ScoreValueDomain,
    threshold: u32,
    run: u32,
}

impl<'a> CeilingStreak<'a> {
    pub(crate) fn new(values: &'a ScoreValueDomain, threshold: u32) -> Self {
        Self {
            values,
            threshold,
            run: 0,
        }
    }

    /// Feed the next item in scan order. Returns true once the ceiling is reached.
    pub(crate) fn observe(&mut self, item: &ProtocolItem, scores: &ScoreMap) -> bool {
        let credit = scores
            .get(&item.id)
            .and_then(|record| self.values.credit(&record.value));
        match credit {
            Some(Credit::None) => self.run += 1,
            Some(_) => self.run = 0,
            None => {}
        }
        self.run >= self.threshold
    }
}

/// The ceiling rule of one protocol: its vocabulary plus threshold.
#[derive(Debug, Clone, Copy)]
pub struct CeilingRule<'a> {
    pub values: &'a ScoreValueDomain,
    pub threshold: u32,
}

impl<'a> CeilingRule<'a> {
    pub fn for_protocol(protocol: &'a Protocol) -> Self {
        Self {
            values: &protocol.values,
            threshold: protocol.ceiling_threshold,
        }
    }

    /// Scan the sequence in ordinal order, regardless of the order in which
    /// items were scored.
    pub fn reached(&self, sequence: &ProtocolSequence, scores: &ScoreMap) -> bool {
        let mut items: Vec<&ProtocolItem> = sequence.items.iter().collect();
        items.sort_by_key(|i| i.ordinal);

        let mut streak = CeilingStreak::new(self.values, self.threshold);
        items.into_iter().any(|item| streak.observe(item, scores))
    }
}

pub fn has_reached_ceiling(
    protocol: &Protocol,
    sequence: &ProtocolSequence,
    scores: &ScoreMap,
) -> bool {
    CeilingRule::for_protocol(protocol).reached(sequence, scores)
}

/// A sequence whose ceiling has been reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceCeiling {
    pub domain_id: String,
    pub sequence_id: String,
}

/// Every sequence of the protocol whose ceiling has been reached, in protocol order.
pub fn ceiling_report(protocol: &Protocol, scores: &ScoreMap) -> Vec<SequenceCeiling> {
    let rule = CeilingRule::for_protocol(protocol);
    protocol
        .domains
        .iter()
        .flat_map(|domain| {
            domain
                .sequences
                .iter()
                .filter(move |s| rule.reached(s, scores))
                .map(move |s| SequenceCeiling {
                    domain_id: domain.id.clone(),
                    sequence_id: s.id.clone(),
                })
        })
        .collect()
}
