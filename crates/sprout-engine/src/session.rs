//! The mutable per-evaluation score map.
//!
//! A [`ScoringSession`] is plain serializable data owned by whoever is
//! editing the evaluation. Every mutation goes through the methods below,
//! which check the item and value against the bound protocol first.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use sprout_core::models::evaluation::{Evaluation, EvaluationStatus};
use sprout_core::models::score::{ScoreMap, ScoreRecord, ScoreValue};
use sprout_protocols::Protocol;

use crate::error::{EngineError, TransitionFault};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSession {
    pub evaluation_id: Uuid,
    pub subject_id: Uuid,
    pub protocol_id: String,
    pub status: EvaluationStatus,
    scores: ScoreMap,
    /// Set by every successful mutation, cleared by [`ScoringSession::mark_saved`].
    #[serde(default)]
    dirty: bool,
}

/// How much of a protocol has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub scored: usize,
    pub total: usize,
}

impl ScoringSession {
    pub fn new(evaluation_id: Uuid, subject_id: Uuid, protocol_id: impl Into<String>) -> Self {
        Self {
            evaluation_id,
            subject_id,
            protocol_id: protocol_id.into(),
            status: EvaluationStatus::Draft,
            scores: ScoreMap::new(),
            dirty: false,
        }
    }

    /// Resume editing a persisted evaluation.
    pub fn from_evaluation(evaluation: &Evaluation) -> Self {
        Self {
            evaluation_id: evaluation.id,
            subject_id: evaluation.subject_id,
            protocol_id: evaluation.protocol_id.clone(),
            status: evaluation.status,
            scores: evaluation.scores.clone(),
            dirty: false,
        }
    }

    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    pub fn into_scores(self) -> ScoreMap {
        self.scores
    }

    pub fn get_score(&self, item_id: &str) -> Option<&ScoreRecord> {
        self.scores.get(item_id)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Insert or replace the score for one item.
    pub fn set_score(
        &mut self,
        protocol: &Protocol,
        item_id: &str,
        value: ScoreValue,
        note: Option<String>,
    ) -> Result<&ScoreRecord, EngineError> {
        self.check_writable(protocol)?;
        check_score(protocol, item_id, &value)?;

        let record = ScoreRecord {
            item_id: item_id.to_string(),
            value,
            note,
            updated_at: jiff::Timestamp::now(),
        };
        self.touch();
        debug!(evaluation_id = %self.evaluation_id, item_id, value = %record.value, "item scored");
        self.scores.insert(item_id.to_string(), record);
        Ok(&self.scores[item_id])
    }

    /// Apply one value to many items, keeping each item's existing note.
    ///
    /// Every id is checked before anything is written, so either all items
    /// change or none do.
    pub fn set_scores_bulk<I>(
        &mut self,
        protocol: &Protocol,
        item_ids: I,
        value: ScoreValue,
    ) -> Result<usize, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.check_writable(protocol)?;
        let ids: Vec<String> = item_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        for id in &ids {
            check_score(protocol, id, &value)?;
        }
        if ids.is_empty() {
            return Ok(0);
        }

        let now = jiff::Timestamp::now();
        for id in &ids {
            let note = self.scores.get(id).and_then(|r| r.note.clone());
            self.scores.insert(
                id.clone(),
                ScoreRecord {
                    item_id: id.clone(),
                    value: value.clone(),
                    note,
                    updated_at: now,
                },
            );
        }
        self.touch();
        debug!(evaluation_id = %self.evaluation_id, count = ids.len(), %value, "bulk scored");
        Ok(ids.len())
    }

    /// Remove an item's score, returning it to "not yet scored".
    pub fn clear_score(
        &mut self,
        protocol: &Protocol,
        item_id: &str,
    ) -> Result<Option<ScoreRecord>, EngineError> {
        self.check_writable(protocol)?;
        let removed = self.scores.remove(item_id);
        if removed.is_some() {
            self.dirty = true;
        }
        Ok(removed)
    }

    pub fn progress(&self, protocol: &Protocol) -> SessionProgress {
        SessionProgress {
            scored: protocol
                .items()
                .filter(|i| self.scores.contains_key(&i.id))
                .count(),
            total: protocol.item_count(),
        }
    }

    fn check_writable(&self, protocol: &Protocol) -> Result<(), EngineError> {
        if protocol.id != self.protocol_id {
            return Err(EngineError::ProtocolMismatch {
                expected: self.protocol_id.clone(),
                actual: protocol.id.clone(),
            });
        }
        if self.status.is_terminal() {
            return Err(EngineError::transition(
                self.evaluation_id,
                TransitionFault::AlreadyCompleted,
            ));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.dirty = true;
        if self.status == EvaluationStatus::Draft {
            self.status = EvaluationStatus::InProgress;
        }
    }
}

/// Check that `item_id` belongs to the protocol and `value` is in its vocabulary.
pub fn check_score(
    protocol: &Protocol,
    item_id: &str,
    value: &ScoreValue,
) -> Result<(), EngineError> {
    if !protocol.contains_item(item_id) {
        return Err(EngineError::UnknownItem {
            protocol_id: protocol.id.clone(),
            item_id: item_id.to_string(),
        });
    }
    if !protocol.values.contains(value) {
        return Err(EngineError::InvalidScoreValue {
            protocol_id: protocol.id.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check every record of a score map against the protocol.
pub fn check_scores(protocol: &Protocol, scores: &ScoreMap) -> Result<(), EngineError> {
    for (item_id, record) in scores {
        if record.item_id != *item_id {
            return Err(EngineError::UnknownItem {
                protocol_id: protocol.id.clone(),
                item_id: record.item_id.clone(),
            });
        }
        check_score(protocol, item_id, &record.value)?;
    }
    Ok(())
}
