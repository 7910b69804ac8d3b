//! Evaluation lifecycle: draft -> in_progress -> completed.
//!
//! The transition functions are pure: they take an evaluation value and
//! return the next one, leaving persistence to the caller.
//! [`EvaluationService`] wraps them around an [`EvaluationStore`] for
//! callers that address evaluations by id.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use sprout_core::models::evaluation::{Evaluation, EvaluationStatus, NewEvaluation};
use sprout_core::models::score::ScoreMap;
use sprout_protocols::{Protocol, ProtocolCatalog};

use crate::aggregate::compute_summaries;
use crate::error::{EngineError, TransitionFault};
use crate::events::{LifecycleAction, LifecycleEvent};
use crate::session::check_scores;

/// Computes a subject's age in whole months between two dates.
/// Supplied by the caller.
pub trait AgeCalculator {
    fn age_in_months(&self, birth_date: Date, on: Date) -> Result<u32, EngineError>;
}

/// Start a draft evaluation against a known protocol.
pub fn create(catalog: &ProtocolCatalog, input: NewEvaluation) -> Result<Evaluation, EngineError> {
    catalog.get_protocol(&input.protocol_id)?;
    Ok(Evaluation::draft(input, jiff::Timestamp::now()))
}

/// Replace the scores of a non-terminal evaluation and refresh its summary.
///
/// Re-saving identical scores yields an identical summary.
pub fn save_progress(
    protocol: &Protocol,
    evaluation: &Evaluation,
    scores: ScoreMap,
) -> Result<Evaluation, EngineError> {
    check_open(protocol, evaluation)?;
    check_scores(protocol, &scores)?;

    let summary = compute_summaries(protocol, &scores)?;
    let status = match evaluation.status {
        EvaluationStatus::Draft if scores.is_empty() => EvaluationStatus::Draft,
        _ => EvaluationStatus::InProgress,
    };

    Ok(Evaluation {
        status,
        updated_at: jiff::Timestamp::now(),
        scores,
        summary,
        ..evaluation.clone()
    })
}

/// Finalize an evaluation. The result is immutable: a completed evaluation
/// cannot be saved or completed again.
pub fn complete(
    protocol: &Protocol,
    evaluation: &Evaluation,
    final_scores: ScoreMap,
) -> Result<Evaluation, EngineError> {
    check_open(protocol, evaluation)?;
    if final_scores.is_empty() {
        return Err(EngineError::transition(evaluation.id, TransitionFault::NothingScored));
    }
    check_scores(protocol, &final_scores)?;

    let summary = compute_summaries(protocol, &final_scores)?;
    let now = jiff::Timestamp::now();
    Ok(Evaluation {
        status: EvaluationStatus::Completed,
        updated_at: now,
        completed_at: Some(now),
        scores: final_scores,
        summary,
        ..evaluation.clone()
    })
}

fn check_open(protocol: &Protocol, evaluation: &Evaluation) -> Result<(), EngineError> {
    if protocol.id != evaluation.protocol_id {
        return Err(EngineError::ProtocolMismatch {
            expected: evaluation.protocol_id.clone(),
            actual: protocol.id.clone(),
        });
    }
    if evaluation.is_completed() {
        return Err(EngineError::transition(evaluation.id, TransitionFault::AlreadyCompleted));
    }
    Ok(())
}

/// Where evaluations live between requests.
pub trait EvaluationStore {
    fn get(&self, id: Uuid) -> Result<Option<Evaluation>, EngineError>;
    fn put(&mut self, evaluation: Evaluation) -> Result<(), EngineError>;
    fn remove(&mut self, id: Uuid) -> Result<Option<Evaluation>, EngineError>;
    /// All evaluations of a subject, oldest first.
    fn list_for_subject(&self, subject_id: Uuid) -> Result<Vec<Evaluation>, EngineError>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    evaluations: BTreeMap<Uuid, Evaluation>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EvaluationStore for InMemoryStore {
    fn get(&self, id: Uuid) -> Result<Option<Evaluation>, EngineError> {
        Ok(self.evaluations.get(&id).cloned())
    }

    fn put(&mut self, evaluation: Evaluation) -> Result<(), EngineError> {
        self.evaluations.insert(evaluation.id, evaluation);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<Option<Evaluation>, EngineError> {
        Ok(self.evaluations.remove(&id))
    }

    fn list_for_subject(&self, subject_id: Uuid) -> Result<Vec<Evaluation>, EngineError> {
        let mut found: Vec<Evaluation> = self
            .evaluations
            .values()
            .filter(|e| e.subject_id == subject_id)
            .cloned()
            .collect();
        found.sort_by_key(|e| e.completed_at.unwrap_or(e.created_at));
        Ok(found)
    }
}

/// Id-addressed lifecycle operations over a catalog and a store.
pub struct EvaluationService<'c, S> {
    catalog: &'c ProtocolCatalog,
    store: S,
}

impl<'c, S: EvaluationStore> EvaluationService<'c, S> {
    pub fn new(catalog: &'c ProtocolCatalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create(&mut self, input: NewEvaluation) -> Result<Evaluation, EngineError> {
        let evaluation = create(self.catalog, input)?;
        self.store.put(evaluation.clone())?;
        LifecycleEvent::for_evaluation(LifecycleAction::Created, &evaluation)
            .with_details(json!({
                "chronological_age_months": evaluation.chronological_age_months,
            }))
            .emit();
        Ok(evaluation)
    }

    /// Create an evaluation, deriving the chronological age from a birth date.
    pub fn create_with_birth_date(
        &mut self,
        mut input: NewEvaluation,
        birth_date: Date,
        evaluated_on: Date,
        ages: &dyn AgeCalculator,
    ) -> Result<Evaluation, EngineError> {
        input.chronological_age_months = Some(ages.age_in_months(birth_date, evaluated_on)?);
        self.create(input)
    }

    pub fn get(&self, evaluation_id: Uuid) -> Result<Evaluation, EngineError> {
        self.store
            .get(evaluation_id)?
            .ok_or(EngineError::EvaluationNotFound(evaluation_id))
    }

    pub fn list_for_subject(&self, subject_id: Uuid) -> Result<Vec<Evaluation>, EngineError> {
        self.store.list_for_subject(subject_id)
    }

    pub fn save_progress(
        &mut self,
        evaluation_id: Uuid,
        scores: ScoreMap,
    ) -> Result<Evaluation, EngineError> {
        let current = self.load_existing(evaluation_id)?;
        let protocol = self.catalog.get_protocol(&current.protocol_id)?;
        let saved = save_progress(protocol, &current, scores).inspect_err(|e| {
            warn!(%evaluation_id, error = %e, "save rejected");
        })?;
        self.store.put(saved.clone())?;
        LifecycleEvent::for_evaluation(LifecycleAction::ProgressSaved, &saved)
            .with_details(json!({
                "scored": saved.scores.len(),
                "overall_percentage": saved.summary.overall_percentage,
            }))
            .emit();
        Ok(saved)
    }

    pub fn complete(
        &mut self,
        evaluation_id: Uuid,
        final_scores: ScoreMap,
    ) -> Result<Evaluation, EngineError> {
        let current = self.load_existing(evaluation_id)?;
        let protocol = self.catalog.get_protocol(&current.protocol_id)?;
        let completed = complete(protocol, &current, final_scores).inspect_err(|e| {
            warn!(%evaluation_id, error = %e, "completion rejected");
        })?;
        self.store.put(completed.clone())?;
        let summary = &completed.summary;
        LifecycleEvent::for_evaluation(LifecycleAction::Completed, &completed)
            .with_details(json!({
                "overall_percentage": summary.overall_percentage,
                "overall_developmental_age_months": summary.overall_developmental_age_months,
            }))
            .emit();
        Ok(completed)
    }

    /// Administrative removal. Allowed in any state.
    pub fn delete(&mut self, evaluation_id: Uuid) -> Result<Evaluation, EngineError> {
        let removed = self
            .store
            .remove(evaluation_id)?
            .ok_or(EngineError::EvaluationNotFound(evaluation_id))?;
        LifecycleEvent::for_evaluation(LifecycleAction::Deleted, &removed)
            .with_details(json!({ "status": removed.status.as_str() }))
            .emit();
        info!(%evaluation_id, "evaluation deleted");
        Ok(removed)
    }

    fn load_existing(&self, evaluation_id: Uuid) -> Result<Evaluation, EngineError> {
        self.store
            .get(evaluation_id)?
            .ok_or_else(|| EngineError::transition(evaluation_id, TransitionFault::NotCreated))
    }
}
