use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use sprout_core::models::evaluation::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleAction {
    Created,
    ProgressSaved,
    Completed,
    Deleted,
}

impl LifecycleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::ProgressSaved => "progress_saved",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }
}

/// A structured record of an evaluation lifecycle transition.
///
/// Logged via `tracing` so that the hosting service's log pipeline keeps a
/// trail of who changed which clinical record and when.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleEvent {
    pub action: LifecycleAction,
    pub evaluation_id: Uuid,
    pub subject_id: Uuid,
    pub protocol_id: String,
    pub evaluator_id: String,
    pub details: Option<serde_json::Value>,
}

impl LifecycleEvent {
    pub fn for_evaluation(action: LifecycleAction, evaluation: &Evaluation) -> Self {
        Self {
            action,
            evaluation_id: evaluation.id,
            subject_id: evaluation.subject_id,
            protocol_id: evaluation.protocol_id.clone(),
            evaluator_id: evaluation.evaluator_id.clone(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            lifecycle.action = self.action.as_str(),
            lifecycle.evaluation_id = %self.evaluation_id,
            lifecycle.subject_id = %self.subject_id,
            lifecycle.protocol_id = %self.protocol_id,
            lifecycle.evaluator_id = %self.evaluator_id,
            lifecycle.details = %details,
            "evaluation lifecycle event"
        );
    }
}
