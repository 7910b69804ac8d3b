use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::score::ScoreMap;
use crate::models::summary::SummarySnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationStatus {
    /// Created, nothing scored yet.
    Draft,
    /// At least one item scored.
    InProgress,
    /// Finalized. Terminal.
    Completed,
}

impl EvaluationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

/// Input for starting a new evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewEvaluation {
    pub subject_id: Uuid,
    pub protocol_id: String,
    pub evaluator_id: String,
    pub evaluator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronological_age_months: Option<u32>,
}

/// A developmental evaluation of one subject against one protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub protocol_id: String,
    pub evaluator_id: String,
    pub evaluator_name: String,
    pub status: EvaluationStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<jiff::Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronological_age_months: Option<u32>,
    #[serde(default)]
    pub scores: ScoreMap,
    #[serde(flatten)]
    pub summary: SummarySnapshot,
}

impl Evaluation {
    /// Build a fresh draft evaluation with an empty score map.
    pub fn draft(input: NewEvaluation, now: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id: input.subject_id,
            protocol_id: input.protocol_id,
            evaluator_id: input.evaluator_id,
            evaluator_name: input.evaluator_name,
            status: EvaluationStatus::Draft,
            created_at: now,
            updated_at: now,
            completed_at: None,
            chronological_age_months: input.chronological_age_months,
            scores: ScoreMap::new(),
            summary: SummarySnapshot::default(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }
}
