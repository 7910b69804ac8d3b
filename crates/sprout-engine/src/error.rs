use thiserror::Error;
use uuid::Uuid;

use sprout_protocols::ProtocolError;

/// Why a lifecycle transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionFault {
    #[error("evaluation has not been created")]
    NotCreated,

    #[error("evaluation is already completed")]
    AlreadyCompleted,

    #[error("no items have been scored")]
    NothingScored,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("protocol not found: {0}")]
    ProtocolNotFound(String),

    #[error("unknown item '{item_id}' for protocol '{protocol_id}'")]
    UnknownItem {
        protocol_id: String,
        item_id: String,
    },

    #[error("score value '{value}' is not defined by protocol '{protocol_id}'")]
    InvalidScoreValue { protocol_id: String, value: String },

    #[error("bound to protocol '{expected}' but got '{actual}'")]
    ProtocolMismatch { expected: String, actual: String },

    #[error("invalid transition for evaluation {evaluation_id}: {reason}")]
    InvalidTransition {
        evaluation_id: Uuid,
        reason: TransitionFault,
    },

    #[error("domain '{domain_id}' of protocol '{protocol_id}' has no items")]
    EmptyProtocolDomain {
        protocol_id: String,
        domain_id: String,
    },

    #[error("trend analysis needs at least 2 completed evaluations, got {available}")]
    InsufficientHistory { available: usize },

    #[error("evaluation not found: {0}")]
    EvaluationNotFound(Uuid),

    #[error("chronological age error: {0}")]
    AgeCalculation(String),

    #[error("catalog error: {0}")]
    Catalog(#[source] ProtocolError),

    #[error("store error: {0}")]
    Store(String),
}

impl EngineError {
    pub(crate) fn transition(evaluation_id: Uuid, reason: TransitionFault) -> Self {
        Self::InvalidTransition {
            evaluation_id,
            reason,
        }
    }

    /// The refused transition, if this is an `InvalidTransition`.
    pub fn transition_fault(&self) -> Option<TransitionFault> {
        match self {
            Self::InvalidTransition { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl From<ProtocolError> for EngineError {
    fn from(e: ProtocolError) -> Self {
        match e {
            ProtocolError::ProtocolNotFound(id) => EngineError::ProtocolNotFound(id),
            other => EngineError::Catalog(other),
        }
    }
}
