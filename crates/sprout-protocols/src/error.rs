use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("protocol not found: {0}")]
    ProtocolNotFound(String),

    #[error("domain '{domain_id}' not found in protocol '{protocol_id}'")]
    DomainNotFound {
        protocol_id: String,
        domain_id: String,
    },

    #[error("invalid value domain '{domain_id}': {reason}")]
    InvalidValueDomain { domain_id: String, reason: String },

    #[error("duplicate protocol id: {0}")]
    DuplicateProtocol(String),

    #[error("duplicate domain '{domain_id}' in protocol '{protocol_id}'")]
    DuplicateDomain {
        protocol_id: String,
        domain_id: String,
    },

    #[error("duplicate item '{item_id}' in protocol '{protocol_id}'")]
    DuplicateItem {
        protocol_id: String,
        item_id: String,
    },

    #[error("sequence '{sequence_id}' is not ordered at item '{item_id}'")]
    UnsortedSequence {
        sequence_id: String,
        item_id: String,
    },

    #[error("protocol '{protocol_id}' has ceiling threshold 0")]
    ZeroCeilingThreshold { protocol_id: String },

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
