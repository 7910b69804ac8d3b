use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid evaluation status: {0}")]
    InvalidStatus(String),
}
