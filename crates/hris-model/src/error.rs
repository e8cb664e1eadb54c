use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown integration status: {0}")]
    UnknownStatus(String),
}

/// Failure reported by a backend transport, carrying the message the
/// operator should see verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
