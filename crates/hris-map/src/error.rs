//! Error types for the mapping configurator.

use thiserror::Error;

/// Errors from configurator operations.
///
/// Every variant is recoverable: `Load` leaves the configurator in an
/// empty-but-valid state, the validation variants reject the operation
/// and leave state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Bootstrap or template catalog fetch failed or was malformed.
    #[error("failed to load wizard defaults: {0}")]
    Load(String),
    /// A field name was empty or whitespace-only.
    #[error("field names must not be empty")]
    EmptyFieldName,
    /// Attempted to require a field that has no mapping entry.
    #[error("cannot require unmapped field: {0}")]
    RequireUnmapped(String),
}

impl ConfigError {
    /// True for local precondition violations (rejected edits), false for
    /// load failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ConfigError::Load(_))
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
