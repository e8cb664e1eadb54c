//! Error types for role console operations.

use thiserror::Error;

use hris_model::{Role, UserId};

/// Errors from coordinator operations.
///
/// All variants are recoverable: the operation is rejected and the row is
/// left in its previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// No row is loaded for this user.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
    /// The selected role is not in the row's candidate set.
    #[error("role '{role}' is not offered for user {user_id}")]
    RoleNotOffered { user_id: UserId, role: Role },
    /// The row already has a submission in flight.
    #[error("a role change for user {0} is already in flight")]
    ConcurrentEdit(UserId),
    /// The operation needs a pending selection and there is none.
    #[error("no role change is pending for user {0}")]
    NotPending(UserId),
}

pub type Result<T> = std::result::Result<T, RoleError>;
