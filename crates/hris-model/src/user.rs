use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Backend primary key for a user account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the role console, as loaded from the backend.
///
/// `current_role` is authoritative only as last confirmed by the backend;
/// any optimistic edit lives in the coordinator, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleRecord {
    pub user_id: UserId,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    pub current_role: Role,
    /// Roles the operator may select for this user, in display order.
    pub candidate_roles: Vec<Role>,
}

impl UserRoleRecord {
    /// Build a record offering the full backend role set.
    pub fn with_all_roles(
        user_id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
        current_role: Role,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            display_name: display_name.into(),
            current_role,
            candidate_roles: Role::ALL.to_vec(),
        }
    }
}
