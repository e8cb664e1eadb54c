//! Per-row edit state machine.
//!
//! Each console row moves through `Idle -> PendingConfirmation ->
//! Submitting` and back to `Idle` on resolution. Holding the pending role
//! inside the state variant makes the "at most one in-flight submission
//! per row" rule a structural property rather than a flag to police.

use hris_model::{Role, RoleChangeRequest, UserId, UserRoleRecord};

use crate::error::{Result, RoleError};

/// Edit state of one console row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Displayed role equals the last confirmed `current_role`.
    Idle,
    /// A different role is selected but not yet submitted.
    PendingConfirmation { pending: Role },
    /// Exactly one role-change request is in flight.
    Submitting { pending: Role },
}

/// One console row: the backend record plus its local edit state.
#[derive(Debug, Clone)]
pub struct UserRow {
    record: UserRoleRecord,
    state: RowState,
}

impl UserRow {
    pub fn new(record: UserRoleRecord) -> Self {
        Self {
            record,
            state: RowState::Idle,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.record.user_id
    }

    pub fn record(&self) -> &UserRoleRecord {
        &self.record
    }

    /// Last confirmed role; authoritative only as of the last resolution.
    pub fn current_role(&self) -> Role {
        self.record.current_role
    }

    /// What the console shows: the optimistic pending role when one is
    /// held, otherwise the confirmed role.
    pub fn displayed_role(&self) -> Role {
        match self.state {
            RowState::Idle => self.record.current_role,
            RowState::PendingConfirmation { pending } | RowState::Submitting { pending } => pending,
        }
    }

    pub fn pending_role(&self) -> Option<Role> {
        match self.state {
            RowState::Idle => None,
            RowState::PendingConfirmation { pending } | RowState::Submitting { pending } => {
                Some(pending)
            }
        }
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, RowState::Submitting { .. })
    }

    /// Select a candidate role. Selecting the confirmed role clears any
    /// pending selection and stays `Idle`; anything else moves to
    /// `PendingConfirmation`. Returns whether a change is now pending.
    pub fn select(&mut self, new_role: Role) -> Result<bool> {
        if self.is_submitting() {
            return Err(RoleError::ConcurrentEdit(self.user_id()));
        }
        if !self.record.candidate_roles.contains(&new_role) {
            return Err(RoleError::RoleNotOffered {
                user_id: self.user_id(),
                role: new_role,
            });
        }
        if new_role == self.record.current_role {
            self.state = RowState::Idle;
            return Ok(false);
        }
        self.state = RowState::PendingConfirmation { pending: new_role };
        Ok(true)
    }

    /// Whether this pending change needs explicit operator confirmation:
    /// true when either side of the transition is the admin tier.
    pub fn needs_confirmation(&self) -> Result<bool> {
        match self.state {
            RowState::PendingConfirmation { pending } => {
                Ok(self.record.current_role.is_admin_tier() || pending.is_admin_tier())
            }
            RowState::Submitting { .. } => Err(RoleError::ConcurrentEdit(self.user_id())),
            RowState::Idle => Err(RoleError::NotPending(self.user_id())),
        }
    }

    /// Abandon the pending selection, resetting the display to the
    /// confirmed role. No request is issued.
    pub fn decline(&mut self) -> Result<Role> {
        match self.state {
            RowState::PendingConfirmation { .. } => {
                self.state = RowState::Idle;
                Ok(self.record.current_role)
            }
            RowState::Submitting { .. } => Err(RoleError::ConcurrentEdit(self.user_id())),
            RowState::Idle => Err(RoleError::NotPending(self.user_id())),
        }
    }

    /// Move to `Submitting` and hand back the single request to issue.
    /// The row rejects further edits until the request resolves.
    pub fn begin_submit(&mut self) -> Result<RoleChangeRequest> {
        match self.state {
            RowState::PendingConfirmation { pending } => {
                self.state = RowState::Submitting { pending };
                Ok(RoleChangeRequest {
                    user_id: self.user_id(),
                    new_role: pending,
                })
            }
            RowState::Submitting { .. } => Err(RoleError::ConcurrentEdit(self.user_id())),
            RowState::Idle => Err(RoleError::NotPending(self.user_id())),
        }
    }

    /// Commit the in-flight change: the pending role becomes the
    /// confirmed role and the row returns to `Idle`.
    pub fn resolve_success(&mut self) -> Result<Role> {
        match self.state {
            RowState::Submitting { pending } => {
                self.record.current_role = pending;
                self.state = RowState::Idle;
                Ok(pending)
            }
            _ => Err(RoleError::NotPending(self.user_id())),
        }
    }

    /// Roll back the in-flight change: the pending role is discarded and
    /// the display reverts to the confirmed role.
    pub fn resolve_failure(&mut self) -> Result<Role> {
        match self.state {
            RowState::Submitting { .. } => {
                self.state = RowState::Idle;
                Ok(self.record.current_role)
            }
            _ => Err(RoleError::NotPending(self.user_id())),
        }
    }
}
