//! Role console coordinator.
//!
//! Supervises the per-row state machines for one console view. Rows are
//! independent: a submission in flight on one row never blocks edits on
//! another, and requests for a single row are strictly sequential.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use hris_model::{Role, RoleChangeRequest, UserId, UserRoleRecord};

use crate::backend::RoleChangeBackend;
use crate::error::{Result, RoleError};
use crate::machine::{RowState, UserRow};
use crate::notify::Notification;

/// Message shown when the backend rejects a change without saying why.
const GENERIC_FAILURE: &str = "Role change failed. Please try again.";

/// Drives the edit/confirm/submit cycle for a set of user rows.
#[derive(Debug, Default)]
pub struct RoleUpdateCoordinator {
    rows: BTreeMap<UserId, UserRow>,
}

impl RoleUpdateCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the console from backend records; every row starts `Idle`.
    /// Replaces any previously loaded rows.
    pub fn load(&mut self, records: Vec<UserRoleRecord>) {
        self.rows = records
            .into_iter()
            .map(|record| (record.user_id, UserRow::new(record)))
            .collect();
        debug!(rows = self.rows.len(), "role console loaded");
    }

    /// All rows in user-id order.
    pub fn rows(&self) -> impl Iterator<Item = &UserRow> {
        self.rows.values()
    }

    pub fn row(&self, user_id: UserId) -> Result<&UserRow> {
        self.rows
            .get(&user_id)
            .ok_or(RoleError::UnknownUser(user_id))
    }

    fn row_mut(&mut self, user_id: UserId) -> Result<&mut UserRow> {
        self.rows
            .get_mut(&user_id)
            .ok_or(RoleError::UnknownUser(user_id))
    }

    /// Select a candidate role for a row. Returns whether a change is now
    /// pending; selecting the confirmed role is a no-op.
    pub fn select_role(&mut self, user_id: UserId, new_role: Role) -> Result<bool> {
        self.row_mut(user_id)?.select(new_role)
    }

    /// Whether the pending change on this row needs explicit operator
    /// confirmation (either side of the transition is admin tier).
    pub fn needs_confirmation(&self, user_id: UserId) -> Result<bool> {
        self.row(user_id)?.needs_confirmation()
    }

    /// Human-readable confirmation prompt for the pending change, or
    /// `None` when no confirmation is needed.
    pub fn confirmation_prompt(&self, user_id: UserId) -> Result<Option<String>> {
        let row = self.row(user_id)?;
        if !row.needs_confirmation()? {
            return Ok(None);
        }
        let pending = row
            .pending_role()
            .ok_or(RoleError::NotPending(user_id))?;
        Ok(Some(format!(
            "Change role for {} from {} to {}? This change involves the {} role.",
            row.record().email,
            row.current_role().label(),
            pending.label(),
            Role::Admin.label(),
        )))
    }

    /// Abandon the pending selection on a row without issuing a request.
    pub fn decline(&mut self, user_id: UserId) -> Result<()> {
        let restored = self.row_mut(user_id)?.decline()?;
        debug!(%user_id, role = %restored, "role change declined, display reset");
        Ok(())
    }

    /// Move a row to `Submitting` and hand back the single request to
    /// issue. Fails with `ConcurrentEdit` while a request is in flight.
    pub fn begin_submit(&mut self, user_id: UserId) -> Result<RoleChangeRequest> {
        let request = self.row_mut(user_id)?.begin_submit()?;
        info!(%user_id, new_role = %request.new_role, "role change submitted");
        Ok(request)
    }

    /// Commit the in-flight change on a row.
    pub fn resolve_success(&mut self, user_id: UserId) -> Result<Notification> {
        let committed = self.row_mut(user_id)?.resolve_success()?;
        info!(%user_id, role = %committed, "role change confirmed");
        Ok(Notification::success(format!(
            "Role updated to {}.",
            committed.label()
        )))
    }

    /// Roll back the in-flight change on a row, surfacing the backend's
    /// message verbatim when one was given.
    pub fn resolve_failure(
        &mut self,
        user_id: UserId,
        message: Option<&str>,
    ) -> Result<Notification> {
        let restored = self.row_mut(user_id)?.resolve_failure()?;
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_FAILURE);
        warn!(%user_id, role = %restored, %message, "role change rolled back");
        Ok(Notification::error(message))
    }

    /// Drive one confirmed change end to end: begin, issue exactly one
    /// request, resolve. Transport errors and backend-reported rejections
    /// both roll the row back; the outcome notification carries the
    /// message either way.
    pub fn submit_confirmed(
        &mut self,
        user_id: UserId,
        backend: &dyn RoleChangeBackend,
    ) -> Result<Notification> {
        let request = self.begin_submit(user_id)?;
        match backend.change_role(&request) {
            Ok(response) if response.success => {
                let mut notification = self.resolve_success(user_id)?;
                if let Some(message) = response.message {
                    notification.message = message;
                }
                Ok(notification)
            }
            Ok(response) => {
                let message = response.error.or(response.message);
                self.resolve_failure(user_id, message.as_deref())
            }
            Err(error) => self.resolve_failure(user_id, Some(&error.to_string())),
        }
    }

    /// Count of rows currently submitting; used by views to gate bulk
    /// actions.
    pub fn in_flight(&self) -> usize {
        self.rows
            .values()
            .filter(|row| matches!(row.state(), RowState::Submitting { .. }))
            .count()
    }
}
