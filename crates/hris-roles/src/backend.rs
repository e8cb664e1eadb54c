//! Backend seam for role changes.

use hris_model::{RoleChangeRequest, RoleChangeResponse, TransportError};

/// The REST collaborator role changes are submitted through.
///
/// A transport-level `Err` and a decoded `{success: false}` response are
/// both failure outcomes for the coordinator; the distinction only
/// affects which message reaches the operator.
pub trait RoleChangeBackend {
    fn change_role(
        &self,
        request: &RoleChangeRequest,
    ) -> Result<RoleChangeResponse, TransportError>;
}
