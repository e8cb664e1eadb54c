//! Trait wiring: the HTTP client as the backend seam of both components.

use hris_map::WizardBackend;
use hris_model::{
    IntegrationConfig, IntegrationCreated, MappingTemplate, RoleChangeRequest,
    RoleChangeResponse, TransportError, WizardBootstrap,
};
use hris_roles::RoleChangeBackend;

use crate::client::AdminApiClient;
use crate::error::ClientError;

fn transport(error: ClientError) -> TransportError {
    // The operator sees this text; Api errors already carry the backend's
    // own message.
    match error {
        ClientError::Api { message, .. } => TransportError::new(message),
        other => TransportError::new(other.to_string()),
    }
}

impl WizardBackend for AdminApiClient {
    fn fetch_bootstrap(&self) -> Result<WizardBootstrap, TransportError> {
        self.fetch_bootstrap().map_err(transport)
    }

    fn fetch_templates(&self) -> Result<Vec<MappingTemplate>, TransportError> {
        self.fetch_templates().map_err(transport)
    }

    fn create_integration_config(
        &self,
        config: &IntegrationConfig,
    ) -> Result<IntegrationCreated, TransportError> {
        self.create_integration_config(config).map_err(transport)
    }
}

impl RoleChangeBackend for AdminApiClient {
    fn change_role(
        &self,
        request: &RoleChangeRequest,
    ) -> Result<RoleChangeResponse, TransportError> {
        self.change_role(request).map_err(transport)
    }
}
