//! Backend seam for the wizard.

use hris_model::{IntegrationConfig, IntegrationCreated, MappingTemplate, TransportError, WizardBootstrap};

/// The REST collaborator the wizard talks to.
///
/// Implemented over HTTP by `hris-client`; tests provide scripted
/// implementations.
pub trait WizardBackend {
    /// Fetch session defaults (mapping, required fields, job postings).
    fn fetch_bootstrap(&self) -> Result<WizardBootstrap, TransportError>;

    /// Fetch the template catalog, ordered by template key.
    fn fetch_templates(&self) -> Result<Vec<MappingTemplate>, TransportError>;

    /// Persist a finished integration configuration.
    fn create_integration_config(
        &self,
        config: &IntegrationConfig,
    ) -> Result<IntegrationCreated, TransportError>;
}
