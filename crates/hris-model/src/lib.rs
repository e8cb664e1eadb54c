pub mod error;
pub mod integration;
pub mod role;
pub mod user;
pub mod wire;

pub use error::{ModelError, Result, TransportError};
pub use integration::{IntegrationConfig, IntegrationStatus, MappingTemplate};
pub use role::Role;
pub use user::{UserId, UserRoleRecord};
pub use wire::{
    IntegrationCreated, JobPostingSummary, RoleChangeRequest, RoleChangeResponse, TemplateEntry,
    WizardBootstrap, catalog_into_templates,
};
