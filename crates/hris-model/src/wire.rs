//! Request and response payloads for the admin REST endpoints.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::integration::MappingTemplate;
use crate::role::Role;
use crate::user::UserId;

/// `GET wizard-bootstrap` response: defaults for a fresh wizard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardBootstrap {
    #[serde(default)]
    pub job_postings: Vec<JobPostingSummary>,
    pub default_field_mapping: BTreeMap<String, String>,
    pub default_required_fields: Vec<String>,
    #[serde(default)]
    pub default_allowed_origins: Vec<String>,
}

/// A job posting offered for automatic assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPostingSummary {
    pub id: u64,
    pub title: String,
}

/// One entry of the `GET field-mapping-templates` response. The catalog
/// is keyed by template id; the entry itself carries no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub field_mapping: BTreeMap<String, String>,
    pub required_fields: BTreeSet<String>,
}

impl TemplateEntry {
    /// Attach the catalog key to produce the model-level template.
    pub fn into_template(self, id: impl Into<String>) -> MappingTemplate {
        MappingTemplate {
            id: id.into(),
            display_name: self.name,
            description: self.description,
            field_mapping: self.field_mapping,
            required_fields: self.required_fields,
        }
    }
}

/// Flatten a template catalog response into templates ordered by key.
pub fn catalog_into_templates(
    catalog: BTreeMap<String, TemplateEntry>,
) -> Vec<MappingTemplate> {
    catalog
        .into_iter()
        .map(|(key, entry)| entry.into_template(key))
        .collect()
}

/// `POST role-change` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleChangeRequest {
    pub user_id: UserId,
    pub new_role: Role,
}

/// `POST role-change` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChangeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST integration-configs` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationCreated {
    #[serde(default)]
    pub id: Option<u64>,
    pub api_key: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl IntegrationCreated {
    /// The generated submission endpoint the operator hands to the
    /// external form-building service.
    pub fn endpoint_url(&self, origin: &str) -> String {
        format!(
            "{}/api/recruitment/powerapps/{}/",
            origin.trim_end_matches('/'),
            self.api_key
        )
    }
}
