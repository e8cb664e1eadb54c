//! Persisted integration configuration for external form submissions.
//!
//! Field names and defaults follow the backend's stored record; the
//! client only ever creates these via full submission and never mutates
//! a stored record in place.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Lifecycle status of an integration configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    Active,
    #[default]
    Inactive,
    Testing,
}

impl IntegrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationStatus::Active => "active",
            IntegrationStatus::Inactive => "inactive",
            IntegrationStatus::Testing => "testing",
        }
    }
}

impl fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntegrationStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(IntegrationStatus::Active),
            "inactive" => Ok(IntegrationStatus::Inactive),
            "testing" => Ok(IntegrationStatus::Testing),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// A predefined (mapping, required-set) bundle from the backend catalog.
///
/// Templates are immutable; applying one copies its contents into the
/// configurator rather than aliasing the catalog instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTemplate {
    /// Catalog key identifying this template.
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// External field name -> internal applicant field name.
    pub field_mapping: BTreeMap<String, String>,
    /// External field names that must be present in a submission.
    pub required_fields: BTreeSet<String>,
}

/// The full persistable integration record, serialized with the exact
/// wire keys the backend expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub auto_assign_to_job: Option<u64>,
    pub default_application_source: String,
    pub field_mapping: BTreeMap<String, String>,
    pub required_fields: BTreeSet<String>,
    pub resume_field_name: String,
    pub cover_letter_field_name: String,
    pub max_file_size_mb: u32,
    pub allowed_file_types: Vec<String>,
    pub auto_send_confirmation: bool,
    pub enable_duplicate_detection: bool,
    pub notification_emails: Vec<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    pub rate_limit_per_hour: u32,
    pub allowed_origins: Vec<String>,
    pub status: IntegrationStatus,
}
