//! Identity, file-upload, and notification sections of the wizard.
//!
//! These carry the non-mapping fields of the integration record. Defaults
//! match the backend's stored-record defaults so an operator can submit a
//! minimal wizard run without touching them.

use serde::{Deserialize, Serialize};

use hris_model::IntegrationStatus;

/// Step-one identity fields of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityFields {
    pub name: String,
    pub description: String,
    /// Job posting to auto-assign incoming applications to.
    pub auto_assign_to_job: Option<u64>,
    pub default_application_source: String,
    pub status: IntegrationStatus,
}

impl IdentityFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            auto_assign_to_job: None,
            default_application_source: "PowerApps Form".to_string(),
            status: IntegrationStatus::default(),
        }
    }
}

/// File-upload handling policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePolicy {
    pub resume_field_name: String,
    pub cover_letter_field_name: String,
    pub max_file_size_mb: u32,
    pub allowed_file_types: Vec<String>,
}

impl Default for FilePolicy {
    fn default() -> Self {
        Self {
            resume_field_name: "resume_file".to_string(),
            cover_letter_field_name: "cover_letter_file".to_string(),
            max_file_size_mb: 10,
            allowed_file_types: vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()],
        }
    }
}

/// Confirmation, duplicate-detection, and notification policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPolicy {
    pub auto_send_confirmation: bool,
    pub enable_duplicate_detection: bool,
    pub notification_emails: Vec<String>,
    pub webhook_url: Option<String>,
    pub rate_limit_per_hour: u32,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            auto_send_confirmation: true,
            enable_duplicate_detection: true,
            notification_emails: Vec::new(),
            webhook_url: None,
            rate_limit_per_hour: 100,
        }
    }
}
