//! Mapping configurator state for one wizard session.
//!
//! Owns the (field mapping, required set) pair for a single integration
//! configuration and keeps the structural invariant that every required
//! field is a current mapping key. Edits are synchronous and
//! last-write-wins; one operator session owns one configurator.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, warn};

use hris_model::{
    IntegrationConfig, JobPostingSummary, MappingTemplate, WizardBootstrap,
};

use crate::backend::WizardBackend;
use crate::error::{ConfigError, Result};
use crate::policy::{FilePolicy, IdentityFields, NotificationPolicy};

/// A validation finding that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The mapping is empty; at least one entry is needed.
    NoMappings,
    /// A required field no longer has a mapping entry.
    DanglingRequired(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoMappings => write!(f, "no field mappings defined"),
            Violation::DanglingRequired(name) => {
                write!(f, "required field '{name}' has no mapping entry")
            }
        }
    }
}

/// In-memory state of the field-mapping wizard.
#[derive(Debug, Clone, Default)]
pub struct MappingConfigurator {
    /// External field name -> internal applicant field name.
    mapping: BTreeMap<String, String>,
    /// External field names that must be present in a submission.
    /// Invariant: subset of `mapping` keys.
    required: BTreeSet<String>,
    /// Template catalog loaded from the backend.
    templates: Vec<MappingTemplate>,
    /// Job postings offered for auto-assignment.
    job_postings: Vec<JobPostingSummary>,
    /// CORS origins for the generated endpoint.
    allowed_origins: Vec<String>,
}

impl MappingConfigurator {
    /// An empty configurator with no defaults loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load session defaults and the template catalog from the backend.
    ///
    /// On any fetch or parse failure the configurator is reset to the
    /// empty-but-valid state before the error is returned; a partially
    /// populated session is never observable.
    pub fn load_defaults(&mut self, backend: &dyn WizardBackend) -> Result<()> {
        match self.try_load(backend) {
            Ok(()) => {
                debug!(
                    mappings = self.mapping.len(),
                    required = self.required.len(),
                    templates = self.templates.len(),
                    "wizard defaults loaded"
                );
                Ok(())
            }
            Err(error) => {
                warn!(%error, "wizard defaults unavailable, starting empty");
                *self = Self::new();
                Err(error)
            }
        }
    }

    fn try_load(&mut self, backend: &dyn WizardBackend) -> Result<()> {
        let bootstrap = backend
            .fetch_bootstrap()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        let templates = backend
            .fetch_templates()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        self.seed(bootstrap)?;
        self.templates = templates;
        Ok(())
    }

    /// Initialize mapping state from bootstrap defaults, checking that
    /// the advertised required fields are all mapped.
    fn seed(&mut self, bootstrap: WizardBootstrap) -> Result<()> {
        for field in &bootstrap.default_required_fields {
            if !bootstrap.default_field_mapping.contains_key(field) {
                return Err(ConfigError::Load(format!(
                    "default required field '{field}' is not in the default mapping"
                )));
            }
        }
        self.mapping = bootstrap.default_field_mapping;
        self.required = bootstrap.default_required_fields.into_iter().collect();
        self.job_postings = bootstrap.job_postings;
        self.allowed_origins = bootstrap.default_allowed_origins;
        Ok(())
    }

    /// Current mapping, external name -> internal name.
    pub fn mapping(&self) -> &BTreeMap<String, String> {
        &self.mapping
    }

    /// Current required external field names.
    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Loaded template catalog, ordered by template key.
    pub fn templates(&self) -> &[MappingTemplate] {
        &self.templates
    }

    /// Look up a template by its catalog key.
    pub fn template(&self, id: &str) -> Option<&MappingTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Job postings offered for auto-assignment.
    pub fn job_postings(&self) -> &[JobPostingSummary] {
        &self.job_postings
    }

    /// Allowed CORS origins for the generated endpoint.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Replace the allowed origins wholesale.
    pub fn set_allowed_origins(&mut self, origins: Vec<String>) {
        self.allowed_origins = origins;
    }

    /// Replace mapping and required set wholesale with the template's
    /// contents. The template is copied, never aliased; applying the same
    /// template twice is idempotent.
    pub fn apply_template(&mut self, template: &MappingTemplate) {
        debug!(template = %template.id, "applying mapping template");
        self.mapping = template.field_mapping.clone();
        self.required = template.required_fields.clone();
    }

    /// Insert or overwrite one mapping entry.
    ///
    /// Names are trimmed before storage; empty or whitespace-only names
    /// are rejected and state is left unchanged.
    pub fn set_mapping(&mut self, external: &str, internal: &str) -> Result<()> {
        let external = external.trim();
        let internal = internal.trim();
        if external.is_empty() || internal.is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        self.mapping
            .insert(external.to_string(), internal.to_string());
        Ok(())
    }

    /// Remove one mapping entry, dropping the key from the required set
    /// as invariant maintenance. Returns whether an entry was removed;
    /// an absent key is a no-op, not an error.
    pub fn remove_mapping(&mut self, external: &str) -> bool {
        let removed = self.mapping.remove(external).is_some();
        if removed {
            self.required.remove(external);
        }
        removed
    }

    /// Mark a mapped field as required, or clear the requirement.
    ///
    /// Requiring an unmapped field is rejected; un-requiring is always
    /// permitted.
    pub fn set_required(&mut self, external: &str, is_required: bool) -> Result<()> {
        if is_required {
            if !self.mapping.contains_key(external) {
                return Err(ConfigError::RequireUnmapped(external.to_string()));
            }
            self.required.insert(external.to_string());
        } else {
            self.required.remove(external);
        }
        Ok(())
    }

    /// Findings that would block submission, in a stable order.
    pub fn validate_for_submission(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.mapping.is_empty() {
            violations.push(Violation::NoMappings);
        }
        for field in &self.required {
            if !self.mapping.contains_key(field) {
                violations.push(Violation::DanglingRequired(field.clone()));
            }
        }
        violations
    }

    /// True when `validate_for_submission` finds nothing.
    pub fn is_ready_for_submission(&self) -> bool {
        self.validate_for_submission().is_empty()
    }

    /// Assemble the persistable record from the current mapping state and
    /// the given policy sections. Pure with respect to the configurator:
    /// callable repeatedly for the review summary.
    pub fn to_integration_config(
        &self,
        identity: &IdentityFields,
        files: &FilePolicy,
        notifications: &NotificationPolicy,
    ) -> IntegrationConfig {
        IntegrationConfig {
            name: identity.name.clone(),
            description: identity.description.clone(),
            auto_assign_to_job: identity.auto_assign_to_job,
            default_application_source: identity.default_application_source.clone(),
            field_mapping: self.mapping.clone(),
            required_fields: self.required.clone(),
            resume_field_name: files.resume_field_name.clone(),
            cover_letter_field_name: files.cover_letter_field_name.clone(),
            max_file_size_mb: files.max_file_size_mb,
            allowed_file_types: files.allowed_file_types.clone(),
            auto_send_confirmation: notifications.auto_send_confirmation,
            enable_duplicate_detection: notifications.enable_duplicate_detection,
            notification_emails: notifications.notification_emails.clone(),
            webhook_url: notifications.webhook_url.clone(),
            rate_limit_per_hour: notifications.rate_limit_per_hour,
            allowed_origins: self.allowed_origins.clone(),
            status: identity.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mapping_trims_names() {
        let mut configurator = MappingConfigurator::new();
        configurator.set_mapping(" txtEmail ", " email ").unwrap();
        assert_eq!(
            configurator.mapping().get("txtEmail").map(String::as_str),
            Some("email")
        );
    }

    #[test]
    fn whitespace_only_names_are_rejected() {
        let mut configurator = MappingConfigurator::new();
        assert_eq!(
            configurator.set_mapping("   ", "email"),
            Err(ConfigError::EmptyFieldName)
        );
        assert_eq!(
            configurator.set_mapping("txtEmail", ""),
            Err(ConfigError::EmptyFieldName)
        );
        assert!(configurator.mapping().is_empty());
    }
}
