use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use hris_map::{
    ConfigError, FilePolicy, IdentityFields, MappingConfigurator, NotificationPolicy, Violation,
    WizardBackend,
};
use hris_model::{
    IntegrationConfig, IntegrationCreated, MappingTemplate, TransportError, WizardBootstrap,
};

/// Scripted backend for configurator tests.
struct StubBackend {
    bootstrap: Result<WizardBootstrap, TransportError>,
    templates: Result<Vec<MappingTemplate>, TransportError>,
}

impl StubBackend {
    fn healthy() -> Self {
        let mut mapping = BTreeMap::new();
        mapping.insert("a".to_string(), "b".to_string());
        Self {
            bootstrap: Ok(WizardBootstrap {
                job_postings: Vec::new(),
                default_field_mapping: mapping,
                default_required_fields: vec!["a".to_string()],
                default_allowed_origins: vec!["https://apps.powerapps.com".to_string()],
            }),
            templates: Ok(vec![sample_template()]),
        }
    }

    fn unreachable() -> Self {
        Self {
            bootstrap: Err(TransportError::new("connection refused")),
            templates: Err(TransportError::new("connection refused")),
        }
    }
}

impl WizardBackend for StubBackend {
    fn fetch_bootstrap(&self) -> Result<WizardBootstrap, TransportError> {
        self.bootstrap.clone()
    }

    fn fetch_templates(&self) -> Result<Vec<MappingTemplate>, TransportError> {
        self.templates.clone()
    }

    fn create_integration_config(
        &self,
        _config: &IntegrationConfig,
    ) -> Result<IntegrationCreated, TransportError> {
        Err(TransportError::new("not used by these tests"))
    }
}

fn sample_template() -> MappingTemplate {
    let mut mapping = BTreeMap::new();
    mapping.insert("txtFirstName".to_string(), "first_name".to_string());
    mapping.insert("txtLastName".to_string(), "last_name".to_string());
    mapping.insert("txtEmail".to_string(), "email".to_string());

    let mut required = BTreeSet::new();
    required.insert("txtEmail".to_string());

    MappingTemplate {
        id: "standard_application".to_string(),
        display_name: "Standard Application".to_string(),
        description: "Basic applicant fields".to_string(),
        field_mapping: mapping,
        required_fields: required,
    }
}

#[test]
fn load_defaults_seeds_mapping_and_required() {
    let mut configurator = MappingConfigurator::new();
    configurator
        .load_defaults(&StubBackend::healthy())
        .expect("load defaults");

    assert_eq!(configurator.mapping().len(), 1);
    assert!(configurator.required().contains("a"));
    assert_eq!(configurator.templates().len(), 1);
    assert_eq!(configurator.allowed_origins().len(), 1);
}

#[test]
fn load_failure_leaves_empty_valid_state() {
    let mut configurator = MappingConfigurator::new();
    let error = configurator
        .load_defaults(&StubBackend::unreachable())
        .expect_err("load should fail");

    assert!(matches!(error, ConfigError::Load(_)));
    assert!(!error.is_validation());
    assert!(configurator.mapping().is_empty());
    assert!(configurator.required().is_empty());
    assert!(configurator.templates().is_empty());
}

#[test]
fn malformed_defaults_are_a_load_error() {
    // Required field not present in the default mapping.
    let mut backend = StubBackend::healthy();
    if let Ok(bootstrap) = backend.bootstrap.as_mut() {
        bootstrap.default_required_fields.push("missing".to_string());
    }

    let mut configurator = MappingConfigurator::new();
    let error = configurator
        .load_defaults(&backend)
        .expect_err("load should fail");
    assert!(matches!(error, ConfigError::Load(_)));
    assert!(configurator.mapping().is_empty());
}

#[test]
fn apply_template_replaces_wholesale_and_is_idempotent() {
    let mut configurator = MappingConfigurator::new();
    configurator
        .load_defaults(&StubBackend::healthy())
        .expect("load defaults");

    let template = sample_template();
    configurator.apply_template(&template);
    let mapping_once = configurator.mapping().clone();
    let required_once = configurator.required().clone();

    // The bootstrap defaults must be gone, not merged.
    assert!(!mapping_once.contains_key("a"));
    assert_eq!(mapping_once, template.field_mapping);
    assert_eq!(required_once, template.required_fields);

    configurator.apply_template(&template);
    assert_eq!(configurator.mapping(), &mapping_once);
    assert_eq!(configurator.required(), &required_once);
}

#[test]
fn apply_template_copies_rather_than_aliases() {
    let mut configurator = MappingConfigurator::new();
    let template = sample_template();
    configurator.apply_template(&template);

    configurator.remove_mapping("txtEmail");
    // The catalog instance is untouched.
    assert!(template.field_mapping.contains_key("txtEmail"));
    assert!(template.required_fields.contains("txtEmail"));
}

#[test]
fn remove_mapping_drops_required_membership() {
    let mut configurator = MappingConfigurator::new();
    configurator.set_mapping("txtEmail", "email").unwrap();
    configurator.set_required("txtEmail", true).unwrap();

    assert!(configurator.remove_mapping("txtEmail"));
    assert!(configurator.mapping().is_empty());
    assert!(configurator.required().is_empty());
}

#[test]
fn remove_absent_key_is_a_noop() {
    let mut configurator = MappingConfigurator::new();
    configurator.set_mapping("txtEmail", "email").unwrap();
    configurator.set_required("txtEmail", true).unwrap();

    assert!(!configurator.remove_mapping("txtPhone"));
    assert_eq!(configurator.mapping().len(), 1);
    assert_eq!(configurator.required().len(), 1);
}

#[test]
fn require_unmapped_field_is_rejected_without_side_effects() {
    let mut configurator = MappingConfigurator::new();
    configurator.set_mapping("txtEmail", "email").unwrap();

    let error = configurator
        .set_required("x", true)
        .expect_err("requiring unmapped field");
    assert_eq!(error, ConfigError::RequireUnmapped("x".to_string()));
    assert!(error.is_validation());
    assert_eq!(configurator.mapping().len(), 1);
    assert!(configurator.required().is_empty());
}

#[test]
fn unrequire_is_always_permitted() {
    let mut configurator = MappingConfigurator::new();
    configurator.set_required("never_mapped", false).unwrap();
    assert!(configurator.required().is_empty());
}

#[test]
fn edit_sequence_from_defaults() {
    // loadDefaults {a:b} / [a]; setMapping(c,d); setRequired(c,true);
    // removeMapping(a) => mapping {c:d}, required {c}.
    let mut configurator = MappingConfigurator::new();
    configurator
        .load_defaults(&StubBackend::healthy())
        .expect("load defaults");

    configurator.set_mapping("c", "d").unwrap();
    configurator.set_required("c", true).unwrap();
    assert!(configurator.remove_mapping("a"));

    let expected: BTreeMap<String, String> =
        [("c".to_string(), "d".to_string())].into_iter().collect();
    assert_eq!(configurator.mapping(), &expected);
    let required: Vec<&str> = configurator.required().iter().map(String::as_str).collect();
    assert_eq!(required, vec!["c"]);
}

#[test]
fn validation_reports_empty_mapping() {
    let configurator = MappingConfigurator::new();
    let violations = configurator.validate_for_submission();
    assert_eq!(violations, vec![Violation::NoMappings]);
    assert!(!configurator.is_ready_for_submission());
    assert_eq!(violations[0].to_string(), "no field mappings defined");
}

#[test]
fn validation_passes_for_consistent_state() {
    let mut configurator = MappingConfigurator::new();
    configurator.set_mapping("txtEmail", "email").unwrap();
    configurator.set_required("txtEmail", true).unwrap();
    assert!(configurator.is_ready_for_submission());
}

#[test]
fn to_integration_config_assembles_without_mutating() {
    let mut configurator = MappingConfigurator::new();
    configurator
        .load_defaults(&StubBackend::healthy())
        .expect("load defaults");
    configurator.apply_template(&sample_template());

    let mut identity = IdentityFields::new("Campus form");
    identity.description = "Entry-level intake".to_string();
    identity.auto_assign_to_job = Some(42);
    let files = FilePolicy::default();
    let notifications = NotificationPolicy::default();

    let first = configurator.to_integration_config(&identity, &files, &notifications);
    let second = configurator.to_integration_config(&identity, &files, &notifications);
    assert_eq!(first, second);

    assert_eq!(first.name, "Campus form");
    assert_eq!(first.auto_assign_to_job, Some(42));
    assert_eq!(first.field_mapping, configurator.mapping().clone());
    assert_eq!(first.required_fields, configurator.required().clone());
    assert_eq!(first.resume_field_name, "resume_file");
    assert_eq!(first.default_application_source, "PowerApps Form");
    assert_eq!(first.rate_limit_per_hour, 100);
    assert_eq!(
        first.allowed_origins,
        vec!["https://apps.powerapps.com".to_string()]
    );
}

#[test]
fn key_rename_is_remove_then_insert() {
    // The row-edit contract: removing the old external key first keeps a
    // duplicate stale key from surviving the rename.
    let mut configurator = MappingConfigurator::new();
    configurator.set_mapping("txtMail", "email").unwrap();
    configurator.set_required("txtMail", true).unwrap();

    configurator.remove_mapping("txtMail");
    configurator.set_mapping("txtEmail", "email").unwrap();

    assert!(!configurator.mapping().contains_key("txtMail"));
    assert!(configurator.mapping().contains_key("txtEmail"));
    // Required membership does not survive the rename; it refers to the
    // old key and was dropped with it.
    assert!(configurator.required().is_empty());
}

/// One randomized configurator edit.
#[derive(Debug, Clone)]
enum Op {
    Set(String, String),
    Remove(String),
    Require(String),
    Unrequire(String),
    ApplyTemplate,
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "d".to_string(),
        "".to_string(),
        "  ".to_string(),
    ])
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (key_strategy(), key_strategy()).prop_map(|(k, v)| Op::Set(k, v)),
        key_strategy().prop_map(Op::Remove),
        key_strategy().prop_map(Op::Require),
        key_strategy().prop_map(Op::Unrequire),
        Just(Op::ApplyTemplate),
    ]
}

proptest! {
    /// For every edit sequence, the required set stays a subset of the
    /// mapping keys at every observable point.
    #[test]
    fn required_always_subset_of_mapping(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let template = sample_template();
        let mut configurator = MappingConfigurator::new();

        for op in ops {
            match op {
                Op::Set(external, internal) => {
                    let _ = configurator.set_mapping(&external, &internal);
                }
                Op::Remove(external) => {
                    configurator.remove_mapping(&external);
                }
                Op::Require(external) => {
                    let _ = configurator.set_required(&external, true);
                }
                Op::Unrequire(external) => {
                    let _ = configurator.set_required(&external, false);
                }
                Op::ApplyTemplate => configurator.apply_template(&template),
            }
            for field in configurator.required() {
                prop_assert!(
                    configurator.mapping().contains_key(field),
                    "required field {field:?} has no mapping entry"
                );
            }
        }
    }
}
