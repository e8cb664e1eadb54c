use std::collections::{BTreeMap, BTreeSet};

use hris_model::{
    IntegrationConfig, IntegrationCreated, IntegrationStatus, Role, RoleChangeRequest,
    TemplateEntry, UserId, UserRoleRecord, WizardBootstrap, catalog_into_templates,
};

fn sample_config() -> IntegrationConfig {
    let mut mapping = BTreeMap::new();
    mapping.insert("txtFirstName".to_string(), "first_name".to_string());
    mapping.insert("txtEmail".to_string(), "email".to_string());

    let mut required = BTreeSet::new();
    required.insert("txtEmail".to_string());

    IntegrationConfig {
        name: "Campus recruiting form".to_string(),
        description: "Entry-level intake".to_string(),
        auto_assign_to_job: Some(42),
        default_application_source: "PowerApps Form".to_string(),
        field_mapping: mapping,
        required_fields: required,
        resume_field_name: "resume_file".to_string(),
        cover_letter_field_name: "cover_letter_file".to_string(),
        max_file_size_mb: 10,
        allowed_file_types: vec!["pdf".to_string(), "docx".to_string()],
        auto_send_confirmation: true,
        enable_duplicate_detection: true,
        notification_emails: vec!["hr@example.com".to_string()],
        webhook_url: None,
        rate_limit_per_hour: 100,
        allowed_origins: vec!["https://apps.powerapps.com".to_string()],
        status: IntegrationStatus::Inactive,
    }
}

#[test]
fn integration_config_wire_keys_are_snake_case() {
    let json = serde_json::to_value(sample_config()).expect("serialize config");
    let object = json.as_object().expect("config is an object");

    for key in [
        "name",
        "description",
        "auto_assign_to_job",
        "default_application_source",
        "field_mapping",
        "required_fields",
        "resume_field_name",
        "cover_letter_field_name",
        "max_file_size_mb",
        "allowed_file_types",
        "auto_send_confirmation",
        "enable_duplicate_detection",
        "notification_emails",
        "webhook_url",
        "rate_limit_per_hour",
        "allowed_origins",
        "status",
    ] {
        assert!(object.contains_key(key), "missing wire key: {key}");
    }
    assert_eq!(object["status"], "inactive");
    assert_eq!(object["required_fields"][0], "txtEmail");
}

#[test]
fn integration_config_round_trips() {
    let config = sample_config();
    let json = serde_json::to_string(&config).expect("serialize config");
    let round: IntegrationConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round, config);
}

#[test]
fn role_wire_form_is_snake_case() {
    let json = serde_json::to_string(&Role::HrManager).expect("serialize role");
    assert_eq!(json, "\"hr_manager\"");
    let round: Role = serde_json::from_str("\"hiring_manager\"").expect("deserialize role");
    assert_eq!(round, Role::HiringManager);
}

#[test]
fn role_labels_match_catalog() {
    assert_eq!(Role::Admin.label(), "Admin");
    assert_eq!(Role::HrManager.label(), "HR Manager");
    assert_eq!(Role::Candidate.label(), "Candidate");
}

#[test]
fn role_change_request_shape() {
    let request = RoleChangeRequest {
        user_id: UserId(7),
        new_role: Role::Employee,
    };
    let json = serde_json::to_value(&request).expect("serialize request");
    assert_eq!(json["user_id"], 7);
    assert_eq!(json["new_role"], "employee");
}

#[test]
fn bootstrap_parses_with_missing_optional_sections() {
    let json = r#"{
        "default_field_mapping": {"txtEmail": "email"},
        "default_required_fields": ["txtEmail"]
    }"#;
    let bootstrap: WizardBootstrap = serde_json::from_str(json).expect("parse bootstrap");
    assert!(bootstrap.job_postings.is_empty());
    assert!(bootstrap.default_allowed_origins.is_empty());
    assert_eq!(bootstrap.default_field_mapping.len(), 1);
}

#[test]
fn template_catalog_keys_become_template_ids() {
    let json = r#"{
        "standard_application": {
            "name": "Standard Application",
            "description": "Basic applicant fields",
            "field_mapping": {"txtEmail": "email"},
            "required_fields": ["txtEmail"]
        }
    }"#;
    let catalog: BTreeMap<String, TemplateEntry> =
        serde_json::from_str(json).expect("parse catalog");
    let templates = catalog_into_templates(catalog);
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].id, "standard_application");
    assert_eq!(templates[0].display_name, "Standard Application");
    assert!(templates[0].required_fields.contains("txtEmail"));
}

#[test]
fn endpoint_url_joins_origin_and_api_key() {
    let created = IntegrationCreated {
        id: Some(3),
        api_key: "pa_live_abc123".to_string(),
        status: None,
    };
    assert_eq!(
        created.endpoint_url("https://hris.example.com/"),
        "https://hris.example.com/api/recruitment/powerapps/pa_live_abc123/"
    );
}

#[test]
fn user_record_with_all_roles_offers_full_catalog() {
    let record =
        UserRoleRecord::with_all_roles(UserId(1), "a@example.com", "Alex", Role::Employee);
    assert_eq!(record.candidate_roles.len(), Role::ALL.len());
    assert_eq!(record.current_role, Role::Employee);
}
