//! Subcommand implementations.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info};

use hris_client::AdminApiClient;
use hris_map::{FilePolicy, IdentityFields, MappingConfigurator, NotificationPolicy};
use hris_model::{Role, UserId};
use hris_roles::RoleUpdateCoordinator;

use crate::cli::{Cli, SetRoleArgs, WizardArgs};
use crate::summary::{mapping_table, print_violations, templates_table, users_table};

/// Build the REST client from global flags and the environment.
pub fn build_client(cli: &Cli) -> Result<AdminApiClient> {
    let base_url = cli
        .resolve_base_url()
        .ok_or_else(|| anyhow!("no backend origin; pass --base-url or set HRIS_BASE_URL"))?;
    let mut client = AdminApiClient::new(base_url).context("build HTTP client")?;
    if let Some(token) = cli.resolve_csrf_token() {
        client = client.with_csrf_token(token);
    }
    if let Some(cookie) = cli.resolve_session_cookie() {
        client = client.with_session_cookie(cookie);
    }
    Ok(client)
}

/// `templates`: print the catalog.
pub fn run_templates(client: &AdminApiClient) -> Result<()> {
    let templates = client.fetch_templates().context("fetch templates")?;
    if templates.is_empty() {
        println!("No templates available.");
        return Ok(());
    }
    println!("{}", templates_table(&templates));
    Ok(())
}

/// `preview`: build the configuration and print the review summary.
/// Exits nonzero when validation would block submission.
pub fn run_preview(client: &AdminApiClient, args: &WizardArgs) -> Result<bool> {
    let configurator = build_configurator(client, args)?;
    print_review(&configurator);
    let violations = configurator.validate_for_submission();
    if violations.is_empty() {
        println!("Ready to submit.");
        return Ok(true);
    }
    print_violations(&violations);
    Ok(false)
}

/// `submit`: build, validate, and persist the configuration.
pub fn run_submit(client: &AdminApiClient, args: &WizardArgs) -> Result<()> {
    let configurator = build_configurator(client, args)?;
    let violations = configurator.validate_for_submission();
    if !violations.is_empty() {
        print_violations(&violations);
        bail!("configuration is not ready to submit");
    }

    let identity = identity_from_args(args);
    let config =
        configurator.to_integration_config(&identity, &FilePolicy::default(), &NotificationPolicy::default());
    let created = client
        .create_integration_config(&config)
        .context("submit configuration")?;
    info!(name = %config.name, "integration configuration created");

    print_review(&configurator);
    println!("Created '{}'.", config.name);
    println!("API key: {}", created.api_key);
    println!("Endpoint: {}", created.endpoint_url(client.base_url()));
    if let Some(status) = &created.status {
        println!("Status: {status}");
    }
    Ok(())
}

/// `users list`: print the role console.
pub fn run_users_list(client: &AdminApiClient) -> Result<()> {
    let mut coordinator = RoleUpdateCoordinator::new();
    coordinator.load(client.fetch_users().context("fetch users")?);
    println!("{}", users_table(coordinator.rows()));
    Ok(())
}

/// `users set-role`: change one user's role, prompting for confirmation
/// when the change involves the admin tier.
pub fn run_set_role(client: &AdminApiClient, args: &SetRoleArgs) -> Result<()> {
    let mut coordinator = RoleUpdateCoordinator::new();
    coordinator.load(client.fetch_users().context("fetch users")?);

    let user_id = UserId(args.user_id);
    let new_role = Role::from(args.role);
    let changed = coordinator.select_role(user_id, new_role)?;
    if !changed {
        let row = coordinator.row(user_id)?;
        println!(
            "{} already has the {} role.",
            row.record().email,
            new_role.label()
        );
        return Ok(());
    }

    if let Some(prompt) = coordinator.confirmation_prompt(user_id)? {
        if !args.yes && !confirm(&prompt)? {
            coordinator.decline(user_id)?;
            println!("Cancelled.");
            return Ok(());
        }
        debug!(%user_id, "admin-tier change confirmed");
    }

    let notification = coordinator.submit_confirmed(user_id, client)?;
    if notification.is_success() {
        println!("{}", notification.message);
        Ok(())
    } else {
        bail!("{}", notification.message)
    }
}

fn build_configurator(client: &AdminApiClient, args: &WizardArgs) -> Result<MappingConfigurator> {
    let mut configurator = MappingConfigurator::new();
    if let Err(error) = configurator.load_defaults(client) {
        // An unreachable wizard endpoint is not fatal; the operator can
        // still assemble a configuration from explicit flags.
        eprintln!("warning: {error}; starting from an empty configuration");
    }

    if let Some(key) = &args.template {
        let template = configurator
            .template(key)
            .cloned()
            .ok_or_else(|| anyhow!("unknown template '{key}'"))?;
        configurator.apply_template(&template);
    }

    if let Some(path) = &args.mapping_file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("parse {}", path.display()))?;
        for (external, internal) in entries {
            configurator.set_mapping(&external, &internal)?;
        }
    }

    for entry in &args.set {
        let (external, internal) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("--set expects EXTERNAL=INTERNAL, got '{entry}'"))?;
        configurator.set_mapping(external, internal)?;
    }
    for external in &args.remove {
        if !configurator.remove_mapping(external) {
            eprintln!("warning: no mapping entry for '{external}'");
        }
    }
    for external in &args.require {
        configurator.set_required(external, true)?;
    }
    for external in &args.optional {
        configurator.set_required(external, false)?;
    }
    Ok(configurator)
}

fn identity_from_args(args: &WizardArgs) -> IdentityFields {
    let mut identity = IdentityFields::new(&args.name);
    identity.description = args.description.clone();
    identity.auto_assign_to_job = args.job_posting;
    identity.status = args.status.into();
    identity
}

fn print_review(configurator: &MappingConfigurator) {
    println!("{}", mapping_table(configurator));
    if !configurator.allowed_origins().is_empty() {
        println!("Allowed origins: {}", configurator.allowed_origins().join(", "));
    }
}

/// Ask a yes/no question on the terminal. Anything but `y`/`yes`
/// declines.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
