//! CLI argument definitions for the HRIS admin console.

use std::env;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hris_model::{IntegrationStatus, Role};

#[derive(Parser)]
#[command(
    name = "hris-admin",
    version,
    about = "HRIS admin console - external form integrations and user roles",
    long_about = "Administer the recruitment side of the HRIS backend.\n\n\
                  Build and submit external-form field mapping configurations,\n\
                  and review or change user roles from the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Backend origin, e.g. https://hris.example.com
    /// (falls back to the HRIS_BASE_URL environment variable).
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// CSRF token for state-changing requests
    /// (falls back to HRIS_CSRF_TOKEN).
    #[arg(long = "csrf-token", value_name = "TOKEN", global = true)]
    pub csrf_token: Option<String>,

    /// Session cookie for authenticated requests
    /// (falls back to HRIS_SESSION_COOKIE).
    #[arg(long = "session-cookie", value_name = "COOKIE", global = true)]
    pub session_cookie: Option<String>,
}

impl Cli {
    /// Backend origin from the flag or the environment.
    pub fn resolve_base_url(&self) -> Option<String> {
        self.base_url
            .clone()
            .or_else(|| env::var("HRIS_BASE_URL").ok())
    }

    /// CSRF token from the flag or the environment.
    pub fn resolve_csrf_token(&self) -> Option<String> {
        self.csrf_token
            .clone()
            .or_else(|| env::var("HRIS_CSRF_TOKEN").ok())
    }

    /// Session cookie from the flag or the environment.
    pub fn resolve_session_cookie(&self) -> Option<String> {
        self.session_cookie
            .clone()
            .or_else(|| env::var("HRIS_SESSION_COOKIE").ok())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the field-mapping template catalog.
    Templates,

    /// Build a mapping configuration and print the review summary
    /// without submitting it.
    Preview(WizardArgs),

    /// Build a mapping configuration, validate it, and submit it to
    /// the backend.
    Submit(WizardArgs),

    /// User role console.
    #[command(subcommand)]
    Users(UsersCommand),
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users and their current roles.
    List,

    /// Change one user's role.
    SetRole(SetRoleArgs),
}

/// Arguments shared by `preview` and `submit`.
#[derive(Args)]
pub struct WizardArgs {
    /// Display name for the integration configuration.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Free-text description.
    #[arg(long = "description", value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Template key to apply before individual edits.
    #[arg(long = "template", value_name = "KEY")]
    pub template: Option<String>,

    /// JSON file of {"external": "internal"} entries applied after the
    /// template.
    #[arg(long = "mapping-file", value_name = "PATH")]
    pub mapping_file: Option<PathBuf>,

    /// Add or overwrite one mapping entry (repeatable).
    #[arg(long = "set", value_name = "EXTERNAL=INTERNAL")]
    pub set: Vec<String>,

    /// Remove one mapping entry (repeatable).
    #[arg(long = "remove", value_name = "EXTERNAL")]
    pub remove: Vec<String>,

    /// Mark one external field as required (repeatable).
    #[arg(long = "require", value_name = "EXTERNAL")]
    pub require: Vec<String>,

    /// Clear the required flag on one external field (repeatable).
    #[arg(long = "optional", value_name = "EXTERNAL")]
    pub optional: Vec<String>,

    /// Job posting id to auto-assign incoming applications to.
    #[arg(long = "job-posting", value_name = "ID")]
    pub job_posting: Option<u64>,

    /// Initial status of the configuration.
    #[arg(long = "status", value_enum, default_value = "inactive")]
    pub status: StatusArg,
}

#[derive(Args)]
pub struct SetRoleArgs {
    /// Numeric id of the user to change.
    #[arg(value_name = "USER_ID")]
    pub user_id: u64,

    /// The role to assign.
    #[arg(value_name = "ROLE", value_enum)]
    pub role: RoleArg,

    /// Skip the confirmation prompt for admin-tier changes.
    #[arg(long = "yes")]
    pub yes: bool,
}

/// CLI role choices, mirroring the backend role set.
#[derive(Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    HrManager,
    HiringManager,
    Employee,
    Candidate,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Admin => Role::Admin,
            RoleArg::HrManager => Role::HrManager,
            RoleArg::HiringManager => Role::HiringManager,
            RoleArg::Employee => Role::Employee,
            RoleArg::Candidate => Role::Candidate,
        }
    }
}

/// CLI integration status choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Inactive,
    Testing,
}

impl From<StatusArg> for IntegrationStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Active => IntegrationStatus::Active,
            StatusArg::Inactive => IntegrationStatus::Inactive,
            StatusArg::Testing => IntegrationStatus::Testing,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, UsersCommand};

    #[test]
    fn parses_submit_with_edits() {
        let cli = Cli::try_parse_from([
            "hris-admin",
            "submit",
            "--name",
            "Careers form",
            "--template",
            "standard_form",
            "--set",
            "txtPhone=phone",
            "--remove",
            "txtFax",
            "--require",
            "txtPhone",
            "--base-url",
            "https://hris.example.com",
        ])
        .unwrap();
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.name, "Careers form");
        assert_eq!(args.template.as_deref(), Some("standard_form"));
        assert_eq!(args.set, vec!["txtPhone=phone"]);
        assert_eq!(args.remove, vec!["txtFax"]);
        assert_eq!(args.require, vec!["txtPhone"]);
        assert_eq!(cli.base_url.as_deref(), Some("https://hris.example.com"));
    }

    #[test]
    fn parses_users_set_role() {
        let cli = Cli::try_parse_from([
            "hris-admin",
            "users",
            "set-role",
            "42",
            "hr-manager",
            "--yes",
        ])
        .unwrap();
        let Command::Users(UsersCommand::SetRole(args)) = cli.command else {
            panic!("expected set-role");
        };
        assert_eq!(args.user_id, 42);
        assert!(args.yes);
    }

    #[test]
    fn submit_requires_a_name() {
        assert!(Cli::try_parse_from(["hris-admin", "submit"]).is_err());
    }
}
