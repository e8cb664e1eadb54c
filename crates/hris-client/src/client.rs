//! Blocking client for the HRIS admin REST endpoints.
//!
//! Carries the session cookie and cross-site-request-forgery token the
//! backend expects on state-changing requests; everything else is plain
//! JSON over HTTP.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, COOKIE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use hris_model::{
    IntegrationConfig, IntegrationCreated, MappingTemplate, Role, RoleChangeRequest,
    RoleChangeResponse, TemplateEntry, UserId, UserRoleRecord, WizardBootstrap,
    catalog_into_templates,
};

use crate::error::{ClientError, Result};

/// Header carrying the anti-forgery token on POSTs.
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the admin endpoints of the HRIS backend.
pub struct AdminApiClient {
    http: Client,
    base_url: String,
    csrf_token: Option<String>,
    session_cookie: Option<String>,
}

impl AdminApiClient {
    /// Create a client for the given origin, e.g. `https://hris.example.com`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::from)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            csrf_token: None,
            session_cookie: None,
        })
    }

    /// Attach the anti-forgery token sent on state-changing requests.
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Attach the operator's session cookie.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// The configured origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        debug!(%url, "GET");
        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }
        Ok(request.send()?)
    }

    fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.url(path);
        debug!(%url, "POST");
        let mut request = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .json(body);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }
        Ok(request.send()?)
    }

    /// Fetch the wizard session defaults.
    pub fn fetch_bootstrap(&self) -> Result<WizardBootstrap> {
        let response = self.get("api/recruitment/wizard-bootstrap/")?;
        decode(response)
    }

    /// Fetch the template catalog, flattened to templates ordered by key.
    pub fn fetch_templates(&self) -> Result<Vec<MappingTemplate>> {
        let response = self.get("api/recruitment/field-mapping-templates/")?;
        let catalog: BTreeMap<String, TemplateEntry> = decode(response)?;
        Ok(catalog_into_templates(catalog))
    }

    /// Fetch the role console rows. Every user is offered the full
    /// backend role set as candidates.
    pub fn fetch_users(&self) -> Result<Vec<UserRoleRecord>> {
        let response = self.get("api/accounts/users/")?;
        let body = read_body(response)?;
        let entries = parse_user_list(&body)?;
        Ok(entries.into_iter().map(UserListEntry::into_record).collect())
    }

    /// Persist a finished integration configuration.
    pub fn create_integration_config(
        &self,
        config: &IntegrationConfig,
    ) -> Result<IntegrationCreated> {
        let response = self.post_json("api/recruitment/integration-configs/", config)?;
        decode(response)
    }

    /// Submit one role change.
    pub fn change_role(&self, request: &RoleChangeRequest) -> Result<RoleChangeResponse> {
        let response = self.post_json("api/accounts/role-change/", request)?;
        decode(response)
    }
}

/// One entry of the user list response.
#[derive(Debug, Deserialize)]
struct UserListEntry {
    id: u64,
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    role: Role,
}

impl UserListEntry {
    fn into_record(self) -> UserRoleRecord {
        let display_name = format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string();
        UserRoleRecord::with_all_roles(UserId(self.id), self.email, display_name, self.role)
    }
}

/// The user list arrives either bare or wrapped in a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserListBody {
    Plain(Vec<UserListEntry>),
    Paginated { results: Vec<UserListEntry> },
}

fn parse_user_list(body: &str) -> Result<Vec<UserListEntry>> {
    match serde_json::from_str::<UserListBody>(body)? {
        UserListBody::Plain(entries) => Ok(entries),
        UserListBody::Paginated { results } => Ok(results),
    }
}

/// Decode a response, mapping non-success statuses to `ClientError::Api`
/// with the backend's own message.
fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = read_body(response)?;
    Ok(serde_json::from_str(&body)?)
}

fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        });
    }
    Ok(body)
}

/// Extract the operator-facing message from an error body: the JSON
/// `detail` or `error` field when present, otherwise the raw body or the
/// bare status code.
fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Option<String>,
        #[serde(default)]
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(message) = parsed.detail.or(parsed.error)
    {
        return message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}
