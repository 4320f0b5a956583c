//! HTTP client for the backing service API.
//!
//! Plain JSON over HTTP/1.1 with a bearer token. No retries, no explicit
//! timeouts; the transport default applies.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default server address when the config has none.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// A user record as returned by the API. Immutable once decoded.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub updated: i64,
}

/// Wire shape of `POST /login`.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    message: String,
    token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
    user: User,
}

/// Credentials held after a successful login.
///
/// Passed by clone into every screen that makes authenticated calls and
/// discarded on process exit. There is no refresh logic.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Errors produced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The login endpoint rejected the credentials; carries the
    /// server-provided message.
    #[error("login failed: {message}")]
    Auth { message: String },
    /// Any other non-2xx response, carrying status code and raw body.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// The server could not be reached.
    #[error("sending request: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the expected JSON shape.
    #[error("decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Stateless client for the service API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticate and return a session.
    ///
    /// A non-2xx response surfaces the server's `message` field as
    /// `ApiError::Auth`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = format!("{}/login", self.base_url);
        debug!(%url, "sending login request");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The server reports the reason in the normal response shape.
            let message = serde_json::from_str::<LoginResponse>(&body)
                .map(|r| r.message)
                .unwrap_or(body);
            warn!(status = status.as_u16(), %message, "login rejected");
            return Err(ApiError::Auth { message });
        }

        let decoded: LoginResponse = serde_json::from_str(&body)?;
        info!(user = %decoded.user.name, "login succeeded");
        Ok(Session {
            token: decoded.token,
            refresh_token: decoded.refresh_token,
            user: decoded.user,
        })
    }

    /// Fetch every user record.
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/api/users", self.base_url);
        debug!(%url, "fetching all users");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "user list request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let users: Vec<User> = serde_json::from_str(&response.text().await?)?;
        info!(count = users.len(), "fetched user list");
        Ok(users)
    }

    /// Fetch a single user by id.
    ///
    /// An unknown id comes back as the generic non-2xx `ApiError::Status`
    /// (the server answers 404 with a plain body).
    pub async fn get_user(&self, token: &str, id: &str) -> Result<User, ApiError> {
        let url = format!("{}/api/users/{id}", self.base_url);
        debug!(%url, "fetching user by id");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %id, "user fetch failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let user: User = serde_json::from_str(&response.text().await?)?;
        Ok(user)
    }
}
