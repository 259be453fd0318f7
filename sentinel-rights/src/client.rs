//! Authorization-service HTTP client.
//!
//! REST client for the Sentinel authorization service. Rights are resources
//! under a user: `GET`/`POST`/`DELETE /users/{username}/rights/{right}`.
//! Mutating calls carry the session token as a bearer credential.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::error::{AuthError, AuthResult};
use crate::rights::Right;
use crate::service::{AuthService, SessionToken};

/// HTTP client for the authorization service.
///
/// Performs one synchronous round trip per call; no retries and no caching.
/// A client-wide timeout is the only local timeout policy.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    /// HTTP client instance.
    client: Client,

    /// Service base URL, without trailing slash.
    base_url: String,
}

impl HttpAuthService {
    /// Create a new client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AuthResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    fn right_url(&self, username: &str, right: Right) -> String {
        format!("{}/users/{}/rights/{}", self.base_url, username, right.as_str())
    }

    /// Triage a mutating-call response into the error taxonomy.
    fn check_status(response: &reqwest::Response) -> Result<(), AuthError> {
        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::Unauthorized),
            StatusCode::NOT_FOUND => Err(AuthError::NotFound),
            s => Err(AuthError::Unexpected {
                status: s.as_u16(),
                message: String::new(),
            }),
        }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    #[instrument(skip(self), fields(username = %username, right = %right))]
    async fn has_right(&self, username: &str, right: Right) -> AuthResult<bool> {
        debug!("Querying right");

        let response = self.client.get(self.right_url(username, right)).send().await?;

        match response.status() {
            s if s.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AuthError::Unauthorized),
            s => {
                let message = response.text().await.unwrap_or_default();
                warn!("Unexpected status {} querying right: {}", s.as_u16(), message);
                Err(AuthError::Unexpected {
                    status: s.as_u16(),
                    message,
                })
            }
        }
    }

    #[instrument(skip(self, token), fields(username = %username, right = %right))]
    async fn grant(&self, username: &str, right: Right, token: &SessionToken) -> AuthResult<()> {
        debug!("Granting right");

        let response = self
            .client
            .post(self.right_url(username, right))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Self::check_status(&response)
    }

    #[instrument(skip(self, token), fields(username = %username, right = %right))]
    async fn revoke(&self, username: &str, right: Right, token: &SessionToken) -> AuthResult<()> {
        debug!("Revoking right");

        let response = self
            .client
            .delete(self.right_url(username, right))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Self::check_status(&response)
    }
}
