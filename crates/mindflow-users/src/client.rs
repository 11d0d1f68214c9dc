//! HTTP client for the users service.
//!
//! The service owns the OAuth dance and all session state; this client only
//! forwards codes and tokens. Every call carries the app's `x-api-key`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::UsersError;
use crate::types::{ExchangeCodeRequest, RedirectUrlResponse, SessionTokenResponse, User};

#[derive(Debug, Clone)]
pub struct UsersClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl UsersClient {
    /// Creates a client for the users service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`UsersError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`UsersError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, UsersError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mindflow/0.1 (mood-journal)")
            .build()?;

        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            UsersError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(UsersError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Returns the provider URL the browser should be sent to for sign-in.
    ///
    /// # Errors
    ///
    /// - [`UsersError::Status`] on a non-2xx response.
    /// - [`UsersError::Http`] on network failure.
    /// - [`UsersError::Deserialize`] if the body lacks `redirect_url`.
    pub async fn oauth_redirect_url(&self, provider: &str) -> Result<String, UsersError> {
        let url = self.endpoint(&["oauth", provider, "redirect_url"]);
        let context = format!("oauth_redirect_url(provider={provider})");
        let response = self.authed(self.client.get(url)).send().await?;
        let body: RedirectUrlResponse = Self::decode(response, &context).await?;
        Ok(body.redirect_url)
    }

    /// Trades an OAuth authorization code for a session token.
    ///
    /// # Errors
    ///
    /// - [`UsersError::Status`] if the service rejects the code.
    /// - [`UsersError::Http`] on network failure.
    /// - [`UsersError::Deserialize`] if the body lacks `session_token`.
    pub async fn exchange_code(&self, code: &str) -> Result<String, UsersError> {
        let url = self.endpoint(&["sessions"]);
        let response = self
            .authed(self.client.post(url))
            .json(&ExchangeCodeRequest { code })
            .send()
            .await?;
        let body: SessionTokenResponse = Self::decode(response, "exchange_code").await?;
        Ok(body.session_token)
    }

    /// Resolves a session token to its user.
    ///
    /// Returns `Ok(None)` when the service does not recognize the token
    /// (401 or 404).
    ///
    /// # Errors
    ///
    /// - [`UsersError::Status`] on any other non-2xx response.
    /// - [`UsersError::Http`] on network failure.
    /// - [`UsersError::Deserialize`] if the body is not a user.
    pub async fn get_current_user(&self, session_token: &str) -> Result<Option<User>, UsersError> {
        let url = self.endpoint(&["users", "me"]);
        let response = self
            .authed(self.client.get(url))
            .bearer_auth(session_token)
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND
        ) {
            return Ok(None);
        }

        let user: User = Self::decode(response, "get_current_user").await?;
        Ok(Some(user))
    }

    /// Revokes a session. Unknown sessions are treated as already gone.
    ///
    /// # Errors
    ///
    /// - [`UsersError::Status`] on a non-2xx response other than 401/404.
    /// - [`UsersError::Http`] on network failure.
    pub async fn delete_session(&self, session_token: &str) -> Result<(), UsersError> {
        let url = self.endpoint(&["sessions", "current"]);
        let response = self
            .authed(self.client.delete(url))
            .bearer_auth(session_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || matches!(status, StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND)
        {
            return Ok(());
        }
        Err(UsersError::Status {
            status: status.as_u16(),
            context: "delete_session".to_string(),
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("x-api-key", &self.api_key)
    }

    async fn decode<T: DeserializeOwned>(response: Response, context: &str) -> Result<T, UsersError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), context, "users service request failed");
            return Err(UsersError::Status {
                status: status.as_u16(),
                context: context.to_owned(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UsersError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
