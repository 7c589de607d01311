//! REST client for the external auth service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP client answers with a transport error, since the
//! service is only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Each call is a single attempt with no retry or timeout override. Every
//! failure comes back as an `AuthError`; nothing panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{AuthError, AuthOperation};
use super::types::{AuthResponse, SignInRequest, SignUpRequest};
use crate::config::ClientConfig;

/// The two auth calls the forms depend on.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    /// Register a new account via `POST {base}/signup`.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` when the request fails or is rejected.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, AuthError>;

    /// Authenticate via `POST {base}/signin`.
    ///
    /// # Errors
    ///
    /// Returns an `AuthError` when the request fails or is rejected.
    async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, AuthError>;
}

/// `AuthClient` backed by HTTP requests to a fixed base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthClient {
    base_url: String,
}

impl HttpAuthClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    async fn post<T: serde::Serialize>(
        &self,
        op: AuthOperation,
        body: &T,
    ) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&self.base_url, op);
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| {
                    log::error!("{op} request build failed: {e}");
                    AuthError::Unknown
                })?
                .send()
                .await
                .map_err(|e| {
                    log::warn!("{op} request failed: {e}");
                    AuthError::Transport(op)
                })?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                log::warn!("{op} rejected with status {status}");
                return Err(AuthError::from_error_body(op, &text));
            }
            decode_success(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = body;
            let url = endpoint(&self.base_url, op);
            log::warn!("{op} unavailable outside the browser ({url})");
            Err(AuthError::Transport(op))
        }
    }
}

impl AuthClient for HttpAuthClient {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, AuthError> {
        self.post(AuthOperation::SignUp, request).await
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, AuthError> {
        self.post(AuthOperation::SignIn, request).await
    }
}

fn endpoint(base_url: &str, op: AuthOperation) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), op.path())
}

#[cfg(any(test, feature = "csr"))]
fn decode_success(body: &str) -> Result<AuthResponse, AuthError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("unexpected auth response: {e}");
        AuthError::Unknown
    })
}
