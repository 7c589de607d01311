//! Wire DTOs for the auth service.
//!
//! DESIGN
//! ======
//! Request bodies mirror the service's JSON exactly. The success payload
//! only requires `accessToken`; any other fields are kept untouched in
//! `extra` since the client does not interpret them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST {base}/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Body of `POST {base}/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-up / sign-in payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque session token issued by the service.
    pub access_token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AuthResponse {
    /// Response carrying only a token.
    #[must_use]
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Structured error body returned by the service on failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
