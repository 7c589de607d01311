//! Tagged failure type for auth requests.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request is normalized here into one of three kinds, so call
//! sites display `to_string()` without inspecting transport details.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use super::types::ErrorBody;

/// Which auth request failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOperation {
    SignUp,
    SignIn,
}

impl AuthOperation {
    /// Sub-path under the auth base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SignUp => "/signup",
            Self::SignIn => "/signin",
        }
    }
}

impl fmt::Display for AuthOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SignUp => "sign-up",
            Self::SignIn => "sign-in",
        })
    }
}

/// Coarse classification of an `AuthError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    Validation,
    Transport,
    Unknown,
}

/// Failure of a sign-up or sign-in request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service rejected the request and said why.
    #[error("{0}")]
    Validation(String),
    /// No usable answer: network failure or an error without a message.
    #[error("An unknown error occurred during {0}")]
    Transport(AuthOperation),
    /// Anything else, such as a success body that does not decode.
    #[error("An unknown error occurred")]
    Unknown,
}

impl AuthError {
    #[must_use]
    pub const fn kind(&self) -> AuthErrorKind {
        match self {
            Self::Validation(_) => AuthErrorKind::Validation,
            Self::Transport(_) => AuthErrorKind::Transport,
            Self::Unknown => AuthErrorKind::Unknown,
        }
    }

    /// Normalize a non-2xx response body.
    ///
    /// A JSON body with a string `message` is surfaced verbatim; anything
    /// else collapses to the per-operation fallback.
    #[must_use]
    pub fn from_error_body(op: AuthOperation, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { message }) => Self::Validation(message),
            Err(_) => Self::Transport(op),
        }
    }
}
