//! Client configuration resolved at compile time.
//!
//! The WASM bundle has no process environment at runtime, so values are
//! baked in via `option_env!` when the crate is built and fall back to the
//! local development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default auth service base URL (local dev server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/auth";

/// Default `localStorage` key holding the session token.
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

/// Settings shared by the API client and the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the auth service, without trailing slash.
    pub api_base_url: String,
    /// Storage key of the durable token slot.
    pub token_storage_key: String,
}

impl ClientConfig {
    /// Build from `AUTHGATE_API_URL` / `AUTHGATE_TOKEN_KEY` captured at build time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("AUTHGATE_API_URL"),
            option_env!("AUTHGATE_TOKEN_KEY"),
        )
    }

    fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        let token_storage_key = token_storage_key
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY);
        Self {
            api_base_url: normalize_base_url(api_base_url),
            token_storage_key: token_storage_key.to_owned(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_owned()
}
