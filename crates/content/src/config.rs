//! # Gateway Configuration
//!
//! Connection settings are resolved once at startup and passed into the
//! client constructor, so tests can point a client at a mock backend
//! without touching process-wide state.

use std::env;

use crate::constants::{API_URL_ENV_VAR, DEFAULT_API_URL, WEBSITE};

/// Connection settings for the content backend.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the content backend, without a trailing path.
    pub base_url: String,
    /// Tenant name injected into the `website` filter of every query.
    pub website: String,
}

impl GatewayConfig {
    pub fn new(base_url: &str, website: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            website: website.to_string(),
        }
    }

    /// Reads the backend base URL from `CONTENT_API_URL`, falling back to
    /// the local development address. The tenant name is the compile-time
    /// constant for this deployment.
    pub fn from_env() -> Self {
        let base_url =
            env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url, WEBSITE)
    }
}
