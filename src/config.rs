//! Configuration options for the cadastro client.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed resource path segment for the pessoa resource.
pub const DEFAULT_RESOURCE_PATH: &str = "/cadastro/pessoa";

/// Environment variable consulted by [`ClientOptions::from_env`].
pub const BASE_URL_ENV: &str = "CADASTRO_BASE_URL";

/// Configuration options for the cadastro client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Backend base address (host and port).
    pub base_url: String,

    /// Path segment under which the pessoa resource is mounted.
    pub resource_path: String,

    /// Per-request timeout. `None` means no timeout is applied, which is
    /// the default: callers that want one opt in explicitly.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientOptions {
    /// Creates options for the given base URL, validating it up front.
    pub fn new(base_url: &str) -> Result<Self> {
        Url::parse(base_url).map_err(Error::Url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// Reads the base URL from `CADASTRO_BASE_URL`, falling back to the
    /// default local address.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) => Self::new(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the resource path segment.
    pub fn with_resource_path(mut self, value: &str) -> Self {
        self.resource_path = value.to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
