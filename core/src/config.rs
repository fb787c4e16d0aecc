//! Client configuration.

use std::fmt;

use crate::error::ConfigError;

/// Production address of the partner API.
pub const DEFAULT_BASE_URL: &str = "https://api.partner.market.yandex.ru/v2";

/// Environment variable holding the client (application) id.
pub const ENV_CLIENT_ID: &str = "MARKET_CLIENT_ID";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "MARKET_API_KEY";
/// Optional override of the base address.
pub const ENV_BASE_URL: &str = "MARKET_BASE_URL";

/// Identity, credential and address of the API. Never mutated after the
/// client is built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    client_id: String,
    api_key: String,
    base_url: String,
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client somewhere other than production. A trailing `/` is
    /// dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Load `MARKET_CLIENT_ID`, `MARKET_API_KEY` and, if set,
    /// `MARKET_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = required_var(ENV_CLIENT_ID)?;
        let api_key = required_var(ENV_API_KEY)?;
        let config = Self::new(client_id, api_key);
        Ok(match std::env::var(ENV_BASE_URL) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// The key stays out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::MissingVar(name))?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyVar { name });
    }
    Ok(value)
}
