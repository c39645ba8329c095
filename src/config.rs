use std::env;
use std::time::Duration;

pub const API_VERSION_VAR: &str = "API_VERSION";
pub const API_KEY_VAR: &str = "API_KEY";
pub const ENDPOINT_VAR: &str = "ENDPOINT";
pub const REQUEST_TIMEOUT_VAR: &str = "REQUEST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for an Azure OpenAI resource.
///
/// Values stay optional here; [`crate::AzureClient::new`] rejects a
/// configuration with a missing or blank field.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub api_version: Option<String>,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl Default for AzureConfig {
    fn default() -> Self {
        AzureConfig {
            api_version: None,
            api_key: None,
            endpoint: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AzureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_version = env::var(API_VERSION_VAR).ok();
        let api_key = env::var(API_KEY_VAR).ok();
        let endpoint = env::var(ENDPOINT_VAR).ok();
        let timeout = env::var(REQUEST_TIMEOUT_VAR)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        AzureConfig {
            api_version,
            api_key,
            endpoint,
            timeout,
        }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
