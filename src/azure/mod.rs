pub mod image_client;

use crate::{
    config::AzureConfig,
    error::{ImageReportError, Result},
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct AzureClient {
    image_client: ImageClient,
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ImageReportError::ConfigError(format!(
            "{} is missing or empty",
            name
        ))),
    }
}

impl AzureClient {
    pub fn new(config: &AzureConfig) -> Result<Self> {
        let api_version = required(&config.api_version, crate::config::API_VERSION_VAR)?;
        let api_key = required(&config.api_key, crate::config::API_KEY_VAR)?;
        let endpoint = required(&config.endpoint, crate::config::ENDPOINT_VAR)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key_header = HeaderValue::from_str(&api_key).map_err(|_| {
            ImageReportError::ConfigError("API_KEY is not a valid header value".into())
        })?;
        key_header.set_sensitive(true);
        headers.insert("api-key", key_header);

        let api = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ImageReportError::ConfigError(e.to_string()))?;

        // The image host is a separate storage URL and must not see the key.
        let download = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ImageReportError::ConfigError(e.to_string()))?;

        log::debug!(
            "Azure client configured for {} (api-version {})",
            endpoint,
            api_version
        );

        Ok(Self {
            image_client: ImageClient::new(api, download, endpoint, api_version),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
