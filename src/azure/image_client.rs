use crate::{
    error::{ImageReportError, Result},
    models::{ImageGenerationRequest, ImageGenerationResponse},
};
use serde::Deserialize;

#[derive(Clone)]
pub struct ImageClient {
    api: reqwest::Client,
    download: reqwest::Client,
    endpoint: String,
    api_version: String,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => format!(
            "{} ({}): {}",
            status,
            envelope.error.code.as_deref().unwrap_or("unknown"),
            envelope.error.message.as_deref().unwrap_or("no message")
        ),
        Err(_) => format!("{}: {}", status, body),
    }
}

impl ImageClient {
    pub fn new(
        api: reqwest::Client,
        download: reqwest::Client,
        endpoint: String,
        api_version: String,
    ) -> Self {
        Self {
            api,
            download,
            endpoint,
            api_version,
        }
    }

    pub fn generations_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/images/generations?api-version={}",
            self.endpoint.trim_end_matches('/'),
            deployment,
            self.api_version
        )
    }

    /// Issues one generation call. Nothing here retries.
    pub async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        log::info!("Generating image with model: {}", request.model);

        let response = self
            .api
            .post(self.generations_url(&request.model))
            .json(request)
            .send()
            .await
            .map_err(|e| ImageReportError::ServiceError(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImageReportError::ServiceError(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(ImageReportError::ServiceError(describe_failure(
                status, &body,
            )));
        }

        let generation: ImageGenerationResponse = serde_json::from_str(&body)
            .map_err(|e| ImageReportError::SchemaError(e.to_string()))?;

        if let Some(revised) = generation.data.first().and_then(|d| d.revised_prompt.as_ref()) {
            log::info!("Revised prompt: {}", revised);
        }

        Ok(generation)
    }

    /// Errors drop the URL; image links carry a signed access token.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("Downloading generated image");

        let response = self
            .download
            .get(url)
            .send()
            .await
            .map_err(|e| ImageReportError::DownloadError(e.without_url().to_string()))?
            .error_for_status()
            .map_err(|e| ImageReportError::DownloadError(e.without_url().to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageReportError::DownloadError(e.without_url().to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn azure_error_envelope_is_unpacked() {
        let body = r#"{"error":{"code":"content_policy_violation","message":"Your request was rejected."}}"#;
        let message = describe_failure(reqwest::StatusCode::BAD_REQUEST, body);
        assert_eq!(
            message,
            "400 Bad Request (content_policy_violation): Your request was rejected."
        );
    }

    #[test]
    fn plain_body_is_kept() {
        let message = describe_failure(reqwest::StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(message, "502 Bad Gateway: upstream down");
    }
}
