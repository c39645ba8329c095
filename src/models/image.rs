use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filter::FilterResultKind;
use crate::error::{ImageReportError, Result};

pub const DEFAULT_PROMPT: &str = "A dog surfing a wave";
pub const DEFAULT_MODEL: &str = "dall-e-3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Standard,
    Hd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1792x1024")]
    Landscape,
    #[serde(rename = "1024x1792")]
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    Url,
    B64Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Vivid,
    Natural,
}

/// Body of an `images/generations` call.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model: String,
    pub n: u32,
    pub quality: ImageQuality,
    pub size: ImageSize,
    pub response_format: ResponseFormat,
    pub style: ImageStyle,
}

impl Default for ImageGenerationRequest {
    fn default() -> Self {
        ImageGenerationRequest {
            prompt: DEFAULT_PROMPT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            n: 1,
            quality: ImageQuality::Hd,
            size: ImageSize::Square,
            response_format: ResponseFormat::Url,
            style: ImageStyle::Vivid,
        }
    }
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }

    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub data: Vec<GeneratedImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
    #[serde(default)]
    pub prompt_filter_results: Option<Map<String, Value>>,
    #[serde(default)]
    pub content_filter_results: Option<Map<String, Value>>,
}

/// Where the image bytes of a generation result live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload<'a> {
    Url(&'a str),
    Inline(&'a str),
}

impl ImageGenerationResponse {
    /// The single result this tool asks for (`data[0]`).
    pub fn first(&self) -> Result<&GeneratedImage> {
        self.data.first().ok_or_else(|| ImageReportError::missing("data[0]"))
    }
}

impl GeneratedImage {
    pub fn filter_results(&self, kind: FilterResultKind) -> Result<&Map<String, Value>> {
        let results = match kind {
            FilterResultKind::Prompt => self.prompt_filter_results.as_ref(),
            FilterResultKind::Content => self.content_filter_results.as_ref(),
        };
        results.ok_or_else(|| ImageReportError::missing(&format!("data[0].{}", kind.key())))
    }

    /// URL takes precedence over inline data when both are present.
    pub fn payload(&self) -> Result<ImagePayload<'_>> {
        match (self.url.as_deref(), self.b64_json.as_deref()) {
            (Some(url), _) => Ok(ImagePayload::Url(url)),
            (None, Some(data)) => Ok(ImagePayload::Inline(data)),
            (None, None) => Err(ImageReportError::missing("data[0].url")),
        }
    }
}
