use crate::{
    azure::ImageClient,
    error::{ImageReportError, Result},
    models::{ImageGenerationResponse, ImagePayload},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::{Path, PathBuf};

pub const GENERATED_IMAGE_FILE: &str = "generated_image.png";

/// Fetches the first result's image and writes it to
/// `<images_dir>/generated_image.png`, overwriting a previous run.
pub async fn save_image(
    client: &ImageClient,
    response: &ImageGenerationResponse,
    images_dir: &Path,
) -> Result<PathBuf> {
    let bytes = match response.first()?.payload()? {
        ImagePayload::Url(url) => client.fetch_image(url).await?,
        ImagePayload::Inline(data) => STANDARD
            .decode(data)
            .map_err(|e| ImageReportError::SchemaError(format!("invalid b64_json: {}", e)))?,
    };

    let path = images_dir.join(GENERATED_IMAGE_FILE);
    fs::write(&path, &bytes).map_err(|e| ImageReportError::filesystem(&path, e))?;

    log::info!("💾 Image saved to: {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
