use crate::{
    artifacts::{self, DATASETS_DIR, IMAGES_DIR},
    azure::AzureClient,
    config::AzureConfig,
    display::ImageDisplayer,
    error::Result,
    logger,
    models::{FilterResultKind, ImageGenerationRequest},
};
use std::path::{Path, PathBuf};

/// Paths written by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub image: PathBuf,
    pub reports: Vec<PathBuf>,
}

/// Client setup, one generation call, directories, both safety reports,
/// then the image. The first failing stage ends the run.
pub async fn run(
    config: &AzureConfig,
    request: &ImageGenerationRequest,
    displayer: &dyn ImageDisplayer,
    root: &Path,
) -> Result<RunSummary> {
    log::info!("🔄 Creating Azure OpenAI client...");
    let client = AzureClient::new(config)?;

    let response = {
        let _timer = logger::timer("image generation");
        client.image().generate(request).await?
    };
    log::info!("✅ Received {} image result(s)", response.data.len());

    let images_dir = artifacts::ensure_directory(root, IMAGES_DIR)?;
    let datasets_dir = artifacts::ensure_directory(root, DATASETS_DIR)?;

    let mut reports = Vec::with_capacity(FilterResultKind::ALL.len());
    for kind in FilterResultKind::ALL {
        reports.push(artifacts::write_safety_report(&response, kind, &datasets_dir)?);
    }

    let image = {
        let _timer = logger::timer("image download");
        artifacts::save_image(client.image(), &response, &images_dir).await?
    };
    displayer.display(&image)?;

    Ok(RunSummary { image, reports })
}
