use azure_image_report::{logger, AzureConfig, ImageGenerationRequest, SystemImageViewer};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(logger::LoggerConfig::from_env())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = AzureConfig::from_env();
    logger::log_config_info(&config);

    let request = ImageGenerationRequest::default();
    match azure_image_report::run(&config, &request, &SystemImageViewer, Path::new(".")).await {
        Ok(summary) => {
            log::info!("🎉 Run complete");
            log::info!("   Image: {}", summary.image.display());
            for report in &summary.reports {
                log::info!("   Report: {}", report.display());
            }
            Ok(())
        }
        Err(e) => {
            log::error!("❌ Run failed: {}", e);
            Err(e.into())
        }
    }
}
