pub mod image;
pub mod report;

use crate::error::{ImageReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use image::{save_image, GENERATED_IMAGE_FILE};
pub use report::{render_safety_report, write_safety_report};

pub const IMAGES_DIR: &str = "images";
pub const DATASETS_DIR: &str = "datasets";

/// Creates `root/name` unless it already exists and returns its path.
pub fn ensure_directory(root: &Path, name: &str) -> Result<PathBuf> {
    let dir = root.join(name);
    if !dir.is_dir() {
        fs::create_dir(&dir).map_err(|e| ImageReportError::filesystem(&dir, e))?;
        log::debug!("Created directory {}", dir.display());
    }
    Ok(dir)
}
