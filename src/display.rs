use crate::error::{ImageReportError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Shows a saved image to the user.
pub trait ImageDisplayer {
    fn display(&self, path: &Path) -> Result<()>;
}

/// Opens images with the platform's default viewer and returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemImageViewer;

impl SystemImageViewer {
    fn command(path: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg("start").arg("").arg(path);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl ImageDisplayer for SystemImageViewer {
    fn display(&self, path: &Path) -> Result<()> {
        Self::command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                ImageReportError::DisplayError(format!(
                    "could not open {}: {}",
                    path.display(),
                    e
                ))
            })?;
        log::info!("🖼️  Opened {} in the default viewer", path.display());
        Ok(())
    }
}

/// Skips display entirely; for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDisplayer;

impl ImageDisplayer for NoopDisplayer {
    fn display(&self, path: &Path) -> Result<()> {
        log::debug!("Display skipped for {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_command_targets_the_path() {
        let cmd = SystemImageViewer::command(Path::new("images/generated_image.png"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(
            args.last().map(|a| a.to_string_lossy().into_owned()),
            Some("images/generated_image.png".to_string())
        );
    }

    #[test]
    fn noop_displayer_succeeds() {
        assert!(NoopDisplayer.display(Path::new("anything.png")).is_ok());
    }
}
