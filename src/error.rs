use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ImageReportError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Filesystem error at {path}: {source}")]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download error: {0}")]
    DownloadError(String),

    #[error("Display error: {0}")]
    DisplayError(String),
}

impl ImageReportError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImageReportError::FilesystemError {
            path: path.into(),
            source,
        }
    }

    /// Missing `field` on the service response.
    pub(crate) fn missing(field: &str) -> Self {
        ImageReportError::SchemaError(format!("response is missing `{}`", field))
    }
}

pub type Result<T> = std::result::Result<T, ImageReportError>;
