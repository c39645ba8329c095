pub mod artifacts;
pub mod azure;
pub mod config;
pub mod display;
pub mod error;
pub mod logger;
pub mod models;
pub mod pipeline;

pub use azure::{AzureClient, ImageClient};
pub use config::AzureConfig;
pub use display::{ImageDisplayer, NoopDisplayer, SystemImageViewer};
pub use error::{ImageReportError, Result};
pub use models::*;
pub use pipeline::{run, RunSummary};
