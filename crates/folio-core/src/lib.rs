pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod lenient;

pub use app::App;
pub use config::{Config, GitHubConfig, HttpConfig, UiConfig, ValidationResult, WeatherConfig};
pub use error::{
    AppError, GitHubError, NetworkError, ReqwestErrorExt, StorageError,
    ValidationError, WeatherError,
};
pub use fetch::{fetch_json, fetch_with_fallback, FetchSource, Fetched};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::info!("Folio core initialized");
    Ok(())
}
