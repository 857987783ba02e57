use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::Config;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Application configuration plus the shared HTTP client
pub struct App {
    config: Arc<Config>,
    http: reqwest::Client,
}

impl App {
    /// Create a new application instance from the on-disk configuration
    pub fn new() -> Result<Self> {
        let (config, _) = Config::load_validated()?;
        Self::with_config(config)
    }

    /// Create an application instance from an already loaded configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Prepare on-disk state (the config directory for local storage)
    pub fn initialize(&mut self) -> Result<()> {
        std::fs::create_dir_all(&self.config.config_dir)
            .context("Failed to create config directory")?;
        tracing::info!(
            "Application initialized (config dir: {})",
            self.config.config_dir.display()
        );
        Ok(())
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared config handle for background services
    pub fn config_arc(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// HTTP client shared by the remote feeds
    pub fn http_client(&self) -> reqwest::Client {
        self.http.clone()
    }
}
