//! Application services: runtime, remote clients and result channels.
//!
//! One `AppServices` value is created at startup and passed explicitly to
//! whoever issues requests or drains results; there is no global instance.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};

use folio_core::{GitHubConfig, WeatherConfig};
use folio_services::GitHubClient;
use folio_weather::WeatherProvider;

use crate::services::{self, ProjectServiceMessage, WeatherServiceMessage};

/// Shared services for the page.
pub struct AppServices {
    /// Tokio runtime for async operations
    runtime: tokio::runtime::Runtime,

    /// GitHub repository listing client
    github_client: RwLock<Option<Arc<GitHubClient>>>,

    /// Weather provider
    weather_provider: RwLock<Option<Arc<WeatherProvider>>>,

    weather_service_tx: Sender<WeatherServiceMessage>,
    weather_service_rx: Mutex<Receiver<WeatherServiceMessage>>,

    project_service_tx: Sender<ProjectServiceMessage>,
    project_service_rx: Mutex<Receiver<ProjectServiceMessage>>,
}

impl AppServices {
    /// Create the services runtime and channels. Clients are attached later.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("folio-tokio")
            .build()
            .context("Failed to create tokio runtime")?;

        let (weather_service_tx, weather_service_rx) = mpsc::channel();
        let (project_service_tx, project_service_rx) = mpsc::channel();

        Ok(Self {
            runtime,
            github_client: RwLock::new(None),
            weather_provider: RwLock::new(None),
            weather_service_tx,
            weather_service_rx: Mutex::new(weather_service_rx),
            project_service_tx,
            project_service_rx: Mutex::new(project_service_rx),
        })
    }

    /// Get the tokio runtime handle.
    pub fn runtime(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    // =========== Weather ===========

    pub fn weather_provider(&self) -> Option<Arc<WeatherProvider>> {
        self.weather_provider.read().clone()
    }

    pub fn init_weather_provider(&self, http: reqwest::Client, config: WeatherConfig) {
        tracing::info!("Weather provider initialized for {}", config.location_name);
        *self.weather_provider.write() = Some(Arc::new(WeatherProvider::new(http, config)));
    }

    /// Start the weather fetch; the result arrives via `try_recv_weather`.
    pub fn request_weather(&self) {
        services::request_weather_fetch(
            &self.weather_service_tx,
            self.runtime.handle(),
            self.weather_provider(),
        );
    }

    pub fn try_recv_weather(&self) -> Option<WeatherServiceMessage> {
        self.weather_service_rx.lock().try_recv().ok()
    }

    // =========== GitHub ===========

    pub fn github_client(&self) -> Option<Arc<GitHubClient>> {
        self.github_client.read().clone()
    }

    /// Initialize the GitHub client from configuration.
    pub fn init_github_client(&self, http: reqwest::Client, config: &GitHubConfig) -> bool {
        match GitHubClient::new(http, config) {
            Ok(client) => {
                *self.github_client.write() = Some(Arc::new(client));
                tracing::info!("GitHub client initialized for {}", config.username);
                true
            }
            Err(e) => {
                tracing::error!("Failed to create GitHub client: {:#}", e);
                false
            }
        }
    }

    /// Start the repository fetch; the result arrives via `try_recv_projects`.
    pub fn request_projects(&self) {
        services::request_project_fetch(
            &self.project_service_tx,
            self.runtime.handle(),
            self.github_client(),
        );
    }

    pub fn try_recv_projects(&self) -> Option<ProjectServiceMessage> {
        self.project_service_rx.lock().try_recv().ok()
    }
}
