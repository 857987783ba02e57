//! Weather backend: async weather fetching.
//! Network work runs on the services runtime; the result is sent via mpsc.

use std::sync::Arc;

use folio_core::Fetched;
use folio_weather::{WeatherProvider, WeatherSnapshot};

/// Error type for weather operations
#[derive(Debug, Clone)]
pub enum WeatherError {
    NotInitialized,
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::NotInitialized => write!(f, "Weather service not initialized"),
        }
    }
}

impl std::error::Error for WeatherError {}

/// Messages sent from async operations back to the page
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of fetching current conditions
    FetchDone(Result<Fetched<WeatherSnapshot>, WeatherError>),
}

/// Request current weather asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &std::sync::mpsc::Sender<WeatherServiceMessage>,
    runtime: &tokio::runtime::Handle,
    provider: Option<Arc<WeatherProvider>>,
) {
    let tx = tx.clone();
    let Some(provider) = provider else {
        let _ = tx.send(WeatherServiceMessage::FetchDone(Err(
            WeatherError::NotInitialized,
        )));
        return;
    };

    runtime.spawn(async move {
        let fetched = provider.fetch_current().await;
        tracing::info!(
            "Weather for {}: {} ({}°C)",
            provider.location_name(),
            fetched.value.description(),
            fetched.value.temperature_celsius
        );
        let _ = tx.send(WeatherServiceMessage::FetchDone(Ok(fetched)));
    });
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn weather_error_display() {
        assert!(format!("{}", WeatherError::NotInitialized).contains("not initialized"));
    }

    #[test]
    fn missing_provider_reports_not_initialized() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let (tx, rx) = std::sync::mpsc::channel();

        request_fetch(&tx, runtime.handle(), None);

        match rx.try_recv().unwrap() {
            WeatherServiceMessage::FetchDone(result) => {
                assert!(matches!(result, Err(WeatherError::NotInitialized)))
            }
        }
    }
}
