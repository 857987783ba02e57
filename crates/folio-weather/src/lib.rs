//! Weather feed for the Folio dashboard
//!
//! Fetches current conditions from the Open-Meteo API for a fixed location
//! and maps WMO weather codes to descriptions.

pub mod provider;
pub mod types;

pub use provider::WeatherProvider;
pub use types::*;
