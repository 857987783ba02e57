use chrono::{DateTime, Local, NaiveDateTime};
use folio_core::lenient;
use serde::{Deserialize, Serialize};

/// Description used for codes outside the WMO table
pub const UNKNOWN_WEATHER: &str = "Weather data unavailable";

/// Placeholder shown for readings the provider did not supply
pub const UNAVAILABLE: &str = "--";

/// Convert a WMO weather interpretation code to a human-readable description.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn describe_weather_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_WEATHER,
    }
}

/// A numeric reading, or the "unavailable" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reading {
    Value(f64),
    Unavailable,
}

impl Reading {
    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(*v),
            Reading::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Reading::Value(_))
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Unavailable, Reading::Value)
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reading::Value(v) => write!(f, "{}", v),
            Reading::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// `current_weather` block of the Open-Meteo forecast response.
/// Every field is optional and read leniently; gaps and wrong-typed values
/// become sentinels in [`WeatherSnapshot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentWeatherPayload {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub weathercode: Option<i32>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub windspeed: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub time: Option<String>,
}

/// Open-Meteo forecast response (only the parts the dashboard reads)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub current_weather: Option<CurrentWeatherPayload>,
}

impl ForecastResponse {
    /// Payload substituted when the provider cannot be reached: no readings,
    /// clear-sky code, observed "now".
    pub fn fallback(now: NaiveDateTime) -> Self {
        Self {
            current_weather: Some(CurrentWeatherPayload {
                temperature: None,
                weathercode: Some(0),
                windspeed: None,
                time: Some(now.format("%Y-%m-%dT%H:%M:%S").to_string()),
            }),
        }
    }
}

/// Current conditions at the configured location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: Reading,
    pub weather_code: i32,
    pub wind_speed_meters_per_second: Reading,
    pub observed_at: NaiveDateTime,
}

impl WeatherSnapshot {
    /// Build a snapshot from a decoded response. `now` stands in for a
    /// missing or unparsable observation time.
    pub fn from_response(response: &ForecastResponse, now: NaiveDateTime) -> Self {
        let current = response.current_weather.clone().unwrap_or_default();

        Self {
            temperature_celsius: current.temperature.into(),
            weather_code: current.weathercode.unwrap_or(0),
            wind_speed_meters_per_second: current.windspeed.into(),
            observed_at: current
                .time
                .as_deref()
                .and_then(parse_observation_time)
                .unwrap_or(now),
        }
    }

    pub fn description(&self) -> &'static str {
        describe_weather_code(self.weather_code)
    }

    /// True when the temperature is missing, i.e. the card shows fallback data
    pub fn is_fallback(&self) -> bool {
        !self.temperature_celsius.is_available()
    }
}

/// Open-Meteo reports local time without an offset ("2024-05-01T14:00");
/// RFC 3339 is accepted too and converted to local time.
fn parse_observation_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}
