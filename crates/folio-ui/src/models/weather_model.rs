use folio_core::Fetched;
use folio_weather::WeatherSnapshot;

/// Weather card state
#[derive(Debug, Clone)]
pub struct WeatherModel {
    location_name: String,
    snapshot: Option<WeatherSnapshot>,
    from_fallback: bool,
}

impl WeatherModel {
    pub fn new(location_name: impl Into<String>) -> Self {
        Self {
            location_name: location_name.into(),
            snapshot: None,
            from_fallback: false,
        }
    }

    pub fn update(&mut self, fetched: Fetched<WeatherSnapshot>) {
        self.from_fallback = fetched.is_fallback();
        self.snapshot = Some(fetched.value);
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// True when the last fetch failed and the fallback was substituted
    pub fn from_fallback(&self) -> bool {
        self.from_fallback
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }
}
