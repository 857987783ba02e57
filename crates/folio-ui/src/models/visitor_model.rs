use std::time::Instant;

use folio_core::{AppError, StorageError};
use folio_services::{greeting, Preferences, Theme};

fn report_persist_failure(what: &str, e: StorageError) {
    let app_err = AppError::from(e);
    tracing::warn!("Failed to persist {}: {} ({})", what, app_err, app_err.user_message());
}

/// Theme, returning-visitor name and visit timer
#[derive(Debug)]
pub struct VisitorModel {
    preferences: Preferences,
    theme: Theme,
    visitor_name: String,
    visit_started_at: Instant,
    visit_duration_secs: u64,
}

impl VisitorModel {
    /// Read persisted preferences and start the visit clock
    pub fn new(preferences: Preferences, started_at: Instant) -> Self {
        let theme = preferences.theme();
        let visitor_name = preferences.visitor_name().to_string();
        Self {
            preferences,
            theme,
            visitor_name,
            visit_started_at: started_at,
            visit_duration_secs: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.preferences.set_theme(theme) {
            report_persist_failure("theme", e);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    pub fn visitor_name(&self) -> &str {
        &self.visitor_name
    }

    /// Adopt `name` only when no visitor name is known yet
    pub fn adopt_visitor_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || !self.visitor_name.is_empty() {
            return false;
        }
        self.visitor_name = name.to_string();
        if let Err(e) = self.preferences.set_visitor_name(name) {
            report_persist_failure("visitor name", e);
        }
        tracing::info!("Greeting visitor {}", self.visitor_name);
        true
    }

    pub fn greeting(&self) -> Option<String> {
        greeting(&self.visitor_name)
    }

    /// One-second tick: recompute whole seconds since the visit began
    pub fn tick(&mut self, now: Instant) {
        self.visit_duration_secs = now.saturating_duration_since(self.visit_started_at).as_secs();
    }

    pub fn visit_duration_secs(&self) -> u64 {
        self.visit_duration_secs
    }
}
