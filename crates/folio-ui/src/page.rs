//! The portfolio page state container.
//!
//! All state lives in one `PortfolioPage`; it changes only through
//! [`PortfolioPage::handle`] (user and timer events) and
//! [`PortfolioPage::apply_weather`] / [`PortfolioPage::apply_projects`]
//! (fetch results).

use std::time::Instant;

use chrono::Local;
use folio_core::{AppError, Fetched};
use folio_services::{ContactField, Preferences, ProjectFeed, Theme, ACKNOWLEDGEMENT};
use folio_weather::{ForecastResponse, WeatherSnapshot};

use crate::app_services::AppServices;
use crate::models::{ContactModel, ProjectModel, VisitorModel, WeatherModel};
use crate::services::{ProjectServiceMessage, WeatherServiceMessage};

/// Discrete page events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ToggleTheme,
    SetTheme(Theme),
    /// A filter control was clicked ("all" or a category)
    SelectFilter(String),
    /// Visitor name supplied by the entry link
    VisitorFromLink(String),
    FieldInput { field: ContactField, value: String },
    FieldBlur(ContactField),
    SubmitForm,
    /// Periodic one-second tick
    Tick(Instant),
}

/// Something the page wants shown once, outside its regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
}

pub struct PortfolioPage {
    pub(crate) visitor: VisitorModel,
    pub(crate) weather: WeatherModel,
    pub(crate) projects: ProjectModel,
    pub(crate) contact: ContactModel,
}

impl PortfolioPage {
    pub fn new(
        preferences: Preferences,
        location_name: impl Into<String>,
        filter_categories: Vec<String>,
        started_at: Instant,
    ) -> Self {
        Self {
            visitor: VisitorModel::new(preferences, started_at),
            weather: WeatherModel::new(location_name),
            projects: ProjectModel::new(filter_categories),
            contact: ContactModel::new(),
        }
    }

    /// Apply one event
    pub fn handle(&mut self, event: UiEvent) -> Option<Notice> {
        match event {
            UiEvent::ToggleTheme => self.visitor.toggle_theme(),
            UiEvent::SetTheme(theme) => self.visitor.set_theme(theme),
            UiEvent::SelectFilter(value) => self.projects.select(&value),
            UiEvent::VisitorFromLink(name) => {
                self.visitor.adopt_visitor_name(&name);
            }
            UiEvent::FieldInput { field, value } => self.contact.set_value(field, &value),
            UiEvent::FieldBlur(field) => {
                self.contact.blur(field);
            }
            UiEvent::SubmitForm => {
                let submission = self.contact.submit()?;
                self.visitor.adopt_visitor_name(&submission.name);
                return Some(Notice::Alert(ACKNOWLEDGEMENT.to_string()));
            }
            UiEvent::Tick(now) => self.visitor.tick(now),
        }
        None
    }

    pub fn apply_weather(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::FetchDone(Ok(fetched)) => self.weather.update(fetched),
            WeatherServiceMessage::FetchDone(Err(e)) => {
                let reason = e.to_string();
                let app_err = AppError::from(e);
                tracing::error!("Error fetching weather: {} ({})", reason, app_err.user_message());
                let now = Local::now().naive_local();
                let snapshot = WeatherSnapshot::from_response(&ForecastResponse::fallback(now), now);
                self.weather.update(Fetched::fallback(snapshot, reason));
            }
        }
    }

    pub fn apply_projects(&mut self, message: ProjectServiceMessage) {
        match message {
            ProjectServiceMessage::FetchDone(Ok(feed)) => self.projects.set_feed(feed),
            ProjectServiceMessage::FetchDone(Err(e)) => {
                let reason = e.to_string();
                let app_err = AppError::from(e);
                tracing::error!(
                    "Error fetching GitHub projects: {} ({})",
                    reason,
                    app_err.user_message()
                );
                self.projects.set_feed(ProjectFeed::Unavailable { reason });
            }
        }
    }

    /// Drain any finished fetches; returns how many results were applied
    pub fn poll(&mut self, services: &AppServices) -> usize {
        let mut applied = 0;
        while let Some(message) = services.try_recv_weather() {
            self.apply_weather(message);
            applied += 1;
        }
        while let Some(message) = services.try_recv_projects() {
            self.apply_projects(message);
            applied += 1;
        }
        applied
    }

    /// Both remote regions have received a result
    pub fn is_loaded(&self) -> bool {
        !self.weather.is_loading() && !self.projects.is_loading()
    }

    pub fn visitor(&self) -> &VisitorModel {
        &self.visitor
    }

    pub fn weather(&self) -> &WeatherModel {
        &self.weather
    }

    pub fn projects(&self) -> &ProjectModel {
        &self.projects
    }

    pub fn contact(&self) -> &ContactModel {
        &self.contact
    }
}
