//! Pure presentation: page state in, renderable description out.
//!
//! Nothing here touches state or I/O; [`render_text`] is the terminal sink.

use std::fmt::Write as _;

use folio_services::{ContactField, ProjectFeed, ProjectRecord};
use folio_weather::WeatherSnapshot;

use crate::page::PortfolioPage;

pub const NO_PROJECTS: &str = "No projects found in this category.";
pub const PROJECTS_UNAVAILABLE: &str = "Unable to load projects. Please try again later.";
pub const PROJECTS_MALFORMED: &str =
    "Project list came back in an unexpected format. Please try again later.";
pub const FALLBACK_WEATHER_NOTE: &str = "Using fallback weather data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub theme: String,
    pub theme_icon: String,
    pub greeting: Option<String>,
    pub weather: WeatherView,
    pub filters: Vec<FilterButton>,
    pub projects: Vec<ProjectUnit>,
    pub form: Vec<FormFieldView>,
    pub visit_duration_secs: u64,
    pub footer_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherView {
    Loading,
    Card(WeatherCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    pub title: String,
    pub temperature: String,
    pub description: String,
    pub wind: String,
    pub updated: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub value: String,
    pub active: bool,
}

/// One display unit of the project region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectUnit {
    Card(ProjectCard),
    Loading,
    Empty(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub language: String,
    pub updated: String,
    pub code_url: String,
    pub live_demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub field: ContactField,
    pub value: String,
    pub error: Option<String>,
}

pub fn weather_card(location_name: &str, snapshot: &WeatherSnapshot) -> WeatherCard {
    WeatherCard {
        title: format!("Weather in {}", location_name),
        temperature: format!("{}°C", snapshot.temperature_celsius),
        description: snapshot.description().to_string(),
        wind: format!("Wind: {} m/s", snapshot.wind_speed_meters_per_second),
        updated: format!("Updated: {}", snapshot.observed_at.format("%-I:%M:%S %p")),
        note: snapshot
            .is_fallback()
            .then(|| FALLBACK_WEATHER_NOTE.to_string()),
    }
}

pub fn project_card(project: &ProjectRecord) -> ProjectCard {
    ProjectCard {
        name: project.name.clone(),
        description: project.description.clone(),
        language: project.primary_language.clone(),
        updated: format!("Updated: {}", project.updated_at),
        code_url: project.code_url.clone(),
        live_demo_url: project.live_demo_url.clone(),
    }
}

/// N displayed projects become N cards; zero becomes one notice unit
pub fn project_units(feed: &ProjectFeed, displayed: &[ProjectRecord]) -> Vec<ProjectUnit> {
    match feed {
        ProjectFeed::Loading => vec![ProjectUnit::Loading],
        ProjectFeed::Unavailable { .. } => {
            vec![ProjectUnit::Error(PROJECTS_UNAVAILABLE.to_string())]
        }
        ProjectFeed::Malformed { .. } => vec![ProjectUnit::Error(PROJECTS_MALFORMED.to_string())],
        ProjectFeed::Loaded(_) if displayed.is_empty() => {
            vec![ProjectUnit::Empty(NO_PROJECTS.to_string())]
        }
        ProjectFeed::Loaded(_) => displayed
            .iter()
            .map(|p| ProjectUnit::Card(project_card(p)))
            .collect(),
    }
}

pub fn page_view(page: &PortfolioPage, footer_year: i32) -> PageView {
    let visitor = page.visitor();
    let weather = match page.weather().snapshot() {
        Some(snapshot) => WeatherView::Card(weather_card(page.weather().location_name(), snapshot)),
        None => WeatherView::Loading,
    };
    let projects = page.projects();

    PageView {
        theme: visitor.theme().as_str().to_string(),
        theme_icon: visitor.theme().icon_name().to_string(),
        greeting: visitor.greeting(),
        weather,
        filters: projects
            .filter_controls()
            .into_iter()
            .map(|(value, active)| FilterButton { value, active })
            .collect(),
        projects: project_units(projects.feed(), projects.displayed()),
        form: ContactField::all()
            .iter()
            .map(|field| FormFieldView {
                field: *field,
                value: page.contact().value(*field).to_string(),
                error: page.contact().error(*field).map(str::to_string),
            })
            .collect(),
        visit_duration_secs: visitor.visit_duration_secs(),
        footer_year,
    }
}

/// Plain-text rendering for the terminal
pub fn render_text(view: &PageView) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_page(&mut out, view);
    out
}

fn write_page(out: &mut String, view: &PageView) -> std::fmt::Result {
    writeln!(out, "[theme: {} | toggle: {}]", view.theme, view.theme_icon)?;
    if let Some(greeting) = &view.greeting {
        writeln!(out, "{}", greeting)?;
    }
    writeln!(out)?;

    match &view.weather {
        WeatherView::Loading => writeln!(out, "Loading weather...")?,
        WeatherView::Card(card) => {
            writeln!(out, "{}", card.title)?;
            writeln!(out, "  {}  {}", card.temperature, card.description)?;
            writeln!(out, "  {}", card.wind)?;
            writeln!(out, "  {}", card.updated)?;
            if let Some(note) = &card.note {
                writeln!(out, "  ({})", note)?;
            }
        }
    }
    writeln!(out)?;

    let filters: Vec<String> = view
        .filters
        .iter()
        .map(|f| {
            if f.active {
                format!("[{}]", f.value)
            } else {
                f.value.clone()
            }
        })
        .collect();
    writeln!(out, "Projects: {}", filters.join(" "))?;

    for unit in &view.projects {
        match unit {
            ProjectUnit::Card(card) => {
                writeln!(out, "  * {} ({})", card.name, card.language)?;
                writeln!(out, "    {}", card.description)?;
                writeln!(out, "    {}", card.updated)?;
                writeln!(out, "    Code: {}", card.code_url)?;
                if let Some(demo) = &card.live_demo_url {
                    writeln!(out, "    Live Demo: {}", demo)?;
                }
            }
            ProjectUnit::Loading => writeln!(out, "  Loading projects...")?,
            ProjectUnit::Empty(message) | ProjectUnit::Error(message) => {
                writeln!(out, "  {}", message)?
            }
        }
    }

    let form_errors: Vec<&FormFieldView> = view.form.iter().filter(|f| f.error.is_some()).collect();
    if !form_errors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Contact form:")?;
        for field in form_errors {
            if let Some(error) = &field.error {
                writeln!(out, "  {}: {}", field.field.label(), error)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Visit duration: {}s", view.visit_duration_secs)?;
    writeln!(out, "© {}", view.footer_year)?;
    Ok(())
}
