use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Datelike;
use clap::Parser;

use folio_services::{ContactField, LocalStore, Preferences};
use folio_ui::{page_view, render_text, AppServices, Notice, PortfolioPage, UiEvent};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Personal portfolio dashboard: weather, GitHub projects and a contact form
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Visitor name, as if supplied by the entry link
    #[arg(long)]
    name: Option<String>,

    /// Project filter to apply ("all" or a category)
    #[arg(long)]
    filter: Option<String>,

    /// Flip the persisted theme before rendering
    #[arg(long)]
    toggle_theme: bool,

    /// Keep the visit timer running for this many seconds before printing
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    watch: u64,

    /// Contact form: sender name
    #[arg(long)]
    contact_name: Option<String>,

    /// Contact form: sender email
    #[arg(long)]
    contact_email: Option<String>,

    /// Contact form: message body
    #[arg(long)]
    contact_message: Option<String>,
}

impl Cli {
    fn contact_fields(&self) -> Vec<(ContactField, String)> {
        [
            (ContactField::Name, &self.contact_name),
            (ContactField::Email, &self.contact_email),
            (ContactField::Message, &self.contact_message),
        ]
        .into_iter()
        .map(|(field, value)| (field, value.clone().unwrap_or_default()))
        .collect()
    }

    fn submits_contact(&self) -> bool {
        self.contact_name.is_some() || self.contact_email.is_some() || self.contact_message.is_some()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    folio_core::init()?;

    let mut app = folio_core::App::new()?;
    app.initialize()?;
    let config = app.config_arc();

    tracing::info!("Folio started");

    let services = AppServices::new()?;
    services.init_weather_provider(app.http_client(), config.weather.clone());
    services.init_github_client(app.http_client(), &config.github);
    services.request_weather();
    services.request_projects();

    let store = LocalStore::open(&config.local_storage_path())?;
    let started_at = Instant::now();
    let mut page = PortfolioPage::new(
        Preferences::new(store),
        config.weather.location_name.clone(),
        config.ui.filter_categories.clone(),
        started_at,
    );

    let mut events = Vec::new();
    if let Some(name) = &cli.name {
        events.push(UiEvent::VisitorFromLink(name.clone()));
    }
    if cli.toggle_theme {
        events.push(UiEvent::ToggleTheme);
    }
    if let Some(filter) = &cli.filter {
        events.push(UiEvent::SelectFilter(filter.clone()));
    }
    if cli.submits_contact() {
        for (field, value) in cli.contact_fields() {
            events.push(UiEvent::FieldInput { field, value });
        }
        events.push(UiEvent::SubmitForm);
    }
    for event in events {
        if let Some(Notice::Alert(message)) = page.handle(event) {
            println!("{}", message);
        }
    }

    let watch = Duration::from_secs(cli.watch);
    let mut last_tick = started_at;
    loop {
        page.poll(&services);

        let now = Instant::now();
        if now.duration_since(last_tick) >= TICK_INTERVAL {
            page.handle(UiEvent::Tick(now));
            last_tick = now;
        }

        if page.is_loaded() && now.duration_since(started_at) >= watch {
            page.handle(UiEvent::Tick(now));
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    let view = page_view(&page, chrono::Local::now().year());
    print!("{}", render_text(&view));

    app.shutdown()?;

    Ok(())
}
