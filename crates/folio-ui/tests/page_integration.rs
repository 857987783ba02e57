//! End-to-end page tests: both remote fetches run on the services runtime
//! against wiremock servers and land in one PortfolioPage.

use std::time::{Duration, Instant};

use folio_core::{GitHubConfig, WeatherConfig};
use folio_services::{LocalStore, Preferences};
use folio_ui::view::{ProjectUnit, WeatherView, NO_PROJECTS, PROJECTS_UNAVAILABLE};
use folio_ui::{page_view, render_text, AppServices, PortfolioPage, UiEvent};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo(id: i64, name: &str, topics: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": null,
        "html_url": format!("https://github.com/octocat/{}", name),
        "homepage": null,
        "language": null,
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2026-01-30T12:00:00Z",
        "topics": topics
    })
}

fn page(dir: &tempfile::TempDir) -> PortfolioPage {
    let store = LocalStore::open(&dir.path().join("local_storage.json")).unwrap();
    PortfolioPage::new(
        Preferences::new(store),
        "Dammam",
        vec!["web".to_string(), "cli".to_string(), "mobile".to_string()],
        Instant::now(),
    )
}

fn attach_clients(services: &AppServices, server: &MockServer) {
    let http = reqwest::Client::new();
    services.init_weather_provider(
        http.clone(),
        WeatherConfig {
            api_url: format!("{}/v1/forecast", server.uri()),
            ..WeatherConfig::default()
        },
    );
    assert!(services.init_github_client(
        http,
        &GitHubConfig {
            api_url: server.uri(),
            username: "octocat".to_string(),
            per_page: 6,
        },
    ));
}

fn wait_until_loaded(page: &mut PortfolioPage, services: &AppServices) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !page.is_loaded() {
        assert!(Instant::now() < deadline, "fetches did not finish");
        page.poll(services);
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_page_loads_weather_and_projects() {
    let services = AppServices::new().unwrap();
    let server = services.runtime().block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": { "temperature": 30.0, "weathercode": 3, "windspeed": 4.2 }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                repo(1, "x", &[]),
                repo(2, "y", &["cli"]),
            ])))
            .mount(&server)
            .await;
        server
    });
    attach_clients(&services, &server);

    let dir = tempfile::tempdir().unwrap();
    let mut page = page(&dir);
    services.request_weather();
    services.request_projects();
    wait_until_loaded(&mut page, &services);

    let view = page_view(&page, 2026);
    match &view.weather {
        WeatherView::Card(card) => {
            assert_eq!(card.title, "Weather in Dammam");
            assert_eq!(card.temperature, "30°C");
            assert_eq!(card.description, "Overcast");
            assert_eq!(card.wind, "Wind: 4.2 m/s");
            assert!(card.note.is_none());
        }
        WeatherView::Loading => panic!("weather still loading"),
    }
    assert_eq!(view.projects.len(), 2);

    page.handle(UiEvent::SelectFilter("cli".to_string()));
    let view = page_view(&page, 2026);
    assert_eq!(view.projects.len(), 1);
    match &view.projects[0] {
        ProjectUnit::Card(card) => {
            assert_eq!(card.name, "y");
            assert_eq!(card.description, "No description provided");
            assert_eq!(card.language, "Other");
        }
        other => panic!("expected a card, got {:?}", other),
    }

    page.handle(UiEvent::SelectFilter("mobile".to_string()));
    let view = page_view(&page, 2026);
    assert_eq!(view.projects, vec![ProjectUnit::Empty(NO_PROJECTS.to_string())]);
}

#[test]
fn test_page_survives_both_services_failing() {
    let services = AppServices::new().unwrap();
    let server = services.runtime().block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        server
    });
    attach_clients(&services, &server);

    let dir = tempfile::tempdir().unwrap();
    let mut page = page(&dir);
    services.request_weather();
    services.request_projects();
    wait_until_loaded(&mut page, &services);

    let view = page_view(&page, 2026);
    match &view.weather {
        WeatherView::Card(card) => {
            assert_eq!(card.temperature, "--°C");
            assert_eq!(card.description, "Clear sky");
            assert!(card.note.is_some());
        }
        WeatherView::Loading => panic!("weather still loading"),
    }
    assert_eq!(
        view.projects,
        vec![ProjectUnit::Error(PROJECTS_UNAVAILABLE.to_string())]
    );

    let text = render_text(&view);
    assert!(text.contains("Weather in Dammam"));
    assert!(text.contains(PROJECTS_UNAVAILABLE));
    assert!(text.contains("© 2026"));
}
