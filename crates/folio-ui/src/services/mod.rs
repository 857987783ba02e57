pub mod project_service;
pub mod weather_service;

pub use project_service::{
    request_fetch as request_project_fetch, ProjectError, ProjectServiceMessage,
};
pub use weather_service::{
    request_fetch as request_weather_fetch, WeatherError, WeatherServiceMessage,
};
