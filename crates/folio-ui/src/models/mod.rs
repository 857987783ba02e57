pub mod contact_model;
pub mod project_model;
pub mod visitor_model;
pub mod weather_model;

pub use contact_model::ContactModel;
pub use project_model::ProjectModel;
pub use visitor_model::VisitorModel;
pub use weather_model::WeatherModel;
