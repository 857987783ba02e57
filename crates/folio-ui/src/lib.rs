//! Page layer for Folio: state container, background services and views.

pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod page;
pub mod services;
pub mod view;

pub use app_services::AppServices;
pub use page::{Notice, PortfolioPage, UiEvent};
pub use view::{page_view, render_text, PageView};
