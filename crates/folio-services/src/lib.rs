pub mod contact;
pub mod filter;
pub mod github;
pub mod local_store;
pub mod preferences;
pub mod project;

pub use contact::{ContactField, ContactForm, ContactSubmission, ACKNOWLEDGEMENT};
pub use filter::{select, FilterSelection};
pub use github::{GitHubClient, GitHubRepo};
pub use local_store::LocalStore;
pub use preferences::{greeting, Preferences, Theme};
pub use project::{ProjectFeed, ProjectRecord};
