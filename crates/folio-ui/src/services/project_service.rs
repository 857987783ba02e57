//! Project backend: async GitHub repository listing.
//! Network work runs on the services runtime; the result is sent via mpsc.

use std::sync::Arc;

use folio_services::{GitHubClient, ProjectFeed};

/// Error type for project operations
#[derive(Debug, Clone)]
pub enum ProjectError {
    NotInitialized,
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::NotInitialized => write!(f, "Project service not initialized"),
        }
    }
}

impl std::error::Error for ProjectError {}

/// Messages sent from async operations back to the page
#[derive(Debug)]
pub enum ProjectServiceMessage {
    /// Result of fetching and normalizing the repository list
    FetchDone(Result<ProjectFeed, ProjectError>),
}

/// Request the repository list asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &std::sync::mpsc::Sender<ProjectServiceMessage>,
    runtime: &tokio::runtime::Handle,
    client: Option<Arc<GitHubClient>>,
) {
    let tx = tx.clone();
    let Some(client) = client else {
        let _ = tx.send(ProjectServiceMessage::FetchDone(Err(
            ProjectError::NotInitialized,
        )));
        return;
    };

    runtime.spawn(async move {
        let feed = ProjectFeed::from_fetched(client.list_public_repos().await);
        let _ = tx.send(ProjectServiceMessage::FetchDone(Ok(feed)));
    });
}
