use crate::services::project_service::ProjectError;
use folio_core::{AppError, GitHubError};

impl From<ProjectError> for AppError {
    fn from(e: ProjectError) -> Self {
        match e {
            ProjectError::NotInitialized => AppError::GitHub(GitHubError::ApiError {
                status: 0,
                message: e.to_string(),
            }),
        }
    }
}
