// crates/folio-services/src/project.rs

use chrono::{DateTime, Local};
use folio_core::{FetchSource, Fetched, GitHubError};
use serde::{Deserialize, Serialize};

use crate::github::GitHubRepo;

/// Shown when a repository has no description
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
/// Used when GitHub reports no primary language
pub const DEFAULT_LANGUAGE: &str = "Other";
/// Category for repositories without topics
pub const DEFAULT_CATEGORY: &str = "web";

/// A repository normalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub code_url: String,
    pub live_demo_url: Option<String>,
    pub primary_language: String,
    pub created_at: String,
    pub updated_at: String,
    pub topics: Vec<String>,
    pub category: String,
}

impl ProjectRecord {
    pub fn from_repo(repo: GitHubRepo) -> Self {
        let topics = repo.topics.unwrap_or_default();
        let category = category_for(&topics);

        Self {
            id: repo.id.unwrap_or_default(),
            name: repo.name.unwrap_or_default(),
            description: non_empty(repo.description)
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            code_url: repo.html_url.unwrap_or_default(),
            live_demo_url: non_empty(repo.homepage),
            primary_language: non_empty(repo.language)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            created_at: format_date(repo.created_at.as_deref()),
            updated_at: format_date(repo.updated_at.as_deref()),
            topics,
            category,
        }
    }
}

/// First topic, or [`DEFAULT_CATEGORY`] when there are none
pub fn category_for(topics: &[String]) -> String {
    topics
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Format an RFC 3339 timestamp as a local `M/D/YYYY` date.
/// Unparsable input is returned unchanged.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Local).format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Normalize repositories, preserving input order
pub fn transform(repos: Vec<GitHubRepo>) -> Vec<ProjectRecord> {
    repos.into_iter().map(ProjectRecord::from_repo).collect()
}

/// Decode a listing payload. Only a payload that is not a list is a
/// malformed response. Entries that are not objects are skipped, and fields
/// of the wrong type inside a record fall back to their defaults.
///
/// # Errors
///
/// Returns [`GitHubError::MalformedResponse`] when the payload is not a list.
pub fn parse_listing(payload: serde_json::Value) -> Result<Vec<ProjectRecord>, GitHubError> {
    let items = match payload {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(GitHubError::MalformedResponse(format!(
                "expected a list of repositories, got {}",
                json_kind(&other)
            )));
        }
    };

    let repos = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(
                    "Skipping repository entry {}: {}, not an object",
                    index,
                    json_kind(&item)
                );
                return None;
            }
            match serde_json::from_value::<GitHubRepo>(item) {
                Ok(repo) => Some(repo),
                Err(e) => {
                    tracing::warn!("Skipping repository entry {}: {}", index, e);
                    None
                }
            }
        })
        .collect();

    Ok(transform(repos))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Outcome of one project fetch cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFeed {
    /// Fetch not finished yet
    Loading,
    Loaded(Vec<ProjectRecord>),
    /// The request failed; nothing to show
    Unavailable { reason: String },
    /// The request succeeded but the payload was not a repository list
    Malformed { reason: String },
}

impl ProjectFeed {
    pub fn from_fetched(fetched: Fetched<serde_json::Value>) -> Self {
        if let FetchSource::Fallback { reason } = fetched.source {
            return ProjectFeed::Unavailable { reason };
        }

        match parse_listing(fetched.value) {
            Ok(projects) => ProjectFeed::Loaded(projects),
            Err(e) => {
                tracing::error!("Error fetching GitHub projects: {}", e);
                ProjectFeed::Malformed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Loaded projects; empty for every other state
    pub fn projects(&self) -> &[ProjectRecord] {
        match self {
            ProjectFeed::Loaded(projects) => projects,
            _ => &[],
        }
    }
}
