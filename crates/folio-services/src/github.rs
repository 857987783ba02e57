// crates/folio-services/src/github.rs

use anyhow::{Context, Result};
use folio_core::{fetch_with_fallback, lenient, Fetched, GitHubConfig};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use url::Url;

/// Public repository record as returned by `GET /users/{owner}/repos`.
/// Every field is optional and read leniently: a missing, null or
/// wrong-typed value is `None`, so one odd record never fails the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubRepo {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub topics: Option<Vec<String>>,
}

/// Read-only client for one owner's public repositories
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: Url,
    client: Client,
    username: String,
    per_page: u32,
}

impl GitHubClient {
    /// Create a client for the configured owner
    pub fn new(client: Client, config: &GitHubConfig) -> Result<Self> {
        // Url::join drops the last path segment unless it ends with '/'
        let mut base = config.api_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).context("Invalid GitHub API URL")?;

        Ok(Self {
            base_url,
            client,
            username: config.username.clone(),
            per_page: config.per_page,
        })
    }

    /// Build request with GitHub headers
    fn build_request(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    fn repos_url(&self) -> Result<Url> {
        self.base_url
            .join(&format!("users/{}/repos", self.username))
            .context("Failed to build repos URL")
    }

    /// Fetch the most recently updated page of repositories as raw JSON.
    ///
    /// The payload shape is checked later by the project transform; a failed
    /// request yields an empty list marked as fallback.
    pub async fn list_public_repos(&self) -> Fetched<serde_json::Value> {
        let empty = || serde_json::Value::Array(Vec::new());

        let url = match self.repos_url() {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Error fetching GitHub projects: {:#}", e);
                return Fetched::fallback(empty(), e.to_string());
            }
        };

        tracing::debug!("Fetching repositories for {}", self.username);
        let per_page = self.per_page.to_string();
        let request = self.build_request(
            self.client
                .get(url)
                .query(&[("sort", "updated"), ("per_page", per_page.as_str())]),
        );

        let fetched = fetch_with_fallback("GitHub projects", request, empty).await;
        if let Some(items) = fetched.value.as_array().filter(|_| !fetched.is_fallback()) {
            tracing::info!("Fetched {} repositories", items.len());
        }
        fetched
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_repo_deserialization() {
        let json = r#"{
            "id": 123,
            "name": "test-repo",
            "full_name": "user/test-repo",
            "description": "A test repo",
            "html_url": "https://github.com/user/test-repo",
            "homepage": "https://user.github.io/test-repo",
            "language": "Rust",
            "created_at": "2026-01-21T00:00:00Z",
            "updated_at": "2026-01-22T00:00:00Z",
            "topics": ["cli", "rust"]
        }"#;
        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name.as_deref(), Some("test-repo"));
        assert_eq!(repo.topics.unwrap_or_default(), vec!["cli", "rust"]);
    }

    #[test]
    fn test_sparse_repo_deserialization() {
        let repo: GitHubRepo =
            serde_json::from_str(r#"{"id": 1, "description": null, "topics": null}"#).unwrap();
        assert_eq!(repo.id, Some(1));
        assert!(repo.name.is_none());
        assert!(repo.topics.is_none());
    }

    #[test]
    fn test_wrong_typed_fields_read_as_missing() {
        let repo: GitHubRepo = serde_json::from_str(
            r#"{"id": "7", "name": "odd", "description": 5, "language": ["Rust"], "topics": "cli"}"#,
        )
        .unwrap();
        assert!(repo.id.is_none());
        assert_eq!(repo.name.as_deref(), Some("odd"));
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
        assert!(repo.topics.is_none());
    }

    #[test]
    fn test_repos_url_keeps_base_path() {
        let config = GitHubConfig {
            api_url: "http://localhost:9000/api/v3".to_string(),
            username: "octocat".to_string(),
            per_page: 6,
        };
        let client = GitHubClient::new(Client::new(), &config).unwrap();
        assert_eq!(
            client.repos_url().unwrap().as_str(),
            "http://localhost:9000/api/v3/users/octocat/repos"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = GitHubConfig {
            api_url: "not a url".to_string(),
            ..GitHubConfig::default()
        };
        assert!(GitHubClient::new(Client::new(), &config).is_err());
    }
}
