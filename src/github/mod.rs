mod helpers;
pub mod types;

pub use helpers::validate_user;

use reqwest::Client;
use tracing::{debug, error, info};

use types::StarredRepo;

pub const API_BASE: &str = "https://api.github.com";

/// Errors returned by GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("GitHub API rate limit exceeded (unauthenticated limit is 60 requests/hour)")]
    RateLimited,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("GitHub API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid GitHub user: '{0}'")]
    InvalidUser(String),
}

/// Unauthenticated HTTP client for the GitHub REST API v3.
///
/// User parameters are safe for direct URL interpolation because `validate_user`
/// restricts them to `[a-zA-Z0-9-]`.
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");
        self.http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", crate::USER_AGENT)
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, GitHubError> {
        let response = self.request(path).send().await?;
        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            404 => Err(GitHubError::NotFound(path.to_string())),
            429 => Err(GitHubError::RateLimited),
            403 => {
                let remaining = response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok());
                if remaining == Some(0) {
                    Err(GitHubError::RateLimited)
                } else {
                    let message = extract_error_message(&response.text().await.unwrap_or_default());
                    Err(GitHubError::Forbidden(message))
                }
            }
            _ => {
                let message = extract_error_message(
                    &response
                        .text()
                        .await
                        .unwrap_or_else(|_| format!("HTTP {status}")),
                );
                Err(GitHubError::Api {
                    code: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Single page of the user's starred repositories, most recently starred first.
    pub async fn get_starred(
        &self,
        user: &str,
        per_page: u8,
    ) -> Result<Vec<StarredRepo>, GitHubError> {
        self.get_json(&format!("/users/{user}/starred?per_page={per_page}"))
            .await
    }

    /// Like [`get_starred`](Self::get_starred), but logs any failure and yields `None`.
    pub async fn fetch_starred(&self, user: &str, per_page: u8) -> Option<Vec<StarredRepo>> {
        match self.get_starred(user, per_page).await {
            Ok(repos) => {
                info!(user, count = repos.len(), "fetched starred repositories");
                Some(repos)
            }
            Err(e) => {
                error!(user, error = %e, "failed to fetch starred repositories");
                None
            }
        }
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
