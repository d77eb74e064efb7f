//! Outbound GitHub REST client.
//!
//! `ListCommits` is the seam the contributor handler depends on; the real
//! implementation fetches exactly one page of recent commits per call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::github::model::CommitRecord;

const GITHUB_API_URL: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent header
const USER_AGENT: &str = "gh-contributors";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("repository not found")]
    NotFound,

    #[error("rate limited by the GitHub API")]
    RateLimited,

    #[error("GitHub API returned status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed commit listing: {0}")]
    Malformed(String),
}

/// Page-limited commit listing as offered by the remote source host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListCommits: Send + Sync {
    /// Returns up to `per_page` most recent commits for `owner/repo`.
    /// Fetches exactly one page; no follow-up requests are made.
    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<CommitRecord>, GitHubError>;
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self, GitHubError> {
        Self::with_base_url(GITHUB_API_URL, token)
    }

    /// Points the client at an alternate API root (GitHub Enterprise, or a
    /// mock server in tests). Fails if the underlying HTTP client cannot be
    /// built; a client without the User-Agent header would be rejected
    /// upstream anyway.
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }
}

#[async_trait]
impl ListCommits for GitHubClient {
    async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<CommitRecord>, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/commits?page=1&per_page={}",
            self.base_url, owner, repo, per_page
        );
        debug!("GET {}", url);

        let mut builder = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("token {}", token));
        }

        let response = builder.send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(GitHubError::NotFound),
            StatusCode::FORBIDDEN if is_rate_limited(&response) => {
                return Err(GitHubError::RateLimited);
            }
            status if !status.is_success() => return Err(GitHubError::Status(status.as_u16())),
            _ => {}
        }

        response
            .json::<Vec<CommitRecord>>()
            .await
            .map_err(|e| GitHubError::Malformed(e.to_string()))
    }
}

fn is_rate_limited(response: &Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "0")
}
