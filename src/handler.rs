//! Contributor lookup - one upstream call, commits projected to author names.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::github::{GitHubError, ListCommits};
use crate::models::ContributorRequest;

/// Outcome of a contributor lookup.
///
/// `NotFound` and `ApiError` both render as a bodyless 404; the split exists
/// so missing repositories and upstream faults can be logged apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributorLookup {
    Found(Vec<String>),
    NotFound,
    ApiError,
}

pub struct ContributorHandler {
    client: Arc<dyn ListCommits>,
}

pub type SharedHandler = Arc<ContributorHandler>;

impl ContributorHandler {
    pub fn new(client: Arc<dyn ListCommits>) -> Self {
        Self { client }
    }

    /// Fetches a single page of recent commits and returns each commit's
    /// author display name in the order the API provided. An existing
    /// repository with no commits yields `Found` with an empty list.
    pub async fn handle(&self, request: &ContributorRequest) -> ContributorLookup {
        let commits = self
            .client
            .list_commits(&request.owner, &request.repo, request.required_count)
            .await;

        match commits {
            Ok(commits) => ContributorLookup::Found(
                commits
                    .into_iter()
                    .map(|record| record.commit.author.name)
                    .collect(),
            ),
            Err(GitHubError::NotFound) => {
                debug!("{}/{} not found upstream", request.owner, request.repo);
                ContributorLookup::NotFound
            }
            Err(e) => {
                warn!(
                    "commit listing for {}/{} failed: {}",
                    request.owner, request.repo, e
                );
                ContributorLookup::ApiError
            }
        }
    }
}
