/// Commits inspected per lookup when the caller does not say otherwise.
pub const DEFAULT_REQUIRED_COUNT: u32 = 30;

/// A single contributor lookup: which repository, and how many recent
/// commits to inspect. Built once per inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorRequest {
    pub owner: String,
    pub repo: String,
    pub required_count: u32,
}

impl ContributorRequest {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::with_count(owner, repo, DEFAULT_REQUIRED_COUNT)
    }

    pub fn with_count(
        owner: impl Into<String>,
        repo: impl Into<String>,
        required_count: u32,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            required_count,
        }
    }
}
