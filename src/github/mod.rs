pub mod client;
pub mod model;

pub use client::{GitHubClient, GitHubError, ListCommits};
pub use model::{CommitAuthor, CommitDetail, CommitRecord};
