//! Serde mirror of the GitHub commit-listing payload.
//!
//! Only the fields this service reads are modelled; everything else in the
//! REST response is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry from `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}
