//! GitHub Contributors API - author names from a repository's recent commits.
//!
//! One endpoint: `GET /api/v1/{owner}/{repo}/contributors`. The service asks
//! the GitHub REST API for a single page of the repository's most recent
//! commits and returns the author display names as a JSON array. Any upstream
//! failure collapses to a bodyless 404.

pub mod github;
pub mod handler;
pub mod models;
pub mod routes;
