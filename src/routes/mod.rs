//! API route handlers - maps HTTP endpoints to contributor lookups.
//!
//! - `contributors`: author names from a repository's recent commits
//!   (GET /api/v1/{owner}/{repo}/contributors)

pub mod contributors;

use axum::Router;

use crate::handler::SharedHandler;

pub fn create_router(handler: SharedHandler) -> Router {
    Router::new().merge(contributors::routes(handler))
}
