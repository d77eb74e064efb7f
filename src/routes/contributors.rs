//! Contributors endpoint.
//!
//! GET /api/v1/{owner}/{repo}/contributors
//!
//! Returns a JSON array of author display names from the repository's most
//! recent commits (possibly empty), or 404 with an empty body when the
//! upstream lookup fails for any reason.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::handler::{ContributorLookup, SharedHandler};
use crate::models::ContributorRequest;

pub fn routes(handler: SharedHandler) -> Router {
    Router::new()
        .route("/api/v1/{owner}/{repo}/contributors", get(get_contributors))
        .with_state(handler)
}

async fn get_contributors(
    State(handler): State<SharedHandler>,
    Path((owner, repo)): Path<(String, String)>,
) -> Response {
    let request = ContributorRequest::new(owner, repo);

    match handler.handle(&request).await {
        ContributorLookup::Found(names) => (StatusCode::OK, Json(names)).into_response(),
        ContributorLookup::NotFound | ContributorLookup::ApiError => {
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
