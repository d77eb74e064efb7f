//! End-to-end tests: real listener, real outbound HTTP against a mock
//! GitHub API server.

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use gh_contributors::github::GitHubClient;
use gh_contributors::handler::ContributorHandler;
use gh_contributors::routes;

/// Starts the service on an ephemeral port, pointed at the given API root.
/// Returns the service's base URL.
async fn spawn_app(github_url: String) -> String {
    let client = GitHubClient::with_base_url(github_url, None).unwrap();
    let handler = Arc::new(ContributorHandler::new(Arc::new(client)));
    let app = routes::create_router(handler);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn commit_json(author: &str) -> serde_json::Value {
    json!({
        "sha": "4c4a69257d0bb0a9b2ff23e792d23cf2eb4fbe7a",
        "commit": {
            "message": "update readme",
            "author": {
                "name": author,
                "email": "test@test.com",
                "date": "2024-05-01T12:00:00Z"
            }
        }
    })
}

#[tokio::test]
async fn returns_ok_and_authors_when_found() {
    let server = MockServer::start();
    let commits_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/octocat/hello-world/commits")
            .query_param("page", "1")
            .query_param("per_page", "30");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                commit_json("Author1"),
                commit_json("Author2"),
                commit_json("Author3"),
            ]));
    });

    let app_url = spawn_app(server.base_url()).await;
    let response = reqwest::get(format!("{}/api/v1/octocat/hello-world/contributors", app_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let authors: Vec<String> = response.json().await.unwrap();
    assert_eq!(authors, vec!["Author1", "Author2", "Author3"]);

    // Exactly one upstream call, with the page directive above
    commits_mock.assert();
}

#[tokio::test]
async fn returns_empty_array_for_repository_with_no_commits() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/octocat/empty/commits");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([]));
    });

    let app_url = spawn_app(server.base_url()).await;
    let response = reqwest::get(format!("{}/api/v1/octocat/empty/contributors", app_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let authors: Vec<String> = response.json().await.unwrap();
    assert!(authors.is_empty());
}

#[tokio::test]
async fn returns_not_found_when_upstream_says_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/nobody/nothing/commits");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "Not Found"}));
    });

    let app_url = spawn_app(server.base_url()).await;
    let response = reqwest::get(format!("{}/api/v1/nobody/nothing/contributors", app_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn returns_not_found_when_upstream_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/octocat/hello-world/commits");
        then.status(500);
    });

    let app_url = spawn_app(server.base_url()).await;
    let response = reqwest::get(format!("{}/api/v1/octocat/hello-world/contributors", app_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn returns_not_found_on_malformed_upstream_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/octocat/hello-world/commits");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{\"not\": \"a list\"}");
    });

    let app_url = spawn_app(server.base_url()).await;
    let response = reqwest::get(format!("{}/api/v1/octocat/hello-world/contributors", app_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn path_segments_are_forwarded_verbatim() {
    let owner = "0a1b2c3d-4e5f-6071-8293-a4b5c6d7e8f9";
    let repo = "f9e8d7c6-b5a4-4938-8716-05f4e3d2c1b0";

    let server = MockServer::start();
    let commits_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/repos/{}/{}/commits", owner, repo));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([commit_json("Author1")]));
    });

    let app_url = spawn_app(server.base_url()).await;
    let response = reqwest::get(format!("{}/api/v1/{}/{}/contributors", app_url, owner, repo))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    commits_mock.assert();
}

#[tokio::test]
async fn unknown_paths_are_not_routed() {
    let server = MockServer::start();
    let app_url = spawn_app(server.base_url()).await;

    let response = reqwest::get(format!("{}/api/v1/contributors", app_url))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
