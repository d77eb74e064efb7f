//! GitHub Contributors API - author names from a repository's recent commits
//!
//! # Usage
//! ```bash
//! gh-contributors                    # Serve on 127.0.0.1:3001
//! gh-contributors --port 8080        # Custom port
//! GITHUB_TOKEN=... gh-contributors   # Authenticated upstream calls
//! ```

use std::sync::Arc;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gh_contributors::github::GitHubClient;
use gh_contributors::handler::ContributorHandler;
use gh_contributors::routes;

/// Serve contributor names for GitHub repositories
#[derive(Parser)]
#[command(name = "gh-contributors")]
#[command(about = "Author names from a repository's recent commits", long_about = None)]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = "https://api.github.com")]
    api_url: String,

    /// Token for authenticated GitHub API calls
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let authenticated = cli.token.is_some();
    let client = GitHubClient::with_base_url(&cli.api_url, cli.token)?;
    let handler = Arc::new(ContributorHandler::new(Arc::new(client)));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Bind to the port
    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to port {}: {}", cli.port, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    // Print startup message
    println!();
    println!("  GitHub Contributors API");
    println!();
    println!("  Server:   http://{}", addr);
    println!("  Upstream: {}", cli.api_url);
    println!(
        "  Auth:     {}",
        if authenticated { "token" } else { "anonymous" }
    );
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    // Set up graceful shutdown
    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        println!("\n  Shutting down...");
    };

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
