//! firstones HTTP server.
//!
//! - `GET  /`: HTML form with the rendered words
//! - `GET  /svg`, `PUT /svg`: the SVG document
//!
//! Environment: `FIRSTONES_BIND` (default `0.0.0.0`), `FIRSTONES_PORT`
//! (default `8080`), `FIRSTONES_CONFIG` (optional TOML configuration).
//!
//! Build and run: `cargo run --features server --bin firstones-server`

use miette::{IntoDiagnostic, Result};

use firstones::engine::Engine;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let bind = std::env::var("FIRSTONES_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("FIRSTONES_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{bind}:{port}");

    // Tables must be complete before the first request is accepted.
    let config = std::env::var_os("FIRSTONES_CONFIG");
    let engine = Engine::open(config.as_deref().map(std::path::Path::new))?;
    tracing::info!(glyphs = engine.registry().len(), "engine ready");

    firstones::server::serve(engine, &addr)
        .await
        .into_diagnostic()
}
