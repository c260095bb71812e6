//! StudyDesk asset host
//!
//! Serves the static site over plain HTTP GET: the pages, the two shared
//! fragments the client composes into every page, and the compiled WASM
//! bundle. There is no API beyond health probes.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (fragments present)
//! - `GET /health` - Full health status
//! - `GET /*` - Files under `site_dir` (`index.html` for directories)
//!
//! # Example
//!
//! ```rust,no_run
//! use studydesk::config::ServerConfig;
//! use studydesk::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(AppState::new(ServerConfig::default())).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let site = ServeDir::new(&state.config.site_dir).append_index_html_on_directories(true);

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the asset host
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.addr();
    let site_dir = state.config.site_dir.clone();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("StudyDesk serving {:?} on http://{}", site_dir, addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("StudyDesk shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Welcome</h1>").unwrap();
        std::fs::write(dir.path().join("dashboard.html"), "<div id=\"sidebar-container\"></div>").unwrap();
        std::fs::write(dir.path().join("_sidebar.html"), "<nav class=\"sidebar-nav\"></nav>").unwrap();
        std::fs::write(dir.path().join("_header.html"), "<header></header>").unwrap();

        let config = ServerConfig {
            site_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        (build_router(AppState::new(config)), dir)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_serves_fragment() {
        let (app, _dir) = create_test_app();

        let response = get(app, "/_sidebar.html").await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<nav class=\"sidebar-nav\"></nav>");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (app, _dir) = create_test_app();

        let response = get(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>Welcome</h1>");
    }

    #[tokio::test]
    async fn test_unknown_file_is_404() {
        let (app, _dir) = create_test_app();

        let response = get(app, "/missing.html").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_routes() {
        let (app, _dir) = create_test_app();

        for uri in ["/health/live", "/health/ready", "/health"] {
            let response = get(app.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_ready_fails_without_fragments() {
        let (app, dir) = create_test_app();
        std::fs::remove_file(dir.path().join("_header.html")).unwrap();

        let response = get(app, "/health/ready").await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_site_pages_preload_bundle() {
        let config = ServerConfig {
            site_dir: std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("site"),
            ..Default::default()
        };
        let app = build_router(AppState::new(config));

        for page in ["/", "/dashboard.html", "/courses.html", "/settings.html"] {
            let response = get(app.clone(), page).await;
            assert_eq!(response.status(), StatusCode::OK, "{page}");
            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let html = String::from_utf8(body.to_vec()).unwrap();
            assert!(html.contains(r#"rel="modulepreload" href="./pkg/studydesk_ui.js""#), "{page}");
            assert!(html.contains(r#"href="./pkg/studydesk_ui_bg.wasm" as="fetch""#), "{page}");
        }
    }
}
