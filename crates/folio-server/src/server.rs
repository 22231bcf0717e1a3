//! HTTP server hosting the UI bundle

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use folio_core::config::{ClientConfig, FolioConfig};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FolioConfig>,
    pub start_time: Instant,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

pub struct FolioServer {
    config: FolioConfig,
}

impl FolioServer {
    pub fn new(config: FolioConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let dist = &self.config.server.dist_dir;
        if !dist.join("index.html").is_file() {
            warn!("No index.html in {:?}; build the UI with trunk first", dist);
        }

        let addr = format!("{}:{}", self.config.server.bind_address, self.config.server.port);
        let api_base = self.config.backend.api_base.clone();
        let app = create_router(AppState {
            config: Arc::new(self.config),
            start_time: Instant::now(),
        });

        let listener = TcpListener::bind(&addr).await?;
        info!("Folio listening on http://{}", addr);
        info!("Content API at {}", api_base);

        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn create_router(state: AppState) -> Router {
    let dist = state.config.server.dist_dir.clone();
    // Unknown paths are client-side routes
    let assets = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    Router::new()
        .route("/healthz", get(health))
        .route("/config.json", get(client_config))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().include_headers(false)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: folio_core::VERSION,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.config.client())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn state_with_dist(dist: &std::path::Path) -> AppState {
        let mut config = FolioConfig::default();
        config.server.dist_dir = dist.to_path_buf();
        config.backend.api_base = "https://cms.example.com/api".to_string();
        config.pagination.window = 7;
        AppState {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthz() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(state_with_dist(dir.path()));

        let (status, body) = get_body(app, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], folio_core::VERSION);
    }

    #[tokio::test]
    async fn test_config_json_is_client_subset() {
        let dir = tempfile::tempdir().unwrap();
        let app = create_router(state_with_dist(dir.path()));

        let (status, body) = get_body(app, "/config.json").await;
        assert_eq!(status, StatusCode::OK);
        let config: ClientConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(config.api_base, "https://cms.example.com/api");
        assert_eq!(config.page_window, 7);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json.get("server").is_none());
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>folio</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let app = create_router(state_with_dist(dir.path()));
        let (status, body) = get_body(app.clone(), "/admin/posts/3/edit").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>folio</html>");

        let (status, body) = get_body(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }
}
