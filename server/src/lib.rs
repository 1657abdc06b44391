use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use loupe_core::{rank, CorpusIndex, RankConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

pub const DEFAULT_PORT: u16 = 8888;

/// Read-only per-process state: the index is loaded once at startup and
/// never mutated, so plain `Arc` sharing is enough.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CorpusIndex>,
    pub config: RankConfig,
}

pub fn build_app(index: CorpusIndex, config: RankConfig, assets_dir: PathBuf) -> Router {
    let state = AppState { index: Arc::new(index), config };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/search", post(search_handler))
        .fallback_service(ServeDir::new(assets_dir))
        .with_state(state)
        .layer(cors)
}

/// The request body is the raw query text; the response is the ranked
/// `[path, score]` pairs, e.g. `[["docA.xml",3.21],["docB.xml",1.05]]`.
pub async fn search_handler(
    State(state): State<AppState>,
    body: String,
) -> Json<Vec<(String, f32)>> {
    let start = std::time::Instant::now();
    let results = rank(&body, &state.index, &state.config);
    tracing::debug!(
        query = %body,
        hits = results.len(),
        took_s = start.elapsed().as_secs_f64(),
        "search"
    );
    Json(results)
}

/// Split a `host:port` listen address, falling back to `0.0.0.0` for a
/// missing host and to [`DEFAULT_PORT`] (with a warning) for a missing
/// or unparseable port.
pub fn parse_address(addr: &str) -> (String, u16) {
    let (host, port) = match addr.split_once(':') {
        Some((host, port)) => {
            let port = port.parse().unwrap_or_else(|_| {
                tracing::warn!(addr, "invalid port provided, using {DEFAULT_PORT} instead");
                DEFAULT_PORT
            });
            (host, port)
        }
        None => (addr, DEFAULT_PORT),
    };
    let host = if host.is_empty() { "0.0.0.0" } else { host };
    (host.to_string(), port)
}
