mod config;
mod manifest;
mod models;
mod routes;
mod store;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::manifest::{ManifestBuilder, RandomSource, ThreadRandom};
use crate::store::ConfigStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ConfigStore,
    pub builder: ManifestBuilder,
    /// Directory holding the player page.
    pub web_dir: PathBuf,
}

impl AppState {
    pub fn new(app_dir: &Path, random: Arc<dyn RandomSource>) -> Self {
        Self {
            store: ConfigStore::new(app_dir),
            builder: ManifestBuilder::new(random),
            web_dir: app_dir.join("web"),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::manifest::get_manifest,
        routes::widgets::header_info,
        routes::widgets::rss_ticker,
    ),
    components(schemas(
        models::manifest::Manifest,
        models::manifest::HeaderInfo,
        models::manifest::TickerResponse,
        models::manifest::TickerItem,
        models::manifest::ApiError,
    )),
    tags(
        (name = "Player", description = "Zoned playlist manifests for signage screens"),
        (name = "Widgets", description = "Lightweight header and ticker refresh endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("signage_server=debug,tower_http=debug")),
        )
        .init();

    let config = config::Config::from_env();

    let cors = if config.cors_origins.is_empty() || config.cors_origins == "*" {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(tower_http::cors::Any)
    };

    let state = AppState::new(&config.app_dir, Arc::new(ThreadRandom));

    let app = routes::api_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    let app = routes::mount_static(app, &config.web_dir(), &config.media_dir())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Serving screens from {}", config.app_dir.display());
    tracing::info!("Listening on {}", config.listen_addr);
    tracing::info!("Swagger UI at http://{}/docs/", config.listen_addr);
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
