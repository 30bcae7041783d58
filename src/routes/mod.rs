pub mod manifest;
pub mod player;
pub mod widgets;

use std::path::Path;

use axum::{
    http::{header, HeaderName, StatusCode},
    Json, Router,
};
use tower_http::services::ServeDir;

use crate::models::manifest::ApiError;
use crate::store::StoreError;
use crate::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(player::router())
        .nest("/api/manifest", manifest::router())
        .nest("/api/widgets", widgets::router())
        .with_state(state)
}

/// Mounts `/web` and `/media` for whichever of the two directories exist.
pub fn mount_static(mut router: Router, web_dir: &Path, media_dir: &Path) -> Router {
    if web_dir.is_dir() {
        router = router.nest_service("/web", ServeDir::new(web_dir));
    } else {
        tracing::warn!("No web directory at {}, /web not mounted", web_dir.display());
    }
    if media_dir.is_dir() {
        router = router.nest_service("/media", ServeDir::new(media_dir));
    } else {
        tracing::warn!("No media directory at {}, /media not mounted", media_dir.display());
    }
    router
}

pub(crate) type ErrorResponse = (StatusCode, Json<ApiError>);

pub(crate) fn err(status: StatusCode, msg: &str) -> ErrorResponse {
    (
        status,
        Json(ApiError {
            ok: false,
            error: msg.to_string(),
        }),
    )
}

pub(crate) fn store_failure(e: StoreError) -> ErrorResponse {
    tracing::error!("Failed to load screen configuration: {}", e);
    err(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
}

/// JSON body that players must not cache; every manifest is freshly shuffled.
pub(crate) type NoStore<T> = ([(HeaderName, &'static str); 1], Json<T>);

pub(crate) fn no_store<T>(body: T) -> NoStore<T> {
    ([(header::CACHE_CONTROL, "no-store")], Json(body))
}
