use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use super::{no_store, store_failure, ErrorResponse, NoStore};
use crate::models::manifest::{ApiError, Manifest};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{screen_id}", get(get_manifest))
}

#[utoipa::path(
    get,
    path = "/api/manifest/{screen_id}",
    params(("screen_id" = String, Path, description = "Screen identifier; unknown ids get the default screen")),
    responses(
        (status = 200, description = "Assembled manifest", body = Manifest),
        (status = 500, description = "Configuration file missing or unreadable", body = ApiError),
    ),
    tag = "Player"
)]
pub(crate) async fn get_manifest(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
) -> Result<NoStore<Manifest>, ErrorResponse> {
    let (screens, demo) = state.store.load().await.map_err(store_failure)?;
    let manifest = state.builder.build(&screen_id, &screens, &demo);

    tracing::debug!(
        "Built manifest {} for screen={} ({} main, {} right, {} footer)",
        manifest.manifest_id,
        screen_id,
        manifest.main_items.len(),
        manifest.right_items.len(),
        manifest.footer_items.len()
    );

    Ok(no_store(manifest))
}
