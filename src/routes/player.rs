use std::io;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use super::{err, ErrorResponse};
use crate::AppState;

pub const PLAYER_PAGE: &str = "player_zones.html";

/// Read by the page itself from `location.search`; only logged here.
#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    #[serde(default)]
    pub debug: u8,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/player-zones/{screen_id}", get(player_page))
}

async fn player_page(
    State(state): State<AppState>,
    Path(screen_id): Path<String>,
    Query(query): Query<PlayerQuery>,
) -> Result<Html<String>, ErrorResponse> {
    tracing::debug!("Player page requested: screen={}, debug={}", screen_id, query.debug);

    let path = state.web_dir.join(PLAYER_PAGE);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("Player page missing at {}", path.display());
            Err(err(StatusCode::NOT_FOUND, "Player page not found"))
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            Err(err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read player page"))
        }
    }
}
