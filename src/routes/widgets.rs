use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::{no_store, store_failure, ErrorResponse, NoStore};
use crate::models::manifest::{ApiError, HeaderInfo, TickerItem, TickerResponse};
use crate::AppState;

const TICKER_HEADLINE: &str = "Ask about our wellness & aesthetic services today.";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HeaderInfoQuery {
    /// Screen identifier, resolved the same way as the manifest
    pub screen_id: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/header_info", get(header_info))
        .route("/rss_ticker", get(rss_ticker))
}

#[utoipa::path(
    get,
    path = "/api/widgets/header_info",
    params(HeaderInfoQuery),
    responses(
        (status = 200, description = "Header fields for the screen", body = HeaderInfo),
        (status = 500, description = "Configuration file missing or unreadable", body = ApiError),
    ),
    tag = "Widgets"
)]
pub(crate) async fn header_info(
    State(state): State<AppState>,
    Query(query): Query<HeaderInfoQuery>,
) -> Result<NoStore<HeaderInfo>, ErrorResponse> {
    let (screens, demo) = state.store.load().await.map_err(store_failure)?;
    Ok(no_store(
        state.builder.header_info(&query.screen_id, &screens, &demo),
    ))
}

#[utoipa::path(
    get,
    path = "/api/widgets/rss_ticker",
    responses(
        (status = 200, description = "Ticker headlines", body = TickerResponse),
    ),
    tag = "Widgets"
)]
pub(crate) async fn rss_ticker() -> Json<TickerResponse> {
    Json(TickerResponse {
        ok: true,
        items: vec![TickerItem {
            kind: "headline".to_string(),
            text: TICKER_HEADLINE.to_string(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app, get_json, send, write};
    use crate::store::{DEMO_FILE, SCREENS_FILE};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_header_info_projection() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            SCREENS_FILE,
            r#"{"default": {"office": {"type": "Primary Care", "address": "12 Oak Ave"}}}"#,
        );
        write(dir.path(), DEMO_FILE, r#"{"layout_id": "layout-demo"}"#);

        let (status, body) =
            get_json(app(dir.path()), "/api/widgets/header_info?screen_id=s9").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "header_title": "Prestige",
                "header_subtitle": "12 Oak Ave",
                "phone": "706-692-9768",
                "logo_url": "/media/pmgPrimaryCareLogo.jpg",
                "layout_id": "layout-demo"
            })
        );
    }

    #[tokio::test]
    async fn test_header_info_missing_demo_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), SCREENS_FILE, "{}");

        let (status, body) =
            get_json(app(dir.path()), "/api/widgets/header_info?screen_id=s1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["ok"], false);
    }

    #[tokio::test]
    async fn test_header_info_requires_screen_id() {
        let dir = tempfile::tempdir().unwrap();
        let response = send(app(dir.path()), "/api/widgets/header_info").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rss_ticker_stub() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_json(app(dir.path()), "/api/widgets/rss_ticker").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "items": [{
                    "type": "headline",
                    "text": "Ask about our wellness & aesthetic services today."
                }]
            })
        );
    }
}
