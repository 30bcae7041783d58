use serde::Serialize;
use utoipa::ToSchema;

use crate::models::screen::ContentItem;

/// Everything a screen needs to render its zones.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Manifest {
    pub ok: bool,
    /// `{epoch_seconds}-{random 4 digits}`
    pub manifest_id: String,
    pub layout_id: String,
    pub header_title: String,
    pub header_subtitle: String,
    pub phone: String,
    pub logo_url: String,
    /// Main zone playlist, shuffled per request
    #[schema(value_type = Vec<Object>)]
    pub main_items: Vec<ContentItem>,
    /// Side zone playlist, shuffled per request
    #[schema(value_type = Vec<Object>)]
    pub right_items: Vec<ContentItem>,
    /// Footer playlist, in configured order
    #[schema(value_type = Vec<Object>)]
    pub footer_items: Vec<ContentItem>,
}

/// Header fields only, for refreshing the header without a new manifest.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HeaderInfo {
    pub ok: bool,
    pub header_title: String,
    pub header_subtitle: String,
    pub phone: String,
    pub logo_url: String,
    pub layout_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TickerResponse {
    pub ok: bool,
    pub items: Vec<TickerItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TickerItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}
