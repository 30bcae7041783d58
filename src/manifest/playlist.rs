//! Built-in playlists used when neither the screen nor the demo content has one.

use serde_json::json;

use crate::models::screen::ContentItem;

const CARD_SECONDS: u32 = 12;
const EMBED_SECONDS: u32 = 18;
/// Ticker stays up for the whole rotation.
const TICKER_SECONDS: u32 = 9999;

fn spa_card(bg: &str, title: &str, subtitle: &str, services: &[&str]) -> ContentItem {
    ContentItem::new("spa_card", CARD_SECONDS)
        .with("bg", bg)
        .with("title", title)
        .with("subtitle", subtitle)
        .with("items", json!(services))
}

pub fn main_items() -> Vec<ContentItem> {
    vec![
        spa_card(
            "/media/Facial_Treatments.jpg",
            "Hydrafacial",
            "Deep cleansing + hydration for glowing skin.",
            &[
                "Vampire Facial",
                "Chemical Peels",
                "Dermaplaning",
                "Microneedling",
                "Threads",
            ],
        ),
        spa_card(
            "/media/Injectables.jpg",
            "Injectables",
            "Natural-looking results with expert placement.",
            &[
                "Fillers",
                "Juvederm",
                "Restylane",
                "Sculptra",
                "Botox",
                "Dysport",
                "Kybella",
            ],
        ),
        spa_card(
            "/media/Body_Procedures.jpg",
            "Body Procedures",
            "Confidence-focused contouring and rejuvenation.",
            &[
                "Body Contouring (Evolve X)",
                "Sculptra Butt Lift",
                "Vaginal Rejuvenation (FormaV)",
            ],
        ),
        spa_card(
            "/media/Laser_Treatments.jpg",
            "Laser Treatments",
            "Advanced laser & RF technology for smooth skin.",
            &[
                "Laser Hair Reduction",
                "Laser Vein Reduction",
                "Laser Skin Tightening",
                "Skin Resurfacing",
                "Radiofrequency Treatments",
            ],
        ),
        spa_card(
            "/media/PRP.jpg",
            "PRP",
            "Regenerative treatments for skin + hair.",
            &["PRP Facial", "PRP Hair Restoration", "PRP Under Eyes"],
        ),
    ]
}

pub fn right_items() -> Vec<ContentItem> {
    vec![
        ContentItem::new("youtube", EMBED_SECONDS).with(
            "url",
            "https://www.youtube.com/embed?listType=playlist&list=UUInP4-sfglG9bYMwjGDlG4w",
        ),
        ContentItem::new("instagram", EMBED_SECONDS)
            .with("url", "https://www.instagram.com/prestigemedspas/embed"),
    ]
}

pub fn footer_items() -> Vec<ContentItem> {
    vec![ContentItem::new("rss_ticker", TICKER_SECONDS)]
}
