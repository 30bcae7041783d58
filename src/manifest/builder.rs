use std::sync::Arc;

use crate::manifest::fallback::{first_present, resolve_text};
use crate::manifest::logo::pick_logo;
use crate::manifest::playlist;
use crate::manifest::random::RandomSource;
use crate::models::manifest::{HeaderInfo, Manifest};
use crate::models::screen::{ContentItem, DemoContent, Office, ScreenConfig, ScreenStore};

pub const DEFAULT_LAYOUT_ID: &str = "layout-horizontal_4zone_v1";
pub const DEFAULT_HEADER_TITLE: &str = "Prestige";
pub const DEFAULT_PHONE: &str = "706-692-9768";

/// Assembles manifests from the screen store and demo content.
/// Holds no per-request state; randomness comes from the injected source.
#[derive(Clone)]
pub struct ManifestBuilder {
    random: Arc<dyn RandomSource>,
}

impl ManifestBuilder {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn header_info(
        &self,
        screen_id: &str,
        screens: &ScreenStore,
        demo: &DemoContent,
    ) -> HeaderInfo {
        resolve_header(&screens.resolve(screen_id), demo)
    }

    pub fn build(&self, screen_id: &str, screens: &ScreenStore, demo: &DemoContent) -> Manifest {
        let screen = screens.resolve(screen_id);
        let header = resolve_header(&screen, demo);

        let mut main_items = resolve_items(
            screen.main_items.as_deref(),
            demo.main_items.as_deref(),
            playlist::main_items,
        );
        let mut right_items = resolve_items(
            screen.right_items.as_deref(),
            demo.right_items.as_deref(),
            playlist::right_items,
        );
        let footer_items = resolve_items(
            screen.footer_items.as_deref(),
            demo.footer_items.as_deref(),
            playlist::footer_items,
        );

        self.random.shuffle(&mut main_items);
        self.random.shuffle(&mut right_items);

        Manifest {
            ok: true,
            manifest_id: self.manifest_id(),
            layout_id: header.layout_id,
            header_title: header.header_title,
            header_subtitle: header.header_subtitle,
            phone: header.phone,
            logo_url: header.logo_url,
            main_items,
            right_items,
            footer_items,
        }
    }

    fn manifest_id(&self) -> String {
        format!(
            "{}-{}",
            chrono::Utc::now().timestamp(),
            self.random.manifest_suffix()
        )
    }
}

fn resolve_header(screen: &ScreenConfig, demo: &DemoContent) -> HeaderInfo {
    let no_office = Office::default();
    let office = screen.office.as_ref().unwrap_or(&no_office);

    HeaderInfo {
        ok: true,
        header_title: resolve_text(
            [
                screen.header_title.as_deref(),
                office.name.as_deref(),
                demo.header_title.as_deref(),
            ],
            DEFAULT_HEADER_TITLE,
        ),
        header_subtitle: resolve_text(
            [
                screen.header_subtitle.as_deref(),
                office.address.as_deref(),
                demo.header_subtitle.as_deref(),
            ],
            "",
        ),
        phone: resolve_text(
            [screen.phone.as_deref(), demo.phone.as_deref()],
            DEFAULT_PHONE,
        ),
        logo_url: pick_logo(office),
        layout_id: resolve_text(
            [screen.layout_id.as_deref(), demo.layout_id.as_deref()],
            DEFAULT_LAYOUT_ID,
        ),
    }
}

fn resolve_items(
    screen: Option<&[ContentItem]>,
    demo: Option<&[ContentItem]>,
    builtin: fn() -> Vec<ContentItem>,
) -> Vec<ContentItem> {
    first_present([screen, demo])
        .map(<[ContentItem]>::to_vec)
        .unwrap_or_else(builtin)
}
