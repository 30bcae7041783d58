use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Key consulted when a screen id has no entry of its own.
pub const DEFAULT_SCREEN_ID: &str = "default";

// ── Configuration documents ──────────────────────────────────────────────────

/// Per-screen configuration. Every field is optional; values of the wrong JSON
/// type are read as unset so a typo in one screen never breaks the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub layout_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub office: Option<Office>,
    #[serde(default, deserialize_with = "lenient")]
    pub header_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub header_subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub main_items: Option<Vec<ContentItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub right_items: Option<Vec<ContentItem>>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub footer_items: Option<Vec<ContentItem>>,
}

/// `zoned_demo.json` shares the screen shape and acts as the second fallback tier.
pub type DemoContent = ScreenConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Office {
    #[serde(default, deserialize_with = "lenient")]
    pub logo_url: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub office_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,
}

impl Office {
    /// `type` takes precedence over the older `office_type` key.
    pub fn office_type(&self) -> Option<&str> {
        crate::manifest::fallback::first_present([
            self.kind.as_deref(),
            self.office_type.as_deref(),
        ])
    }
}

/// One entry of a zone playlist. Type-specific fields (`bg`, `title`, `url`, ...)
/// are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: String,
    /// Seconds on screen, kept exactly as configured (`7.5` and `12.0` included)
    pub duration: Number,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentItem {
    pub fn new(kind: &str, duration: u32) -> Self {
        Self {
            kind: kind.to_string(),
            duration: Number::from(duration),
            fields: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }
}

// ── Screen store ─────────────────────────────────────────────────────────────

/// Contents of `screens.json`: screen id → raw screen entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ScreenStore {
    entries: Map<String, Value>,
}

impl ScreenStore {
    /// Requested screen, else the `"default"` entry, else an empty record.
    pub fn resolve(&self, screen_id: &str) -> ScreenConfig {
        self.entry(screen_id)
            .or_else(|| self.entry(DEFAULT_SCREEN_ID))
            .unwrap_or_default()
    }

    fn entry(&self, screen_id: &str) -> Option<ScreenConfig> {
        let value = self.entries.get(screen_id)?;
        match value {
            Value::Object(fields) if !fields.is_empty() => ScreenConfig::deserialize(value).ok(),
            _ => None,
        }
    }
}

// ── Lenient field readers ────────────────────────────────────────────────────

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<ContentItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Array(raw) => raw,
        Value::Null => return Ok(None),
        other => {
            tracing::warn!("Ignoring playlist that is not a list: {}", other);
            return Ok(None);
        }
    };

    let items = raw
        .into_iter()
        .filter_map(|value| match ContentItem::deserialize(&value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Dropping malformed playlist item {}: {}", value, e);
                None
            }
        })
        .collect();

    Ok(Some(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(value: Value) -> ScreenStore {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolve_prefers_requested_screen() {
        let screens = store(json!({
            "lobby": { "phone": "111" },
            "default": { "phone": "999" }
        }));

        assert_eq!(screens.resolve("lobby").phone.as_deref(), Some("111"));
        assert_eq!(screens.resolve("unknown").phone.as_deref(), Some("999"));
    }

    #[test]
    fn test_resolve_without_default_is_empty() {
        let screens = store(json!({ "lobby": { "phone": "111" } }));
        let screen = screens.resolve("s1");

        assert!(screen.phone.is_none());
        assert!(screen.office.is_none());
        assert!(screen.main_items.is_none());
    }

    #[test]
    fn test_empty_or_non_object_entry_falls_back_to_default() {
        let screens = store(json!({
            "blank": {},
            "broken": "not a screen",
            "default": { "header_title": "Fallback" }
        }));

        assert_eq!(
            screens.resolve("blank").header_title.as_deref(),
            Some("Fallback")
        );
        assert_eq!(
            screens.resolve("broken").header_title.as_deref(),
            Some("Fallback")
        );
    }

    #[test]
    fn test_wrong_typed_fields_read_as_unset() {
        let screen: ScreenConfig = serde_json::from_value(json!({
            "phone": 42,
            "office": "Main St",
            "header_title": "Lobby",
            "main_items": { "type": "spa_card" }
        }))
        .unwrap();

        assert!(screen.phone.is_none());
        assert!(screen.office.is_none());
        assert!(screen.main_items.is_none());
        assert_eq!(screen.header_title.as_deref(), Some("Lobby"));
    }

    #[test]
    fn test_malformed_items_are_dropped() {
        let screen: ScreenConfig = serde_json::from_value(json!({
            "right_items": [
                { "type": "youtube", "duration": 18, "url": "https://example.com/a" },
                { "type": "youtube" },
                { "duration": 5 },
                "junk"
            ]
        }))
        .unwrap();

        let items = screen.right_items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, "youtube");
        assert_eq!(items[0].fields["url"], "https://example.com/a");
    }

    #[test]
    fn test_fractional_durations_keep_the_playlist() {
        let screen: ScreenConfig = serde_json::from_value(json!({
            "main_items": [
                { "type": "image", "duration": 7.5 },
                { "type": "image", "duration": 12.0, "url": "/media/b.jpg" },
                { "type": "image", "duration": "long" }
            ]
        }))
        .unwrap();

        let items = screen.main_items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].duration.as_f64(), Some(7.5));
        assert_eq!(
            serde_json::to_string(&items[1]).unwrap(),
            r#"{"type":"image","duration":12.0,"url":"/media/b.jpg"}"#
        );
    }

    #[test]
    fn test_extra_fields_keep_config_order() {
        let raw = r#"{"type":"spa_card","duration":12,"title":"PRP","subtitle":"Skin + hair","bg":"/media/PRP.jpg"}"#;
        let item: ContentItem = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), raw);
    }

    #[test]
    fn test_content_item_keeps_extra_fields() {
        let raw = json!({
            "type": "spa_card",
            "duration": 12,
            "bg": "/media/PRP.jpg",
            "items": ["PRP Facial", "PRP Under Eyes"]
        });
        let item: ContentItem = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(item.kind, "spa_card");
        assert_eq!(item.duration.as_u64(), Some(12));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_office_type_prefers_type_key() {
        let office: Office = serde_json::from_value(json!({
            "type": "Peds",
            "office_type": "Primary"
        }))
        .unwrap();
        assert_eq!(office.office_type(), Some("Peds"));

        let office: Office = serde_json::from_value(json!({
            "type": "",
            "office_type": "Primary"
        }))
        .unwrap();
        assert_eq!(office.office_type(), Some("Primary"));
    }
}
