use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::screen::{DemoContent, ScreenStore};

pub const SCREENS_FILE: &str = "screens.json";
pub const DEMO_FILE: &str = "zoned_demo.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing JSON file: {}", .0.display())]
    Missing(PathBuf),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of the two configuration documents. Files are re-read on
/// every call so edits show up on the next request.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    screens_path: PathBuf,
    demo_path: PathBuf,
}

impl ConfigStore {
    pub fn new(app_dir: &Path) -> Self {
        Self {
            screens_path: app_dir.join(SCREENS_FILE),
            demo_path: app_dir.join(DEMO_FILE),
        }
    }

    pub async fn load_screens(&self) -> Result<ScreenStore, StoreError> {
        load_json(&self.screens_path).await
    }

    pub async fn load_demo(&self) -> Result<DemoContent, StoreError> {
        load_json(&self.demo_path).await
    }

    /// Both documents; the screen store is checked first.
    pub async fn load(&self) -> Result<(ScreenStore, DemoContent), StoreError> {
        let screens = self.load_screens().await?;
        let demo = self.load_demo().await?;
        Ok((screens, demo))
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::Missing(path.to_path_buf()))
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let parse_error = |source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let value: serde_json::Value = serde_json::from_str(&text).map_err(parse_error)?;
    if !value.is_object() {
        return Err(parse_error(<serde_json::Error as serde::de::Error>::custom(
            "top-level value must be a JSON object",
        )));
    }
    serde_json::from_value(value).map_err(parse_error)
}
