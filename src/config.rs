use std::path::PathBuf;

pub struct Config {
    pub listen_addr: String,
    /// Root holding `screens.json`, `zoned_demo.json`, `web/` and `media/`.
    pub app_dir: PathBuf,
    /// Comma-separated allowed CORS origins. If empty or "*", allows all origins (dev mode).
    pub cors_origins: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            app_dir: std::env::var("APP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        }
    }

    pub fn web_dir(&self) -> PathBuf {
        self.app_dir.join("web")
    }

    pub fn media_dir(&self) -> PathBuf {
        self.app_dir.join("media")
    }
}
