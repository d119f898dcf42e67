use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::network::Latency;

pub const DEFAULT_CONFIG_PATH: &str = "config/secure_chat.json";
pub const DEFAULT_REPLY_TEXT: &str = "Message received. Replying securely!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_session_db_path")]
    pub session_db_path: String,
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default = "default_reply_text")]
    pub reply_text: String,
    #[serde(default = "default_notice_ttl_secs")]
    pub notice_ttl_secs: u64,
    /// Fixes the mock data generator, handy for screenshots and demos.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_session_db_path() -> String {
    "data/session.db".to_string()
}

fn default_auth_delay_ms() -> u64 {
    1000
}

fn default_reply_delay_ms() -> u64 {
    3000
}

fn default_reply_text() -> String {
    DEFAULT_REPLY_TEXT.to_string()
}

fn default_notice_ttl_secs() -> u64 {
    4
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_db_path: default_session_db_path(),
            auth_delay_ms: default_auth_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
            reply_text: default_reply_text(),
            notice_ttl_secs: default_notice_ttl_secs(),
            rng_seed: None,
        }
    }
}

impl AppConfig {
    pub fn latency(&self) -> Latency {
        Latency {
            auth: Duration::from_millis(self.auth_delay_ms),
            reply: Duration::from_millis(self.reply_delay_ms),
        }
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
