//! Configuration at ~/.config/proximo/config.toml
//!
//! Every key has a default, and `PROXIMO_*` environment variables override
//! the file (`PROXIMO_API_URL`, `PROXIMO_SERVER__BIND`, ...).

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ProximoError, ProximoResult};

static DEFAULT_API_URL: &str = "http://127.0.0.1:4096";
static DEFAULT_BIND: &str = "127.0.0.1:4096";
static DEFAULT_CHAT_REPLY_DELAY: &str = "400ms";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_chat_reply_delay() -> String {
    DEFAULT_CHAT_REPLY_DELAY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximoConfig {
    /// Base URL of the event service.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// How long the assistant "types" before replying (humantime syntax).
    #[serde(default = "default_chat_reply_delay")]
    pub chat_reply_delay: String,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Start with demo accounts and events.
    #[serde(default)]
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
            seed_demo: false,
        }
    }
}

impl Default for ProximoConfig {
    fn default() -> Self {
        ProximoConfig {
            api_url: default_api_url(),
            chat_reply_delay: default_chat_reply_delay(),
            server: ServerConfig::default(),
        }
    }
}

impl ProximoConfig {
    pub fn config_path() -> ProximoResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ProximoError::Config("Could not determine config directory".into()))?
            .join("proximo");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file first if
    /// there is none yet.
    pub fn load() -> ProximoResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ProximoResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("PROXIMO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ProximoError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ProximoError::Config(e.to_string()))
    }

    pub fn save(&self) -> ProximoResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> ProximoResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ProximoError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProximoError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| ProximoError::Config(format!("Could not write config file: {e}")))
    }

    pub fn chat_reply_delay(&self) -> ProximoResult<Duration> {
        humantime::parse_duration(&self.chat_reply_delay).map_err(|e| {
            ProximoError::Config(format!(
                "Invalid chat_reply_delay '{}': {e}",
                self.chat_reply_delay
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ProximoResult<()> {
        let contents = format!(
            "\
# proximo configuration

# Where the event service lives:
# api_url = \"{DEFAULT_API_URL}\"

# Assistant reply delay:
# chat_reply_delay = \"{DEFAULT_CHAT_REPLY_DELAY}\"

# [server]
# bind = \"{DEFAULT_BIND}\"
# seed_demo = false
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProximoError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ProximoError::Config(format!("Could not write config file: {e}")))
    }
}
