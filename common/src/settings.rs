//! Process-wide application settings.
//!
//! Values come from the process environment (`APP_NAME`, `APP_VERSION`,
//! `CHATBOT_NAME`, `MODEL_NAME`, `OPENROUTER_API_KEY`, `OPENROUTER_BASE_URL`,
//! `PROMPT_DIR`) and fall back to compiled defaults. The binary loads a `.env`
//! file into the environment before the first read.

use config::{Config, ConfigError, Environment};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

pub const DEFAULT_APP_NAME: &str = "Advance Prompt";
pub const DEFAULT_APP_VERSION: &str = "0.1.0";
pub const DEFAULT_CHATBOT_NAME: &str = "Assistant";
pub const DEFAULT_MODEL_NAME: &str = "qwen/qwen3-0.6b-04-28:free";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_PROMPT_DIR: &str = "prompt_files";

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to resolve settings: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub chatbot_name: String,
    pub model_name: String,
    #[serde(rename = "openrouter_api_key")]
    pub api_key: SecretString,
    pub openrouter_base_url: String,
    pub prompt_dir: PathBuf,
}

impl Settings {
    /// Reads the settings from the environment without touching the process cache.
    pub fn load() -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .set_default("app_name", DEFAULT_APP_NAME)?
            .set_default("app_version", DEFAULT_APP_VERSION)?
            .set_default("chatbot_name", DEFAULT_CHATBOT_NAME)?
            .set_default("model_name", DEFAULT_MODEL_NAME)?
            .set_default("openrouter_api_key", "")?
            .set_default("openrouter_base_url", DEFAULT_OPENROUTER_BASE_URL)?
            .set_default("prompt_dir", DEFAULT_PROMPT_DIR)?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!(
            "Resolved settings for {} {} (model: {})",
            settings.app_name, settings.app_version, settings.model_name
        );

        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let base_url = self.openrouter_base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SettingsError::Invalid {
                key: "OPENROUTER_BASE_URL",
                reason: format!("expected an http(s) URL, got {base_url:?}"),
            });
        }

        if self.model_name.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "MODEL_NAME",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Returns the settings for this process, loading them on first use.
///
/// The first successful load is cached for the lifetime of the process; later
/// calls return the same reference even if the environment has changed since.
/// A failed load is not cached, so a later call may still succeed.
pub fn get_settings() -> Result<&'static Settings, SettingsError> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }

    let settings = Settings::load()?;
    Ok(SETTINGS.get_or_init(|| settings))
}
