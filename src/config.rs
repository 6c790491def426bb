//! Runtime configuration, read once at startup from an optional JSON block
//! in the host page:
//!
//! ```html
//! <script id="worblehat-config" type="application/json">{ "debug_logs": true }</script>
//! ```

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use crate::logging;

pub const CONFIG_ELEMENT_ID: &str = "worblehat-config";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Emit `logging::debug` lines to the browser console.
    pub debug_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug_logs: cfg!(debug_assertions),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("malformed config block: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// `Ok(None)` when the page carries no config block, or an empty one.
pub fn read_from_document() -> Result<Option<AppConfig>, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let document = window.document().ok_or(ConfigError::NoDocument)?;
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    AppConfig::from_json(&text).map(Some)
}

/// Reads the page config, falling back to defaults on any failure.
pub fn load() -> AppConfig {
    match read_from_document() {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            logging::warn(&format!("using default config: {e}"));
            AppConfig::default()
        }
    }
}

pub fn init(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        logging::warn("config already initialised, keeping the first one");
    }
}

/// The active config. Defaults if [`init`] never ran.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
