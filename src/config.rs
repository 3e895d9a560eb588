//! Page configuration parsed from an optional JSON block in the document.
//!
//! Templates may embed
//!
//! ```html
//! <script type="application/json" id="page-config">
//!   {"site_name": "Shetty777", "log_level": "debug"}
//! </script>
//! ```
//!
//! Every field is optional; a page without the block runs on defaults.

use serde::Deserialize;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::PageError;

pub const DEFAULT_SITE_NAME: &str = "Shetty777";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Site name used in the mail share subject line.
    pub site_name: String,
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            site_name: DEFAULT_SITE_NAME.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Build config from the text content of the config element.
    ///
    /// `None` or blank text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if the text is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: Option<&str>) -> Result<Self, PageError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => serde_json::from_str(text).map_err(|e| PageError::Config(e.to_string())),
        }
    }

    /// The configured log level, falling back to `Info` for unknown names.
    pub fn level(&self) -> log::Level {
        parse_level(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn parse_level(raw: &str) -> Option<log::Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" | "warning" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
