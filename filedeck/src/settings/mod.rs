mod errors;
mod storage;

use std::path::PathBuf;

use filedeck_client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

pub(crate) use errors::SettingsError;
pub(crate) use storage::{load_initial_settings, save_settings};

/// Environment variable that overrides the stored backend origin.
pub(crate) const BASE_URL_ENV: &str = "FILEDECK_BASE_URL";

/// Persisted client configuration and UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) base_url: String,
    pub(crate) download_dir: Option<PathBuf>,
    pub(crate) show_hidden: bool,
    pub(crate) drawer_open: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            download_dir: None,
            show_hidden: false,
            drawer_open: true,
        }
    }
}

impl Settings {
    /// Replace the backend origin when the override is non-empty.
    pub(crate) fn with_base_url_override(
        mut self,
        value: Option<String>,
    ) -> Self {
        let value = value.map(|value| value.trim().to_string());
        match value {
            Some(value) if !value.is_empty() => self.base_url = value,
            _ => {},
        }
        self
    }
}
