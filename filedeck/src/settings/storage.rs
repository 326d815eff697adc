use std::fs;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::{BASE_URL_ENV, Settings};

/// Load settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial_settings() -> Settings {
    let settings = match load_settings_from_path(&settings_path()) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("settings load failed, using defaults: {err}");
            Settings::default()
        },
    };

    settings.with_base_url_override(std::env::var(BASE_URL_ENV).ok())
}

pub(crate) fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        },
        Err(err) => return Err(err.into()),
    };

    serde_json::from_str(&data).map_err(SettingsError::Parse)
}

fn save_settings_to_path(
    path: &Path,
    settings: &Settings,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(settings)
        .map_err(SettingsError::Serialize)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn settings_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("filedeck")
            .join("settings.json");
    }

    std::env::temp_dir().join("filedeck").join("settings.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{load_settings_from_path, save_settings_to_path};
    use crate::settings::{Settings, SettingsError};

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_returned() {
        let dir = tempfile::tempdir().expect("temp dir should be created");

        let loaded = load_settings_from_path(&dir.path().join("settings.json"))
            .expect("missing file should not be an error");

        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn given_saved_settings_when_loaded_then_values_match() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            base_url: String::from("http://files.local"),
            download_dir: Some(PathBuf::from("/srv/downloads")),
            show_hidden: true,
            drawer_open: false,
        };

        save_settings_to_path(&path, &settings)
            .expect("settings should save successfully");
        let loaded = load_settings_from_path(&path)
            .expect("settings should load successfully");

        assert_eq!(loaded, settings);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn given_invalid_json_when_loaded_then_parse_error_is_returned() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").expect("payload should be written");

        let result = load_settings_from_path(&path);

        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
