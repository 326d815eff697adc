use thiserror::Error;

/// Errors emitted while reading or writing settings.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// Filesystem operation failed.
    #[error("settings IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// Stored JSON could not be parsed.
    #[error("settings JSON is invalid: {0}")]
    Parse(serde_json::Error),
    /// Settings could not be serialized for writing.
    #[error("settings serialization failed: {0}")]
    Serialize(serde_json::Error),
}
