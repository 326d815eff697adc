use iced::Task;

use crate::app::{App, AppEvent};
use crate::settings::save_settings;

/// Write the current settings to disk in the background.
pub(crate) fn persist(app: &App) -> Task<AppEvent> {
    let settings = app.settings.clone();
    Task::perform(
        async move { save_settings(&settings).map_err(|err| err.to_string()) },
        AppEvent::SettingsPersisted,
    )
}

/// Report the outcome of a settings write.
pub(crate) fn route_persisted(result: Result<(), String>) -> Task<AppEvent> {
    match result {
        Ok(()) => log::debug!("settings saved"),
        Err(message) => log::warn!("failed to save settings: {message}"),
    }
    Task::none()
}
