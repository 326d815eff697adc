use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::settings;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent};

/// Route a chrome UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    app.widgets.chrome.reduce(event).map(AppEvent::ChromeEffect)
}

/// Route a chrome effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ChromeEffect,
) -> Task<AppEvent> {
    match effect {
        ChromeEffect::DrawerToggled { open } => {
            app.settings.drawer_open = open;
            settings::persist(app)
        },
    }
}
