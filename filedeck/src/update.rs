use iced::Task;

use super::{App, AppEvent};
use crate::guards::{MenuGuard, context_menu_guard};
use crate::routers;
use crate::widgets::explorer::ExplorerEvent;
use crate::widgets::listing::ListingEvent;

/// Apply the context menu guard, then route the event.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if app.widgets.listing.context_menu().is_none() {
        return route(app, event);
    }

    match context_menu_guard(&event) {
        MenuGuard::Allow => route(app, event),
        MenuGuard::Ignore => Task::none(),
        MenuGuard::Dismiss => {
            let dismiss = routers::listing::route_event(
                app,
                ListingEvent::ContextMenuDismiss,
            );
            let task = route(app, event);
            Task::batch([dismiss, task])
        },
    }
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => {
            log::info!("connected to {}", app.client.base_url());
            Task::batch([
                Task::done(AppEvent::ExplorerUi(ExplorerEvent::LoadRoot)),
                Task::done(AppEvent::ListingUi(ListingEvent::Navigate {
                    path: String::new(),
                })),
            ])
        },
        // Chrome widget
        AppEvent::ChromeUi(event) => routers::chrome::route_event(app, event),
        AppEvent::ChromeEffect(effect) => {
            routers::chrome::route_effect(app, effect)
        },
        // Explorer widget
        AppEvent::ExplorerUi(event) => {
            routers::explorer::route_event(app, event)
        },
        AppEvent::ExplorerEffect(effect) => {
            routers::explorer::route_effect(app, effect)
        },
        // Listing widget
        AppEvent::ListingUi(event) => routers::listing::route_event(app, event),
        AppEvent::ListingEffect(effect) => {
            routers::listing::route_effect(app, effect)
        },
        // Viewer widget
        AppEvent::ViewerUi(event) => routers::viewer::route_event(app, event),
        AppEvent::ViewerEffect(effect) => {
            routers::viewer::route_effect(app, effect)
        },
        // Upload widget
        AppEvent::UploadUi(event) => routers::upload::route_event(app, event),
        AppEvent::UploadEffect(effect) => {
            routers::upload::route_effect(app, effect)
        },
        // Direct operations
        AppEvent::SettingsPersisted(result) => {
            routers::settings::route_persisted(result)
        },
        AppEvent::Keyboard(event) => {
            routers::window::handle_keyboard(app, event)
        },
        AppEvent::Window(event) => routers::window::handle_window(app, event),
    }
}
