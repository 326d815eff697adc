use iced::keyboard::{self, Key, key};
use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::listing::ListingEvent;
use crate::widgets::upload::UploadEvent;
use crate::widgets::viewer::ViewerEvent;

/// Track window geometry and forward dropped files to the upload modal.
pub(crate) fn handle_window(
    app: &mut App,
    event: window::Event,
) -> Task<AppEvent> {
    match event {
        window::Event::Resized(size) => {
            app.state.set_window_size(size);
            Task::none()
        },
        window::Event::FileDropped(path) if app.widgets.upload.is_open() => {
            Task::done(AppEvent::UploadUi(UploadEvent::FileDropped { path }))
        },
        window::Event::FileDropped(path) => {
            log::debug!("ignoring dropped file {}", path.display());
            Task::none()
        },
        _ => Task::none(),
    }
}

/// Track modifier keys and close the topmost overlay on Escape.
pub(crate) fn handle_keyboard(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    match event {
        keyboard::Event::ModifiersChanged(modifiers) => {
            app.state.set_modifiers(modifiers);
            Task::none()
        },
        keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        } => escape(app),
        _ => Task::none(),
    }
}

fn escape(app: &App) -> Task<AppEvent> {
    let listing = &app.widgets.listing;
    if listing.context_menu().is_some() {
        return Task::done(AppEvent::ListingUi(
            ListingEvent::ContextMenuDismiss,
        ));
    }
    if app.widgets.upload.collision().is_some() {
        return Task::none();
    }
    if app.widgets.upload.is_open() {
        return Task::done(AppEvent::UploadUi(UploadEvent::Close));
    }
    if app.widgets.viewer.is_open() {
        return Task::done(AppEvent::ViewerUi(ViewerEvent::Close));
    }
    if listing.prompt().is_some() {
        return Task::done(AppEvent::ListingUi(ListingEvent::PromptCancelled));
    }
    if listing.delete_confirm().is_some() {
        return Task::done(AppEvent::ListingUi(ListingEvent::DeleteCancelled));
    }
    Task::none()
}
