use std::future::Future;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::listing::ListingEffect;
use crate::widgets::viewer::services::{
    remove_preview_file, write_preview_file,
};
use crate::widgets::viewer::{ViewerEffect, ViewerEvent};

/// Route a viewer UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ViewerEvent,
) -> Task<AppEvent> {
    app.widgets.viewer.reduce(event).map(AppEvent::ViewerEffect)
}

/// Route a viewer effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ViewerEffect,
) -> Task<AppEvent> {
    use ViewerEffect::*;

    let client = app.client.clone();
    match effect {
        DetectType { path } => tracked(app, async move {
            let event = match client.file_type(&path).await {
                Ok(info) => ViewerEvent::TypeDetected { path, info },
                Err(err) => content_failed(path, err, true),
            };
            AppEvent::ViewerUi(event)
        }),
        LoadText { path } => tracked(app, async move {
            let event = match client.text_content(&path).await {
                Ok(preview) => ViewerEvent::TextLoaded { path, preview },
                Err(err) => content_failed(path, err, false),
            };
            AppEvent::ViewerUi(event)
        }),
        LoadImage { path } => tracked(app, async move {
            let event = match client.download(&path).await {
                Ok(bytes) => ViewerEvent::ImageLoaded { path, bytes },
                Err(err) => content_failed(path, err, false),
            };
            AppEvent::ViewerUi(event)
        }),
        LoadZip { path } => tracked(app, async move {
            let event = match client.zip_listing(&path).await {
                Ok(listing) => ViewerEvent::ZipLoaded { path, listing },
                Err(err) => content_failed(path, err, false),
            };
            AppEvent::ViewerUi(event)
        }),
        LoadPdf { path } => tracked(app, async move {
            let bytes = match client.download(&path).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    return AppEvent::ViewerUi(content_failed(path, err, false));
                },
            };
            let event = match write_preview_file(&path, &bytes) {
                Ok(file) => ViewerEvent::PdfReady {
                    path,
                    file,
                    size: bytes.len() as u64,
                },
                Err(err) => content_failed(path, err, false),
            };
            AppEvent::ViewerUi(event)
        }),
        OpenExternally { file } => {
            if let Err(err) = open::that_detached(&file) {
                log::warn!("failed to open {}: {err}", file.display());
            }
            Task::none()
        },
        DownloadFile { path, name } => Task::done(AppEvent::ListingEffect(
            ListingEffect::DownloadFile { path, name },
        )),
        DiscardPreviewFile { file } => {
            remove_preview_file(&file);
            Task::none()
        },
        Closed => {
            app.state.abort_viewer_request();
            Task::none()
        },
    }
}

/// Run a viewer request that the next request or a close aborts.
fn tracked<F>(app: &mut App, future: F) -> Task<AppEvent>
where
    F: Future<Output = AppEvent> + Send + 'static,
{
    let (task, handle) = Task::future(future).abortable();
    app.state.replace_viewer_request(handle);
    task
}

fn content_failed(
    path: String,
    err: impl std::fmt::Display,
    detecting: bool,
) -> ViewerEvent {
    let message = err.to_string();
    if detecting {
        ViewerEvent::DetectFailed { path, message }
    } else {
        ViewerEvent::ContentFailed { path, message }
    }
}
