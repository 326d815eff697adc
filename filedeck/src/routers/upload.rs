use filedeck_client::UploadProgress;
use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::listing::ListingEvent;
use crate::widgets::upload::model::UPLOAD_RELOAD_DEBOUNCE;
use crate::widgets::upload::{UploadEffect, UploadEvent};

/// Route an upload UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: UploadEvent) -> Task<AppEvent> {
    if let UploadEvent::Finished { id, .. } = &event {
        app.state.finish_upload(*id);
    }
    app.widgets.upload.reduce(event).map(AppEvent::UploadEffect)
}

/// Route an upload effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: UploadEffect,
) -> Task<AppEvent> {
    use UploadEffect::*;

    match effect {
        CheckExists { dir, names } => {
            let client = app.client.clone();
            Task::perform(
                async move {
                    let result = client
                        .existing_names(&dir, &names)
                        .await
                        .map_err(|err| err.to_string());
                    (dir, result)
                },
                |(dir, result)| {
                    AppEvent::UploadUi(UploadEvent::ExistsChecked {
                        dir,
                        result,
                    })
                },
            )
        },
        StartUpload { id, dir, source } => {
            log::debug!("uploading {} into {dir:?}", source.display());
            let stream = app.client.upload(&dir, source);
            let (task, handle) = Task::run(stream, move |progress| {
                let event = match progress {
                    UploadProgress::Progress { loaded, total } => {
                        UploadEvent::Progress { id, loaded, total }
                    },
                    UploadProgress::Finished(result) => UploadEvent::Finished {
                        id,
                        result: result.map_err(|err| err.to_string()),
                    },
                };
                AppEvent::UploadUi(event)
            })
            .abortable();
            app.state.track_upload(id, handle);
            task
        },
        ScheduleReload { generation } => Task::perform(
            tokio::time::sleep(UPLOAD_RELOAD_DEBOUNCE),
            move |()| {
                AppEvent::UploadUi(UploadEvent::ReloadTimerElapsed {
                    generation,
                })
            },
        ),
        ReloadListing => Task::done(AppEvent::ListingUi(ListingEvent::Reload)),
        Closed { in_flight } => {
            app.state.abort_uploads(&in_flight);
            Task::none()
        },
    }
}
