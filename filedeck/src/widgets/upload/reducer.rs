use filedeck_client::UploadProgress;
use iced::Task;

use super::event::{UploadEffect, UploadEvent};
use super::model::{CollisionChoice, CollisionPrompt, StagedFile};
use super::state::UploadState;

/// Reduce an upload event into state updates and effects.
pub(crate) fn reduce(
    state: &mut UploadState,
    event: UploadEvent,
) -> Task<UploadEffect> {
    match event {
        UploadEvent::Open { dir } => {
            state.open(dir);
            Task::none()
        },
        UploadEvent::Close => {
            let in_flight = state.close();
            Task::done(UploadEffect::Closed { in_flight })
        },
        UploadEvent::FileDropped { path } => {
            if state.dir().is_some() && !state.stage(path.clone()) {
                log::debug!("ignored dropped path {}", path.display());
            }
            Task::none()
        },
        UploadEvent::PathInputChanged(value) => {
            state.set_path_input(value);
            Task::none()
        },
        UploadEvent::PathInputSubmitted => {
            let value = state.take_path_input();
            let value = value.trim();
            if value.is_empty() {
                return Task::none();
            }
            if !state.stage(value.into()) {
                state.set_input_error(Some(format!(
                    "Cannot stage {value:?}: no file name or already staged"
                )));
            }
            Task::none()
        },
        UploadEvent::Unstage { source } => {
            state.unstage(&source);
            Task::none()
        },
        UploadEvent::Submit => reduce_submit(state),
        UploadEvent::ExistsChecked { dir, result } => {
            if state.dir() != Some(dir.as_str()) || !state.is_checking() {
                return Task::none();
            }
            state.set_checking(false);
            match result {
                Ok(existing) => {
                    let colliding: Vec<String> = state
                        .staged()
                        .iter()
                        .filter(|file| existing.contains(&file.name))
                        .map(|file| file.name.clone())
                        .collect();
                    if colliding.is_empty() {
                        start(state, |_| true)
                    } else {
                        state.set_collision(Some(CollisionPrompt {
                            colliding,
                        }));
                        Task::none()
                    }
                },
                Err(err) => {
                    log::warn!("exists check in {dir:?} failed: {err}");
                    start(state, |_| true)
                },
            }
        },
        UploadEvent::CollisionResolved(choice) => {
            let Some(prompt) = state.collision().cloned() else {
                return Task::none();
            };
            state.set_collision(None);
            match choice {
                CollisionChoice::Cancel => {
                    let _dropped = state.take_staged(|_| false);
                    Task::none()
                },
                CollisionChoice::UploadMissing => {
                    start(state, |file| !prompt.colliding.contains(&file.name))
                },
                CollisionChoice::Override => start(state, |_| true),
            }
        },
        UploadEvent::Progress { id, loaded, total } => {
            if let Some(percent) = UploadProgress::percent(loaded, total) {
                state.set_progress(id, percent);
            }
            Task::none()
        },
        UploadEvent::Finished { id, result } => {
            if let Err(err) = &result {
                log::warn!("upload task {id} failed: {err}");
            }
            match state.finish(id, result) {
                Some(generation) => {
                    Task::done(UploadEffect::ScheduleReload { generation })
                },
                None => Task::none(),
            }
        },
        UploadEvent::Dismiss { id } => {
            state.dismiss(id);
            Task::none()
        },
        UploadEvent::ReloadTimerElapsed { generation } => {
            if state.is_latest_reload(generation) {
                Task::done(UploadEffect::ReloadListing)
            } else {
                Task::none()
            }
        },
    }
}

fn reduce_submit(state: &mut UploadState) -> Task<UploadEffect> {
    let Some(dir) = state.dir().map(str::to_string) else {
        return Task::none();
    };
    if state.staged().is_empty() || state.is_checking() {
        return Task::none();
    }

    let names = state.staged().iter().map(|file| file.name.clone()).collect();
    state.set_checking(true);
    Task::done(UploadEffect::CheckExists { dir, names })
}

/// Queue the staged files `keep` accepts and start one transfer each.
fn start(
    state: &mut UploadState,
    keep: impl Fn(&StagedFile) -> bool,
) -> Task<UploadEffect> {
    let Some(dir) = state.dir().map(str::to_string) else {
        return Task::none();
    };

    let files = state.take_staged(keep);
    let tasks: Vec<Task<UploadEffect>> = state
        .queue(files)
        .into_iter()
        .map(|(id, source)| {
            Task::done(UploadEffect::StartUpload {
                id,
                dir: dir.clone(),
                source,
            })
        })
        .collect();
    Task::batch(tasks)
}
