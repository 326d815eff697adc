use filedeck_client::paths::join_path;
use iced::Task;

use super::event::{ListingEffect, ListingEvent};
use super::model::{
    DeleteConfirm, DirectoryEntry, ListingAction, NamePrompt, NamePromptKind,
};
use super::state::ListingState;

/// Runtime context for the listing reducer.
pub(crate) struct ListingCtx {
    /// A selection modifier (Ctrl, Shift or Cmd) is held.
    pub(crate) additive: bool,
}

/// Reduce a listing event into state updates and effects.
pub(crate) fn reduce(
    state: &mut ListingState,
    event: ListingEvent,
    ctx: &ListingCtx,
) -> Task<ListingEffect> {
    match event {
        ListingEvent::Navigate { path } => {
            state.close_context_menu();
            load(state, path)
        },
        ListingEvent::Reload => {
            let path = state.path().to_string();
            load(state, path)
        },
        ListingEvent::Loaded {
            generation,
            listing,
        } => {
            if !state.apply_listing(generation, &listing) {
                log::debug!("dropped stale listing #{generation}");
            }
            Task::none()
        },
        ListingEvent::LoadFailed {
            generation,
            message,
        } => {
            if state.fail_load(generation) {
                log::warn!("listing of {:?} failed: {message}", state.path());
            }
            Task::none()
        },
        ListingEvent::RowPressed { path } => {
            state.close_context_menu();
            state.select_item(&path, ctx.additive);
            Task::none()
        },
        ListingEvent::RowDoubleClicked { path } => {
            state.close_context_menu();
            match state.find(&path).cloned() {
                Some(entry) => open_entry(state, &entry),
                None => Task::none(),
            }
        },
        ListingEvent::RowRightClicked { path } => {
            let is_selected =
                state.find(&path).is_some_and(|entry| entry.is_selected);
            if !is_selected {
                state.select_item(&path, ctx.additive);
            }
            state.open_context_menu();
            Task::none()
        },
        ListingEvent::RowHovered { path } => {
            state.set_hovered(path);
            Task::none()
        },
        ListingEvent::SurfaceRightClicked => {
            state.open_context_menu();
            Task::none()
        },
        ListingEvent::CursorMoved { position } => {
            state.set_cursor(position);
            Task::none()
        },
        ListingEvent::ContextMenuDismiss => {
            state.close_context_menu();
            Task::none()
        },
        ListingEvent::Action(action) => {
            state.close_context_menu();
            reduce_action(state, action)
        },
        ListingEvent::UnselectAll => {
            state.unselect_all();
            Task::none()
        },
        ListingEvent::ShowHiddenToggled => {
            let show_hidden = state.toggle_show_hidden();
            Task::done(ListingEffect::ShowHiddenChanged { show_hidden })
        },
        ListingEvent::PromptChanged(value) => {
            if let Some(prompt) = state.prompt_mut() {
                prompt.value = value;
            }
            Task::none()
        },
        ListingEvent::PromptConfirmed => reduce_prompt_confirmed(state),
        ListingEvent::PromptCancelled => {
            state.set_prompt(None);
            Task::none()
        },
        ListingEvent::DeleteConfirmed { recursive } => {
            match state.take_delete_confirm() {
                Some(confirm) => Task::done(ListingEffect::DeleteEntries {
                    paths: confirm.paths,
                    recursive,
                }),
                None => Task::none(),
            }
        },
        ListingEvent::DeleteCancelled => {
            state.set_delete_confirm(None);
            Task::none()
        },
        ListingEvent::MutationFinished { errors } => {
            if !errors.is_empty() {
                for error in &errors {
                    log::warn!("listing action failed: {error}");
                }
                state.set_notice(Some(errors.join("; ")));
            }
            let path = state.path().to_string();
            load(state, path)
        },
        ListingEvent::DownloadFinished { name, result } => {
            match result {
                Ok(target) => {
                    log::info!("downloaded {name:?} to {}", target.display());
                },
                Err(err) => {
                    log::warn!("download of {name:?} failed: {err}");
                    state.set_notice(Some(format!(
                        "Download of {name} failed: {err}"
                    )));
                },
            }
            Task::none()
        },
        ListingEvent::DismissNotice => {
            state.set_notice(None);
            Task::none()
        },
    }
}

fn load(state: &mut ListingState, path: String) -> Task<ListingEffect> {
    let generation = state.begin_load(path.clone());
    Task::done(ListingEffect::LoadDirectory { path, generation })
}

/// Directories (the parent row included) navigate, files open the viewer.
fn open_entry(
    state: &mut ListingState,
    entry: &DirectoryEntry,
) -> Task<ListingEffect> {
    if entry.is_directory {
        return load(state, entry.path.clone());
    }
    Task::done(ListingEffect::OpenFile {
        path: entry.path.clone(),
    })
}

fn reduce_action(
    state: &mut ListingState,
    action: ListingAction,
) -> Task<ListingEffect> {
    match action {
        ListingAction::Open => {
            let first = state.selected_entries().first().map(|e| (*e).clone());
            match first {
                Some(entry) => open_entry(state, &entry),
                None => Task::none(),
            }
        },
        ListingAction::Download => {
            let tasks: Vec<Task<ListingEffect>> = state
                .selected_entries()
                .into_iter()
                .filter(|entry| !entry.is_directory)
                .map(|entry| {
                    Task::done(ListingEffect::DownloadFile {
                        path: entry.path.clone(),
                        name: entry.name.clone(),
                    })
                })
                .collect();
            Task::batch(tasks)
        },
        ListingAction::Delete => {
            let targets = state.mutation_targets();
            if targets.is_empty() {
                return Task::none();
            }
            let confirm = DeleteConfirm {
                paths: targets.iter().map(|entry| entry.path.clone()).collect(),
                names: targets.iter().map(|entry| entry.name.clone()).collect(),
            };
            state.set_delete_confirm(Some(confirm));
            Task::none()
        },
        ListingAction::Rename => {
            let prompt = match state.mutation_targets().as_slice() {
                [entry] => NamePrompt::rename(entry.path.clone(), &entry.name),
                _ => return Task::none(),
            };
            state.set_prompt(Some(prompt));
            Task::none()
        },
        ListingAction::CreateDirectory => {
            let parent = state.path().to_string();
            state.set_prompt(Some(NamePrompt::create_directory(parent)));
            Task::none()
        },
        ListingAction::Upload => Task::done(ListingEffect::OpenUpload {
            dir: state.path().to_string(),
        }),
    }
}

fn reduce_prompt_confirmed(state: &mut ListingState) -> Task<ListingEffect> {
    if !state.prompt().is_some_and(NamePrompt::is_valid) {
        return Task::none();
    }
    let Some(prompt) = state.take_prompt() else {
        return Task::none();
    };

    match prompt.kind {
        NamePromptKind::Rename { path } => Task::done(ListingEffect::Rename {
            path,
            new_name: prompt.value,
        }),
        NamePromptKind::CreateDirectory { parent } => {
            Task::done(ListingEffect::CreateDirectory {
                path: join_path(&parent, &prompt.value),
            })
        },
    }
}
