use iced::Task;

use super::event::{ExplorerEffect, ExplorerEvent};
use super::model::{NodeRole, ROOT_ID, nodes_from_listing};
use super::state::{ExplorerState, error_owner};
use crate::filter::ViewFilter;

/// Runtime context for the explorer reducer.
pub(crate) struct ExplorerCtx {
    /// Visibility rules for the tree panel.
    pub(crate) filter: ViewFilter,
}

/// Reduce an explorer event into state updates and effects.
pub(crate) fn reduce(
    state: &mut ExplorerState,
    event: ExplorerEvent,
    ctx: &ExplorerCtx,
) -> Task<ExplorerEffect> {
    match event {
        ExplorerEvent::NodePressed { id } => {
            reduce_node_pressed(state, id, ctx)
        },
        ExplorerEvent::ToggleFolder { id } => {
            let task = toggle(state, &id);
            state.refresh_visible(ctx.filter);
            task
        },
        ExplorerEvent::NodeHovered { id } => {
            state.set_hovered(id);
            Task::none()
        },
        ExplorerEvent::ViewportChanged { viewport } => {
            state.set_viewport(viewport);
            Task::none()
        },
        ExplorerEvent::FilterChanged => {
            state.refresh_visible(ctx.filter);
            Task::none()
        },
        ExplorerEvent::LoadRoot => {
            state.begin_root_load();
            state.refresh_visible(ctx.filter);
            Task::done(ExplorerEffect::LoadRootRequested)
        },
        ExplorerEvent::RootLoaded { listing } => {
            state.apply_root(nodes_from_listing("", &listing));
            state.refresh_visible(ctx.filter);
            Task::none()
        },
        ExplorerEvent::RootLoadFailed { message } => {
            log::warn!("explorer root load failed: {message}");
            state.fail_root();
            state.refresh_visible(ctx.filter);
            Task::none()
        },
        ExplorerEvent::FolderLoaded { id, listing } => {
            let fetched = nodes_from_listing(&id, &listing);
            let count = fetched.len();
            if !state.apply_children(&id, fetched) {
                return Task::none();
            }
            log::debug!(
                "explorer merged {count} entries into {id:?} (revision {})",
                state.revision()
            );
            state.refresh_visible(ctx.filter);
            scroll_to(state, &id)
        },
        ExplorerEvent::FolderLoadFailed { id, message } => {
            log::warn!("explorer load of {id:?} failed: {message}");
            state.fail_children(&id);
            state.refresh_visible(ctx.filter);
            Task::none()
        },
    }
}

/// Handle node press: select entries, toggle directories, retry failures.
fn reduce_node_pressed(
    state: &mut ExplorerState,
    id: String,
    ctx: &ExplorerCtx,
) -> Task<ExplorerEffect> {
    let Some(role) = state.find(&id).map(|node| node.role) else {
        return Task::none();
    };

    match role {
        NodeRole::Loading => Task::none(),
        NodeRole::LoadFailed if id == ROOT_ID => {
            state.begin_root_load();
            state.refresh_visible(ctx.filter);
            Task::done(ExplorerEffect::LoadRootRequested)
        },
        NodeRole::LoadFailed => {
            let Some(owner) = error_owner(&id).map(str::to_string) else {
                return Task::none();
            };
            let task = expand(state, &owner);
            state.refresh_visible(ctx.filter);
            task
        },
        NodeRole::Entry => {
            let Some(path) = state.select(&id) else {
                return Task::none();
            };
            let is_directory =
                state.find(&id).is_some_and(|node| node.is_directory());

            let mut tasks =
                vec![Task::done(ExplorerEffect::NavigateRequested { path })];
            if is_directory {
                tasks.push(toggle(state, &id));
            }
            state.refresh_visible(ctx.filter);
            tasks.push(scroll_to(state, &id));

            Task::batch(tasks)
        },
    }
}

fn toggle(state: &mut ExplorerState, id: &str) -> Task<ExplorerEffect> {
    let is_expanded = state.find(id).is_some_and(|node| node.expanded);
    if is_expanded {
        state.collapse(id);
        return Task::none();
    }
    expand(state, id)
}

fn expand(state: &mut ExplorerState, id: &str) -> Task<ExplorerEffect> {
    if !state.expand(id) {
        return Task::none();
    }
    Task::done(ExplorerEffect::LoadFolderRequested { id: id.to_string() })
}

fn scroll_to(state: &ExplorerState, id: &str) -> Task<ExplorerEffect> {
    match state.scroll_target(id) {
        Some(offset) => Task::done(ExplorerEffect::ScrollRequested { offset }),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use filedeck_client::{DirectoryListing, RawEntry};

    use super::*;
    use crate::widgets::explorer::model::ExplorerNode;

    fn ctx() -> ExplorerCtx {
        ExplorerCtx {
            filter: ViewFilter::directories(false),
        }
    }

    fn listing(path: &str, entries: &[(&str, bool, bool)]) -> DirectoryListing {
        DirectoryListing {
            path: path.to_string(),
            files: entries
                .iter()
                .map(|(name, is_directory, is_hidden)| RawEntry {
                    name: name.to_string(),
                    is_directory: *is_directory,
                    is_hidden: *is_hidden,
                    size: 0,
                })
                .collect(),
        }
    }

    fn child_ids(state: &ExplorerState, id: &str) -> Vec<String> {
        state
            .find(id)
            .map(|node| {
                node.child_nodes().iter().map(|c| c.id.clone()).collect()
            })
            .unwrap_or_default()
    }

    fn rooted_state() -> ExplorerState {
        let mut state = ExplorerState::default();
        let _task = reduce(
            &mut state,
            ExplorerEvent::RootLoaded {
                listing: listing("", &[
                    ("docs", true, false),
                    (".git", true, true),
                    ("notes.txt", false, false),
                ]),
            },
            &ctx(),
        );
        state
    }

    #[test]
    fn given_root_listing_when_loaded_then_sentinel_is_replaced() {
        let state = rooted_state();

        let ids: Vec<&str> =
            state.nodes().iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, vec!["docs", ".git", "notes.txt"]);
    }

    #[test]
    fn given_hidden_filter_when_root_loaded_then_visible_directories_render()
     {
        let state = rooted_state();

        let ids: Vec<&str> = state
            .visible_nodes()
            .iter()
            .map(|node| node.id.as_str())
            .collect();
        assert_eq!(ids, vec!["docs"]);
    }

    #[test]
    fn given_directory_press_when_reduced_then_selected_and_loading() {
        let mut state = rooted_state();

        let _task = reduce(
            &mut state,
            ExplorerEvent::NodePressed {
                id: String::from("docs"),
            },
            &ctx(),
        );

        assert_eq!(state.selected(), Some("docs"));
        assert_eq!(child_ids(&state, "docs"), vec![String::from(
            "docs/<loading>"
        )]);
    }

    #[test]
    fn given_folder_listing_when_loaded_then_placeholder_is_replaced() {
        let mut state = rooted_state();
        let _task = reduce(
            &mut state,
            ExplorerEvent::ToggleFolder {
                id: String::from("docs"),
            },
            &ctx(),
        );

        let _task = reduce(
            &mut state,
            ExplorerEvent::FolderLoaded {
                id: String::from("docs"),
                listing: listing("docs", &[
                    ("a.txt", false, false),
                    ("img", true, false),
                ]),
            },
            &ctx(),
        );

        assert_eq!(child_ids(&state, "docs"), vec![
            String::from("docs/a.txt"),
            String::from("docs/img"),
        ]);
    }

    #[test]
    fn given_same_listing_twice_when_merged_then_tree_is_identical() {
        let mut state = rooted_state();
        let event = ExplorerEvent::FolderLoaded {
            id: String::from("docs"),
            listing: listing("docs", &[("a.txt", false, false)]),
        };
        let _task = reduce(
            &mut state,
            ExplorerEvent::ToggleFolder {
                id: String::from("docs"),
            },
            &ctx(),
        );
        let _task = reduce(&mut state, event.clone(), &ctx());
        let snapshot: Vec<ExplorerNode> = state.nodes().to_vec();

        let _task = reduce(&mut state, event, &ctx());

        assert_eq!(state.nodes(), snapshot.as_slice());
    }

    #[test]
    fn given_failed_expansion_when_reduced_then_single_error_child_remains() {
        let mut state = rooted_state();
        let _task = reduce(
            &mut state,
            ExplorerEvent::ToggleFolder {
                id: String::from("docs"),
            },
            &ctx(),
        );

        let _task = reduce(
            &mut state,
            ExplorerEvent::FolderLoadFailed {
                id: String::from("docs"),
                message: String::from("HTTP 500"),
            },
            &ctx(),
        );

        assert_eq!(child_ids(&state, "docs"), vec![String::from(
            "docs/<error>"
        )]);
    }

    #[test]
    fn given_error_child_when_pressed_then_parent_reloads_with_placeholder() {
        let mut state = rooted_state();
        let _task = reduce(
            &mut state,
            ExplorerEvent::ToggleFolder {
                id: String::from("docs"),
            },
            &ctx(),
        );
        let _task = reduce(
            &mut state,
            ExplorerEvent::FolderLoadFailed {
                id: String::from("docs"),
                message: String::from("timeout"),
            },
            &ctx(),
        );

        let _task = reduce(
            &mut state,
            ExplorerEvent::NodePressed {
                id: String::from("docs/<error>"),
            },
            &ctx(),
        );

        assert_eq!(child_ids(&state, "docs"), vec![String::from(
            "docs/<loading>"
        )]);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn given_root_failure_when_reduced_then_sentinel_shows_error() {
        let mut state = ExplorerState::default();

        let _task = reduce(
            &mut state,
            ExplorerEvent::RootLoadFailed {
                message: String::from("connection refused"),
            },
            &ctx(),
        );

        assert_eq!(
            state.find(ROOT_ID).map(|node| node.role),
            Some(NodeRole::LoadFailed)
        );
    }

    #[test]
    fn given_filter_change_when_reduced_then_hidden_nodes_appear() {
        let mut state = rooted_state();

        let ctx = ExplorerCtx {
            filter: ViewFilter::directories(true),
        };
        let _task = reduce(&mut state, ExplorerEvent::FilterChanged, &ctx);

        assert_eq!(state.visible_nodes().len(), 2);
        assert_eq!(state.nodes().len(), 3);
    }
}
