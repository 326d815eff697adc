pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{ExplorerEffect, ExplorerEvent};
use iced::Task;
pub(crate) use reducer::ExplorerCtx;
use state::ExplorerState;

/// Explorer widget: lazily loaded directory tree with placeholder
/// children, selection that drives navigation, and scroll targeting.
pub(crate) struct ExplorerWidget {
    state: ExplorerState,
}

impl ExplorerWidget {
    /// Create a widget showing only the root loading sentinel.
    pub(crate) fn new() -> Self {
        Self {
            state: ExplorerState::default(),
        }
    }

    /// Reduce a UI event into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        event: ExplorerEvent,
        ctx: &ExplorerCtx,
    ) -> Task<ExplorerEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Return a tree view model for the panel.
    pub(crate) fn tree_vm(&self) -> model::ExplorerTreeViewModel<'_> {
        model::ExplorerTreeViewModel {
            nodes: self.state.visible_nodes(),
            selected: self.state.selected(),
            hovered: self.state.hovered(),
        }
    }
}
