pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{ListingEffect, ListingEvent};
use iced::Task;
pub(crate) use reducer::ListingCtx;
use state::ListingState;

use self::model::{
    ContextMenuState, DeleteConfirm, ListingViewModel, NamePrompt,
};

/// Listing widget: the current directory, its selection, bulk actions and
/// the dialogs they open.
pub(crate) struct ListingWidget {
    state: ListingState,
}

impl ListingWidget {
    /// Create an idle widget; the first `Navigate` starts loading.
    pub(crate) fn new(show_hidden: bool) -> Self {
        Self {
            state: ListingState::with_show_hidden(show_hidden),
        }
    }

    /// Reduce a UI event into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        event: ListingEvent,
        ctx: &ListingCtx,
    ) -> Task<ListingEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn path(&self) -> &str {
        self.state.path()
    }

    pub(crate) fn show_hidden(&self) -> bool {
        self.state.show_hidden()
    }

    pub(crate) fn context_menu(&self) -> Option<&ContextMenuState> {
        self.state.context_menu()
    }

    pub(crate) fn prompt(&self) -> Option<&NamePrompt> {
        self.state.prompt()
    }

    pub(crate) fn delete_confirm(&self) -> Option<&DeleteConfirm> {
        self.state.delete_confirm()
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.state.selected_entries().len()
    }

    /// Return a view model for the toolbar and table.
    pub(crate) fn vm(&self) -> ListingViewModel<'_> {
        ListingViewModel {
            path: self.state.path(),
            entries: self.state.visible_entries(),
            loading: self.state.is_loading(),
            error: self.state.has_error(),
            selected_count: self.selected_count(),
            show_hidden: self.state.show_hidden(),
            notice: self.state.notice(),
            hovered: self.state.hovered(),
        }
    }
}
