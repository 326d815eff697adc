use filedeck_client::DirectoryListing;
use iced::Point;

use super::model::{
    ContextMenuState, DeleteConfirm, DirectoryEntry, NamePrompt,
    entries_from_listing,
};
use crate::filter::ViewFilter;

/// Runtime state for the directory listing.
#[derive(Debug, Default)]
pub(crate) struct ListingState {
    path: String,
    entries: Vec<DirectoryEntry>,
    loading: bool,
    error: bool,
    generation: u64,
    show_hidden: bool,
    hovered: Option<String>,
    cursor: Point,
    context_menu: Option<ContextMenuState>,
    prompt: Option<NamePrompt>,
    delete_confirm: Option<DeleteConfirm>,
    notice: Option<String>,
}

impl ListingState {
    pub(crate) fn with_show_hidden(show_hidden: bool) -> Self {
        Self {
            show_hidden,
            ..Self::default()
        }
    }

    // --- Read access ---

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn has_error(&self) -> bool {
        self.error
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub(crate) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub(crate) fn context_menu(&self) -> Option<&ContextMenuState> {
        self.context_menu.as_ref()
    }

    pub(crate) fn prompt(&self) -> Option<&NamePrompt> {
        self.prompt.as_ref()
    }

    pub(crate) fn delete_confirm(&self) -> Option<&DeleteConfirm> {
        self.delete_confirm.as_ref()
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn filter(&self) -> ViewFilter {
        ViewFilter::entries(self.show_hidden)
    }

    /// Entries passing the current filter; the parent row always does.
    pub(crate) fn visible_entries(&self) -> Vec<&DirectoryEntry> {
        let filter = self.filter();
        self.entries
            .iter()
            .filter(|entry| {
                entry.is_parent_link
                    || filter.admits(entry.is_directory, entry.is_hidden)
            })
            .collect()
    }

    /// Selected entries, skipping hidden ones unless they are shown.
    pub(crate) fn selected_entries(&self) -> Vec<&DirectoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_selected)
            .filter(|entry| self.show_hidden || !entry.is_hidden)
            .collect()
    }

    /// Selected entries that bulk mutations may target.
    pub(crate) fn mutation_targets(&self) -> Vec<&DirectoryEntry> {
        self.selected_entries()
            .into_iter()
            .filter(|entry| !entry.is_parent_link)
            .collect()
    }

    pub(crate) fn find(&self, path: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    // --- Write access ---

    /// Start loading `path` and return the request generation.
    ///
    /// Moving to another directory drops the previous selection and any
    /// pending prompt that targets it.
    pub(super) fn begin_load(&mut self, path: String) -> u64 {
        if path != self.path {
            self.unselect_all();
            self.hovered = None;
            self.context_menu = None;
            self.prompt = None;
            self.delete_confirm = None;
        }
        self.path = path;
        self.loading = true;
        self.error = false;
        self.generation += 1;
        self.generation
    }

    /// Apply a listing for the current generation.
    ///
    /// Returns `false` for stale responses.
    pub(super) fn apply_listing(
        &mut self,
        generation: u64,
        listing: &DirectoryListing,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.entries = entries_from_listing(&self.path, listing);
        self.loading = false;
        self.error = false;
        self.hovered = None;
        true
    }

    /// Mark the current generation failed.
    pub(super) fn fail_load(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }

        self.entries.clear();
        self.loading = false;
        self.error = true;
        true
    }

    /// Select `path`; additive toggles it, otherwise it becomes the sole
    /// selection.
    pub(super) fn select_item(&mut self, path: &str, additive: bool) {
        for entry in &mut self.entries {
            if entry.path == path {
                entry.is_selected = !additive || !entry.is_selected;
            } else if !additive {
                entry.is_selected = false;
            }
        }
    }

    pub(super) fn unselect_all(&mut self) {
        for entry in &mut self.entries {
            entry.is_selected = false;
        }
    }

    pub(super) fn toggle_show_hidden(&mut self) -> bool {
        self.show_hidden = !self.show_hidden;
        self.show_hidden
    }

    pub(super) fn set_hovered(&mut self, path: Option<String>) {
        self.hovered = path;
    }

    pub(super) fn set_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;
    }

    pub(super) fn open_context_menu(&mut self) {
        self.context_menu = Some(ContextMenuState {
            cursor: self.cursor,
        });
    }

    pub(super) fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    pub(super) fn set_prompt(&mut self, prompt: Option<NamePrompt>) {
        self.prompt = prompt;
    }

    pub(super) fn prompt_mut(&mut self) -> Option<&mut NamePrompt> {
        self.prompt.as_mut()
    }

    pub(super) fn take_prompt(&mut self) -> Option<NamePrompt> {
        self.prompt.take()
    }

    pub(super) fn set_delete_confirm(
        &mut self,
        confirm: Option<DeleteConfirm>,
    ) {
        self.delete_confirm = confirm;
    }

    pub(super) fn take_delete_confirm(&mut self) -> Option<DeleteConfirm> {
        self.delete_confirm.take()
    }

    pub(super) fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}

#[cfg(test)]
mod tests {
    use filedeck_client::RawEntry;

    use super::*;

    fn loaded(path: &str, names: &[(&str, bool, bool)]) -> ListingState {
        let mut state = ListingState::default();
        let generation = state.begin_load(path.to_string());
        let listing = DirectoryListing {
            path: path.to_string(),
            files: names
                .iter()
                .map(|(name, is_directory, is_hidden)| RawEntry {
                    name: name.to_string(),
                    is_directory: *is_directory,
                    is_hidden: *is_hidden,
                    size: 1,
                })
                .collect(),
        };
        assert!(state.apply_listing(generation, &listing));
        state
    }

    fn selected_names(state: &ListingState) -> Vec<&str> {
        state
            .selected_entries()
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    #[test]
    fn given_plain_click_when_selecting_then_previous_selection_is_cleared() {
        let mut state =
            loaded("", &[("a", false, false), ("b", false, false)]);

        state.select_item("a", false);
        state.select_item("b", false);

        assert_eq!(selected_names(&state), vec!["b"]);
    }

    #[test]
    fn given_additive_click_when_selecting_twice_then_entry_toggles() {
        let mut state =
            loaded("", &[("a", false, false), ("b", false, false)]);

        state.select_item("a", false);
        state.select_item("b", true);
        assert_eq!(selected_names(&state), vec!["a", "b"]);

        state.select_item("b", true);
        assert_eq!(selected_names(&state), vec!["a"]);
    }

    #[test]
    fn given_hidden_selected_entry_when_hidden_not_shown_then_it_is_excluded()
    {
        let mut state =
            loaded("", &[(".env", false, true), ("a", false, false)]);
        state.select_item(".env", true);
        state.select_item("a", true);

        assert_eq!(selected_names(&state), vec!["a"]);

        state.toggle_show_hidden();
        assert_eq!(selected_names(&state), vec![".env", "a"]);
    }

    #[test]
    fn given_hidden_entries_when_filtering_then_parent_row_stays_visible() {
        let state =
            loaded("docs", &[(".cache", true, true), ("a", false, false)]);

        let names: Vec<&str> = state
            .visible_entries()
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect();

        assert_eq!(names, vec!["..", "a"]);
        assert_eq!(state.entries().len(), 3);
    }

    #[test]
    fn given_stale_generation_when_listing_arrives_then_it_is_ignored() {
        let mut state = loaded("", &[("a", false, false)]);
        let stale = state.begin_load(String::from("docs"));
        let _current = state.begin_load(String::from("src"));

        assert!(!state.apply_listing(stale, &DirectoryListing::default()));
        assert!(!state.fail_load(stale));
        assert!(state.is_loading());
        assert_eq!(state.path(), "src");
    }

    #[test]
    fn given_reload_when_listing_arrives_then_selection_is_reset() {
        let mut state = loaded("", &[("a", false, false)]);
        state.select_item("a", false);

        let generation = state.begin_load(String::new());
        let listing = DirectoryListing {
            path: String::new(),
            files: vec![RawEntry {
                name: String::from("a"),
                is_directory: false,
                is_hidden: false,
                size: 1,
            }],
        };
        state.apply_listing(generation, &listing);

        assert!(state.selected_entries().is_empty());
    }

    #[test]
    fn given_selection_when_navigating_elsewhere_then_it_is_dropped() {
        let mut state = loaded("", &[("a", false, false)]);
        state.select_item("a", false);

        let _generation = state.begin_load(String::from("docs"));

        assert!(state.is_loading());
        assert!(state.selected_entries().is_empty());
    }

    #[test]
    fn given_parent_row_selected_when_listing_targets_then_it_is_skipped() {
        let mut state = loaded("docs", &[("a", false, false)]);
        state.select_item("", false);
        state.select_item("docs/a", true);

        let targets: Vec<&str> = state
            .mutation_targets()
            .into_iter()
            .map(|entry| entry.path.as_str())
            .collect();

        assert_eq!(targets, vec!["docs/a"]);
    }
}
