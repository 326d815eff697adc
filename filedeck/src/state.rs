use std::collections::HashMap;

use iced::Size;
use iced::keyboard::Modifiers;
use iced::task::Handle;
use uuid::Uuid;

use crate::widgets::chrome::view::header::HEADER_HEIGHT;
use crate::widgets::explorer::view::sidebar_tree::PANEL_WIDTH;

/// Window geometry, modifier keys and in-flight request handles.
#[derive(Default)]
pub(crate) struct State {
    window_size: Size,
    modifiers: Modifiers,
    listing_request: Option<Handle>,
    viewer_request: Option<Handle>,
    uploads: HashMap<Uuid, Handle>,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    pub(crate) fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
    }

    pub(crate) fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Whether a click should extend the selection instead of replacing it.
    pub(crate) fn additive_selection(&self) -> bool {
        self.modifiers.control()
            || self.modifiers.shift()
            || self.modifiers.logo()
    }

    /// Size of the listing region the cursor position is reported in.
    pub(crate) fn listing_area_size(&self, drawer_open: bool) -> Size {
        let panel = if drawer_open { PANEL_WIDTH } else { 0.0 };
        Size::new(
            (self.window_size.width - panel).max(0.0),
            (self.window_size.height - HEADER_HEIGHT).max(0.0),
        )
    }

    /// Track the current listing fetch, aborting the one it supersedes.
    pub(crate) fn replace_listing_request(&mut self, handle: Handle) {
        if let Some(previous) = self.listing_request.replace(handle) {
            previous.abort();
        }
    }

    /// Track the current viewer fetch, aborting the one it supersedes.
    pub(crate) fn replace_viewer_request(&mut self, handle: Handle) {
        if let Some(previous) = self.viewer_request.replace(handle) {
            previous.abort();
        }
    }

    pub(crate) fn abort_viewer_request(&mut self) {
        if let Some(handle) = self.viewer_request.take() {
            handle.abort();
        }
    }

    pub(crate) fn track_upload(&mut self, id: Uuid, handle: Handle) {
        self.uploads.insert(id, handle);
    }

    /// Forget a finished upload.
    pub(crate) fn finish_upload(&mut self, id: Uuid) {
        self.uploads.remove(&id);
    }

    /// Abort the given uploads and forget them.
    pub(crate) fn abort_uploads(&mut self, ids: &[Uuid]) {
        for id in ids {
            if let Some(handle) = self.uploads.remove(id) {
                log::debug!("aborting upload {id}");
                handle.abort();
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn tracked_uploads(&self) -> usize {
        self.uploads.len()
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::Modifiers;
    use iced::{Size, Task};
    use uuid::Uuid;

    use super::State;
    use crate::widgets::chrome::view::header::HEADER_HEIGHT;
    use crate::widgets::explorer::view::sidebar_tree::PANEL_WIDTH;

    #[test]
    fn given_no_modifiers_when_checking_selection_then_it_is_not_additive() {
        let state = State::default();

        assert!(!state.additive_selection());
    }

    #[test]
    fn given_control_held_when_checking_selection_then_it_is_additive() {
        let mut state = State::default();

        state.set_modifiers(Modifiers::CTRL);

        assert!(state.additive_selection());
    }

    #[test]
    fn given_open_drawer_when_sizing_listing_then_chrome_is_excluded() {
        let state = State::new(Size::new(1000.0, 700.0));

        let open = state.listing_area_size(true);
        let closed = state.listing_area_size(false);

        assert_eq!(open.width, 1000.0 - PANEL_WIDTH);
        assert_eq!(open.height, 700.0 - HEADER_HEIGHT);
        assert_eq!(closed.width, 1000.0);
    }

    #[test]
    fn given_tiny_window_when_sizing_listing_then_size_is_not_negative() {
        let state = State::new(Size::new(10.0, 10.0));

        let size = state.listing_area_size(true);

        assert_eq!(size, Size::new(0.0, 0.0));
    }

    #[test]
    fn given_tracked_uploads_when_aborted_then_only_named_ones_are_dropped() {
        let mut state = State::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let (_task, first_handle) = Task::<()>::none().abortable();
        let (_task, second_handle) = Task::<()>::none().abortable();
        state.track_upload(first, first_handle);
        state.track_upload(second, second_handle);

        state.abort_uploads(&[first]);

        assert_eq!(state.tracked_uploads(), 1);
        state.finish_upload(second);
        assert_eq!(state.tracked_uploads(), 0);
    }
}
