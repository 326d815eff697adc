pub(crate) mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod services;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{ViewerEffect, ViewerEvent};
use iced::Task;
use state::ViewerState;

use self::model::ViewerViewModel;

/// Viewer widget: detects a file's type and shows the matching preview.
pub(crate) struct ViewerWidget {
    state: ViewerState,
}

impl ViewerWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ViewerState::default(),
        }
    }

    /// Reduce a UI event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: ViewerEvent) -> Task<ViewerEffect> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.path().is_some()
    }

    /// Return a view model while the viewer is open.
    pub(crate) fn vm(&self) -> Option<ViewerViewModel<'_>> {
        let path = self.state.path()?;
        Some(ViewerViewModel {
            path,
            detection: self.state.detection(),
            forced: self.state.forced(),
            force_choice: self.state.force_choice(),
            content: self.state.content(),
        })
    }
}
