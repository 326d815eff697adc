pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use event::{UploadEffect, UploadEvent};
use iced::Task;
use state::UploadState;

use self::model::{CollisionPrompt, UploadViewModel, summarize};

/// Upload widget: staging, collision check, per-file transfers and the
/// debounced listing reload.
pub(crate) struct UploadWidget {
    state: UploadState,
}

impl UploadWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: UploadState::default(),
        }
    }

    /// Reduce a UI event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: UploadEvent) -> Task<UploadEffect> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.dir().is_some()
    }

    pub(crate) fn collision(&self) -> Option<&CollisionPrompt> {
        self.state.collision()
    }

    /// Return a view model while the modal is open.
    pub(crate) fn vm(&self) -> Option<UploadViewModel<'_>> {
        let dir = self.state.dir()?;
        Some(UploadViewModel {
            dir,
            staged: self.state.staged(),
            path_input: self.state.path_input(),
            input_error: self.state.input_error(),
            checking: self.state.is_checking(),
            tasks: self.state.tasks(),
            summary: summarize(self.state.tasks()),
        })
    }
}
