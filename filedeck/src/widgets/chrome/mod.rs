pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ChromeEffect, ChromeEvent};
use self::model::ChromeViewModel;
use self::state::ChromeState;

/// Chrome widget: header strip and the explorer drawer toggle.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    pub(crate) fn new(drawer_open: bool) -> Self {
        Self {
            state: ChromeState::new(drawer_open),
        }
    }

    /// Reduce a chrome event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: ChromeEvent) -> Task<ChromeEffect> {
        reducer::reduce(&mut self.state, event)
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            drawer_open: self.state.is_drawer_open(),
        }
    }
}
