use iced::Task;

use super::event::{ChromeEffect, ChromeEvent};
use super::state::ChromeState;

/// Reduce a chrome event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut ChromeState,
    event: ChromeEvent,
) -> Task<ChromeEffect> {
    match event {
        ChromeEvent::ToggleDrawer => {
            let open = state.toggle_drawer();
            Task::done(ChromeEffect::DrawerToggled { open })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_open_drawer_when_toggled_twice_then_it_is_open_again() {
        let mut state = ChromeState::new(true);

        let _task = reduce(&mut state, ChromeEvent::ToggleDrawer);
        assert!(!state.is_drawer_open());

        let _task = reduce(&mut state, ChromeEvent::ToggleDrawer);
        assert!(state.is_drawer_open());
    }
}
