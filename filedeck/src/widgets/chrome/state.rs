/// Chrome state.
pub(crate) struct ChromeState {
    drawer_open: bool,
}

impl ChromeState {
    pub(crate) fn new(drawer_open: bool) -> Self {
        Self { drawer_open }
    }

    /// Return whether the explorer drawer is shown.
    pub(crate) fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Flip the drawer and return the new value.
    pub(crate) fn toggle_drawer(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        self.drawer_open
    }
}
