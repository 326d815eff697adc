/// UI events handled by the chrome widget.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    ToggleDrawer,
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEffect {
    DrawerToggled { open: bool },
}
