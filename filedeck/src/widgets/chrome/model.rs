/// Read-only chrome state for the header view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) drawer_open: bool,
}
