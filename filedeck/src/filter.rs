/// Visibility rules shared by the explorer tree and the directory listing.
///
/// Filtering only selects what is rendered; stored entries are never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ViewFilter {
    pub(crate) only_directory: bool,
    pub(crate) show_hidden: bool,
}

impl ViewFilter {
    /// Filter used by the explorer tree panel.
    pub(crate) fn directories(show_hidden: bool) -> Self {
        Self {
            only_directory: true,
            show_hidden,
        }
    }

    /// Filter used by the directory listing.
    pub(crate) fn entries(show_hidden: bool) -> Self {
        Self {
            only_directory: false,
            show_hidden,
        }
    }

    /// Return whether an entry with the given flags stays visible.
    pub(crate) fn admits(&self, is_directory: bool, is_hidden: bool) -> bool {
        if self.only_directory && !is_directory {
            return false;
        }
        self.show_hidden || !is_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::ViewFilter;

    #[test]
    fn given_directory_filter_when_checking_file_then_it_is_rejected() {
        let filter = ViewFilter::directories(true);

        assert!(!filter.admits(false, false));
        assert!(filter.admits(true, true));
    }

    #[test]
    fn given_hidden_entries_when_not_shown_then_they_are_rejected() {
        let filter = ViewFilter::entries(false);

        assert!(!filter.admits(false, true));
        assert!(!filter.admits(true, true));
        assert!(filter.admits(false, false));
    }
}
