use filedeck_client::paths::{join_path, parent_path, segments};
use filedeck_client::{
    DirectoryListing, bytes_to_human_readable, is_filename_valid,
};
use iced::Point;

/// Label of the synthetic row that leads to the parent directory.
pub(crate) const PARENT_LINK_LABEL: &str = "..";
/// Initial value of the create-directory prompt.
pub(crate) const NEW_DIRECTORY_NAME: &str = "New Directory";

/// Display row of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DirectoryEntry {
    pub(crate) name: String,
    pub(crate) is_directory: bool,
    pub(crate) is_hidden: bool,
    pub(crate) size: u64,
    pub(crate) path: String,
    pub(crate) is_parent_link: bool,
    pub(crate) is_selected: bool,
}

impl DirectoryEntry {
    fn parent_link(parent: &str) -> Self {
        Self {
            name: String::from(PARENT_LINK_LABEL),
            is_directory: true,
            is_hidden: false,
            size: 0,
            path: parent.to_string(),
            is_parent_link: true,
            is_selected: false,
        }
    }

    /// Formatted size for files, blank for directories.
    pub(crate) fn size_label(&self) -> String {
        if self.is_directory {
            String::new()
        } else {
            bytes_to_human_readable(self.size)
        }
    }
}

/// Build display rows for the listing of `path`.
///
/// A parent row is prepended for every directory except the root.
pub(crate) fn entries_from_listing(
    path: &str,
    listing: &DirectoryListing,
) -> Vec<DirectoryEntry> {
    let parent = parent_path(path);
    let mut entries = Vec::with_capacity(listing.files.len() + 1);
    if let Some(parent) = parent {
        entries.push(DirectoryEntry::parent_link(parent));
    }

    entries.extend(listing.files.iter().map(|raw| DirectoryEntry {
        name: raw.name.clone(),
        is_directory: raw.is_directory,
        is_hidden: raw.is_hidden,
        size: raw.size,
        path: join_path(path, &raw.name),
        is_parent_link: false,
        is_selected: false,
    }));

    entries
}

/// Bulk action available from the toolbar and the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListingAction {
    Open,
    Download,
    Rename,
    Delete,
    CreateDirectory,
    Upload,
}

impl ListingAction {
    pub(crate) fn label(self, selected: usize) -> &'static str {
        match self {
            Self::Open if selected > 1 => "Open First File/Directory",
            Self::Open => "Open",
            Self::Download => "Download",
            Self::Rename => "Rename",
            Self::Delete => "Delete",
            Self::CreateDirectory => "New Directory",
            Self::Upload => "Upload",
        }
    }
}

/// Actions offered for the given number of selected entries.
pub(crate) fn available_actions(selected: usize) -> Vec<ListingAction> {
    let mut actions = Vec::new();
    if selected > 0 {
        actions.push(ListingAction::Open);
        actions.push(ListingAction::Download);
    }
    if selected == 1 {
        actions.push(ListingAction::Rename);
    }
    if selected > 0 {
        actions.push(ListingAction::Delete);
    }
    actions.push(ListingAction::CreateDirectory);
    actions.push(ListingAction::Upload);
    actions
}

/// Whether the toolbar shows the selection count and Unselect All.
pub(crate) fn shows_selection_summary(selected: usize) -> bool {
    selected >= 2
}

/// What the name prompt will do on confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NamePromptKind {
    Rename { path: String },
    CreateDirectory { parent: String },
}

/// Modal asking for a file or directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamePrompt {
    pub(crate) kind: NamePromptKind,
    pub(crate) value: String,
}

impl NamePrompt {
    pub(crate) fn rename(path: String, current: &str) -> Self {
        Self {
            kind: NamePromptKind::Rename { path },
            value: current.to_string(),
        }
    }

    pub(crate) fn create_directory(parent: String) -> Self {
        Self {
            kind: NamePromptKind::CreateDirectory { parent },
            value: String::from(NEW_DIRECTORY_NAME),
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.kind {
            NamePromptKind::Rename { .. } => "Rename",
            NamePromptKind::CreateDirectory { .. } => "Create Directory",
        }
    }

    pub(crate) fn confirm_label(&self) -> &'static str {
        match self.kind {
            NamePromptKind::Rename { .. } => "Rename",
            NamePromptKind::CreateDirectory { .. } => "Create",
        }
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        match self.kind {
            NamePromptKind::Rename { .. } => "",
            NamePromptKind::CreateDirectory { .. } => "<new>",
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        is_filename_valid(Some(&self.value))
    }
}

/// Pending delete awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeleteConfirm {
    pub(crate) paths: Vec<String>,
    pub(crate) names: Vec<String>,
}

/// Open context menu anchored at a cursor position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ContextMenuState {
    pub(crate) cursor: Point,
}

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Crumb {
    pub(crate) label: String,
    pub(crate) path: String,
    pub(crate) is_last: bool,
}

/// Breadcrumb trail for `path`, starting with the `/` root crumb.
pub(crate) fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments = segments(path);
    let mut crumbs = Vec::with_capacity(segments.len() + 1);
    crumbs.push(Crumb {
        label: String::from("/"),
        path: String::new(),
        is_last: segments.is_empty(),
    });

    let last = segments.len();
    for (index, (name, prefix)) in segments.into_iter().enumerate() {
        crumbs.push(Crumb {
            label: name.to_string(),
            path: prefix.to_string(),
            is_last: index + 1 == last,
        });
    }

    crumbs
}

/// Read-only view model for the listing panel.
#[derive(Debug, Clone)]
pub(crate) struct ListingViewModel<'a> {
    pub(crate) path: &'a str,
    pub(crate) entries: Vec<&'a DirectoryEntry>,
    pub(crate) loading: bool,
    pub(crate) error: bool,
    pub(crate) selected_count: usize,
    pub(crate) show_hidden: bool,
    pub(crate) notice: Option<&'a str>,
    pub(crate) hovered: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use filedeck_client::RawEntry;

    use super::*;

    fn listing(names: &[(&str, bool)]) -> DirectoryListing {
        DirectoryListing {
            path: String::new(),
            files: names
                .iter()
                .map(|(name, is_directory)| RawEntry {
                    name: name.to_string(),
                    is_directory: *is_directory,
                    is_hidden: false,
                    size: 2048,
                })
                .collect(),
        }
    }

    #[test]
    fn given_root_listing_when_mapped_then_no_parent_row() {
        let entries = entries_from_listing("", &listing(&[("docs", true)]));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "docs");
        assert!(!entries[0].is_parent_link);
    }

    #[test]
    fn given_nested_listing_when_mapped_then_parent_row_leads_up() {
        let entries =
            entries_from_listing("docs/img", &listing(&[("a.png", false)]));

        assert_eq!(entries[0].name, "..");
        assert_eq!(entries[0].path, "docs");
        assert!(entries[0].is_parent_link && entries[0].is_directory);
        assert_eq!(entries[1].path, "docs/img/a.png");
        assert_eq!(entries[1].size_label(), "2.00 KB");
    }

    #[test]
    fn given_single_segment_path_when_mapped_then_parent_is_root() {
        let entries = entries_from_listing("docs", &listing(&[]));

        assert_eq!(entries[0].path, "");
    }

    #[test]
    fn given_selection_counts_when_listing_actions_then_menu_is_filtered() {
        assert_eq!(available_actions(0), vec![
            ListingAction::CreateDirectory,
            ListingAction::Upload,
        ]);
        assert!(available_actions(1).contains(&ListingAction::Rename));
        assert!(!available_actions(2).contains(&ListingAction::Rename));
        assert!(available_actions(2).contains(&ListingAction::Delete));
        assert_eq!(
            ListingAction::Open.label(2),
            "Open First File/Directory"
        );
    }

    #[test]
    fn given_single_selection_when_checking_summary_then_it_is_hidden() {
        assert!(!shows_selection_summary(0));
        assert!(!shows_selection_summary(1));
        assert!(shows_selection_summary(2));
    }

    #[test]
    fn given_nested_path_when_building_breadcrumbs_then_prefixes_navigate() {
        let crumbs = breadcrumbs("docs/img");

        let paths: Vec<&str> =
            crumbs.iter().map(|crumb| crumb.path.as_str()).collect();
        assert_eq!(paths, vec!["", "docs", "docs/img"]);
        assert_eq!(crumbs[0].label, "/");
        assert!(crumbs[2].is_last);
        assert!(!crumbs[1].is_last);
    }

    #[test]
    fn given_root_path_when_building_breadcrumbs_then_single_inert_crumb() {
        let crumbs = breadcrumbs("");

        assert_eq!(crumbs.len(), 1);
        assert!(crumbs[0].is_last);
    }

    #[test]
    fn given_prompt_value_when_validated_then_rules_apply() {
        let mut prompt = NamePrompt::create_directory(String::new());
        assert!(prompt.is_valid());
        assert_eq!(prompt.placeholder(), "<new>");

        prompt.value = String::from("bad/name");
        assert!(!prompt.is_valid());
    }
}
