use filedeck_client::DirectoryListing;

use super::model::{ScrollOffset, ScrollViewport};

/// UI and completion events handled by the explorer reducer.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerEvent {
    /// A tree row was clicked.
    NodePressed { id: String },
    /// The chevron of a directory row was clicked.
    ToggleFolder { id: String },
    /// The cursor entered or left a tree row.
    NodeHovered { id: Option<String> },
    /// The tree scrollable reported a new viewport.
    ViewportChanged { viewport: ScrollViewport },
    /// Visibility rules changed; rebuild the filtered tree.
    FilterChanged,
    /// (Re)load the top-level listing.
    LoadRoot,
    RootLoaded { listing: DirectoryListing },
    RootLoadFailed { message: String },
    FolderLoaded { id: String, listing: DirectoryListing },
    FolderLoadFailed { id: String, message: String },
}

/// Effect events produced by the explorer reducer.
#[derive(Debug, Clone)]
pub(crate) enum ExplorerEffect {
    /// Fetch the top-level listing.
    LoadRootRequested,
    /// Fetch children of the directory with `id`.
    LoadFolderRequested { id: String },
    /// Make `path` the current listing directory.
    NavigateRequested { path: String },
    /// Scroll the tree to an absolute offset.
    ScrollRequested { offset: ScrollOffset },
}
