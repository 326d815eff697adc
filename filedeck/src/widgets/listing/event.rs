use std::path::PathBuf;

use filedeck_client::DirectoryListing;
use iced::Point;

use super::model::ListingAction;

/// UI and completion events handled by the listing reducer.
#[derive(Debug, Clone)]
pub(crate) enum ListingEvent {
    /// Make `path` the current directory.
    Navigate { path: String },
    Reload,
    Loaded { generation: u64, listing: DirectoryListing },
    LoadFailed { generation: u64, message: String },
    RowPressed { path: String },
    RowDoubleClicked { path: String },
    RowRightClicked { path: String },
    RowHovered { path: Option<String> },
    /// Right click on the listing outside any row.
    SurfaceRightClicked,
    CursorMoved { position: Point },
    ContextMenuDismiss,
    Action(ListingAction),
    UnselectAll,
    ShowHiddenToggled,
    PromptChanged(String),
    PromptConfirmed,
    PromptCancelled,
    DeleteConfirmed { recursive: bool },
    DeleteCancelled,
    /// A delete, rename or create finished; `errors` lists failures.
    MutationFinished { errors: Vec<String> },
    DownloadFinished {
        name: String,
        result: Result<PathBuf, String>,
    },
    DismissNotice,
}

/// Effect events produced by the listing reducer.
#[derive(Debug, Clone)]
pub(crate) enum ListingEffect {
    LoadDirectory { path: String, generation: u64 },
    OpenFile { path: String },
    DownloadFile { path: String, name: String },
    DeleteEntries { paths: Vec<String>, recursive: bool },
    Rename { path: String, new_name: String },
    CreateDirectory { path: String },
    OpenUpload { dir: String },
    ShowHiddenChanged { show_hidden: bool },
}
