use std::path::{Path, PathBuf};
use std::time::Duration;

use uuid::Uuid;

/// Quiet period after the last successful upload before the listing reloads.
pub(crate) const UPLOAD_RELOAD_DEBOUNCE: Duration = Duration::from_millis(1000);

/// A local file waiting for the user to press Upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StagedFile {
    pub(crate) name: String,
    pub(crate) source: PathBuf,
}

impl StagedFile {
    /// Stage `source` under its file name; paths without one are rejected.
    pub(crate) fn from_path(source: PathBuf) -> Option<Self> {
        let name = source.file_name()?.to_str()?.to_string();
        Some(Self { name, source })
    }
}

/// Transport state of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UploadTaskState {
    Queued,
    Progress(u8),
    Success,
    Error(String),
}

/// One file being transported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UploadTask {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) source: PathBuf,
    pub(crate) state: UploadTaskState,
}

impl UploadTask {
    pub(crate) fn new(file: StagedFile) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: file.name,
            source: file.source,
            state: UploadTaskState::Queued,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        matches!(
            self.state,
            UploadTaskState::Success | UploadTaskState::Error(_)
        )
    }

    pub(crate) fn status_label(&self) -> String {
        match &self.state {
            UploadTaskState::Queued => String::from("Queued"),
            UploadTaskState::Progress(percent) => format!("{percent}%"),
            UploadTaskState::Success => String::from("Done"),
            UploadTaskState::Error(message) => format!("Error: {message}"),
        }
    }
}

/// How to proceed when staged names already exist remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CollisionChoice {
    Cancel,
    UploadMissing,
    Override,
}

/// Names that already exist in the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollisionPrompt {
    pub(crate) colliding: Vec<String>,
}

/// Aggregate marker of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SummaryMarker {
    InProgress,
    Error,
    Success,
}

/// Summary line shown above the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UploadSummary {
    pub(crate) uploaded: usize,
    pub(crate) total: usize,
    pub(crate) marker: SummaryMarker,
}

impl UploadSummary {
    pub(crate) fn label(&self) -> String {
        format!("{} of {} files uploaded", self.uploaded, self.total)
    }
}

/// Summarise `tasks`; `None` while nothing was queued.
pub(crate) fn summarize(tasks: &[UploadTask]) -> Option<UploadSummary> {
    if tasks.is_empty() {
        return None;
    }

    let uploaded = tasks
        .iter()
        .filter(|task| task.state == UploadTaskState::Success)
        .count();
    let marker = if tasks.iter().any(|task| !task.is_finished()) {
        SummaryMarker::InProgress
    } else if uploaded == tasks.len() {
        SummaryMarker::Success
    } else {
        SummaryMarker::Error
    };

    Some(UploadSummary {
        uploaded,
        total: tasks.len(),
        marker,
    })
}

/// Read-only view model for the upload modal.
#[derive(Debug, Clone)]
pub(crate) struct UploadViewModel<'a> {
    pub(crate) dir: &'a str,
    pub(crate) staged: &'a [StagedFile],
    pub(crate) path_input: &'a str,
    pub(crate) input_error: Option<&'a str>,
    pub(crate) checking: bool,
    pub(crate) tasks: &'a [UploadTask],
    pub(crate) summary: Option<UploadSummary>,
}

/// Display form of a staged source path.
pub(crate) fn source_label(source: &Path) -> String {
    source.display().to_string()
}
