use std::path::PathBuf;

use uuid::Uuid;

use super::model::CollisionChoice;

/// UI and completion events handled by the upload reducer.
#[derive(Debug, Clone)]
pub(crate) enum UploadEvent {
    Open { dir: String },
    Close,
    FileDropped { path: PathBuf },
    PathInputChanged(String),
    PathInputSubmitted,
    Unstage { source: PathBuf },
    Submit,
    ExistsChecked {
        dir: String,
        result: Result<Vec<String>, String>,
    },
    CollisionResolved(CollisionChoice),
    Progress { id: Uuid, loaded: u64, total: u64 },
    Finished { id: Uuid, result: Result<(), String> },
    Dismiss { id: Uuid },
    ReloadTimerElapsed { generation: u64 },
}

/// Effect events produced by the upload reducer.
#[derive(Debug, Clone)]
pub(crate) enum UploadEffect {
    CheckExists { dir: String, names: Vec<String> },
    StartUpload { id: Uuid, dir: String, source: PathBuf },
    ScheduleReload { generation: u64 },
    ReloadListing,
    /// The modal closed; these transfers must be aborted.
    Closed { in_flight: Vec<Uuid> },
}
