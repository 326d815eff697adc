use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::model::{CollisionPrompt, StagedFile, UploadTask, UploadTaskState};

/// Runtime state for the upload modal.
#[derive(Debug, Default)]
pub(crate) struct UploadState {
    dir: Option<String>,
    staged: Vec<StagedFile>,
    path_input: String,
    input_error: Option<String>,
    checking: bool,
    collision: Option<CollisionPrompt>,
    tasks: Vec<UploadTask>,
    reload_generation: u64,
}

impl UploadState {
    // --- Read access ---

    /// Target directory while the modal is open.
    pub(crate) fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    pub(crate) fn staged(&self) -> &[StagedFile] {
        &self.staged
    }

    pub(crate) fn path_input(&self) -> &str {
        &self.path_input
    }

    pub(crate) fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    pub(crate) fn is_checking(&self) -> bool {
        self.checking
    }

    pub(crate) fn collision(&self) -> Option<&CollisionPrompt> {
        self.collision.as_ref()
    }

    pub(crate) fn tasks(&self) -> &[UploadTask] {
        &self.tasks
    }

    pub(crate) fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    /// Whether a debounce timer for `generation` is the latest one.
    pub(crate) fn is_latest_reload(&self, generation: u64) -> bool {
        generation == self.reload_generation
    }

    // --- Write access ---

    /// Open the modal for `dir`, keeping the reload generation.
    pub(super) fn open(&mut self, dir: String) {
        self.clear();
        self.dir = Some(dir);
    }

    /// Close the modal and return the ids of tasks still in flight.
    pub(super) fn close(&mut self) -> Vec<Uuid> {
        let in_flight = self
            .tasks
            .iter()
            .filter(|task| !task.is_finished())
            .map(|task| task.id)
            .collect();
        self.clear();
        self.dir = None;
        in_flight
    }

    fn clear(&mut self) {
        self.staged.clear();
        self.path_input.clear();
        self.input_error = None;
        self.checking = false;
        self.collision = None;
        self.tasks.clear();
    }

    /// Stage `source`, ignoring duplicates.
    pub(super) fn stage(&mut self, source: PathBuf) -> bool {
        if self.staged.iter().any(|file| file.source == source) {
            return false;
        }
        match StagedFile::from_path(source) {
            Some(file) => {
                self.staged.push(file);
                true
            },
            None => false,
        }
    }

    pub(super) fn unstage(&mut self, source: &Path) {
        self.staged.retain(|file| file.source != source);
    }

    pub(super) fn set_path_input(&mut self, value: String) {
        self.path_input = value;
        self.input_error = None;
    }

    pub(super) fn take_path_input(&mut self) -> String {
        std::mem::take(&mut self.path_input)
    }

    pub(super) fn set_input_error(&mut self, error: Option<String>) {
        self.input_error = error;
    }

    pub(super) fn set_checking(&mut self, checking: bool) {
        self.checking = checking;
    }

    pub(super) fn set_collision(&mut self, collision: Option<CollisionPrompt>) {
        self.collision = collision;
    }

    /// Drain the staging list, keeping only files `keep` accepts.
    pub(super) fn take_staged(
        &mut self,
        keep: impl Fn(&StagedFile) -> bool,
    ) -> Vec<StagedFile> {
        std::mem::take(&mut self.staged)
            .into_iter()
            .filter(|file| keep(file))
            .collect()
    }

    /// Queue a task per file and return `(id, source)` pairs to transport.
    pub(super) fn queue(
        &mut self,
        files: Vec<StagedFile>,
    ) -> Vec<(Uuid, PathBuf)> {
        files
            .into_iter()
            .map(|file| {
                let task = UploadTask::new(file);
                let pair = (task.id, task.source.clone());
                self.tasks.push(task);
                pair
            })
            .collect()
    }

    pub(super) fn set_progress(&mut self, id: Uuid, percent: u8) {
        match self.task_mut(id) {
            Some(task) if !task.is_finished() => {
                task.state = UploadTaskState::Progress(percent);
            },
            _ => {},
        }
    }

    /// Record a finished transfer; a success returns the new reload
    /// generation.
    pub(super) fn finish(
        &mut self,
        id: Uuid,
        result: Result<(), String>,
    ) -> Option<u64> {
        let task = self.task_mut(id)?;
        match result {
            Ok(()) => {
                task.state = UploadTaskState::Success;
                self.reload_generation += 1;
                Some(self.reload_generation)
            },
            Err(message) => {
                task.state = UploadTaskState::Error(message);
                None
            },
        }
    }

    pub(super) fn dismiss(&mut self, id: Uuid) {
        self.tasks.retain(|task| task.id != id || !task.is_finished());
    }

    fn task_mut(&mut self, id: Uuid) -> Option<&mut UploadTask> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
