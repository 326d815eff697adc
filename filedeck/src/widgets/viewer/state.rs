use std::path::PathBuf;

use filedeck_client::{FileTypeInfo, PreviewKind};

use super::model::{Detection, PreviewContent};

/// Runtime state for the file viewer modal.
#[derive(Debug)]
pub(crate) struct ViewerState {
    path: Option<String>,
    detection: Detection,
    force_choice: PreviewKind,
    forced: Option<PreviewKind>,
    content: PreviewContent,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            path: None,
            detection: Detection::Detecting,
            force_choice: PreviewKind::Text,
            forced: None,
            content: PreviewContent::Idle,
        }
    }
}

impl ViewerState {
    // --- Read access ---

    pub(crate) fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Whether a response for `path` belongs to the open file.
    pub(crate) fn is_current(&self, path: &str) -> bool {
        self.path.as_deref() == Some(path)
    }

    pub(crate) fn detection(&self) -> &Detection {
        &self.detection
    }

    pub(crate) fn force_choice(&self) -> &PreviewKind {
        &self.force_choice
    }

    pub(crate) fn forced(&self) -> Option<&PreviewKind> {
        self.forced.as_ref()
    }

    pub(crate) fn content(&self) -> &PreviewContent {
        &self.content
    }

    // --- Write access ---

    /// Reset everything and start detecting `path`.
    ///
    /// Returns the preview file of the previous document, if any.
    pub(super) fn open(&mut self, path: String) -> Option<PathBuf> {
        let previous = std::mem::replace(
            self,
            Self {
                path: Some(path),
                ..Self::default()
            },
        );
        previous.content.into_preview_file()
    }

    /// Returns the preview file of the closed document, if any.
    pub(super) fn close(&mut self) -> Option<PathBuf> {
        std::mem::take(self).content.into_preview_file()
    }

    pub(super) fn set_detected(&mut self, info: &FileTypeInfo) {
        self.detection = Detection::Detected {
            kind: info.preview_kind(),
            viewable: info.viewable,
        };
    }

    pub(super) fn set_detection_failed(&mut self) {
        self.detection = Detection::Failed;
        self.content = PreviewContent::Error;
    }

    pub(super) fn set_force_choice(&mut self, kind: PreviewKind) {
        self.force_choice = kind;
    }

    /// Commit the current force choice and return it.
    pub(super) fn force(&mut self) -> PreviewKind {
        let kind = self.force_choice.clone();
        self.forced = Some(kind.clone());
        kind
    }

    pub(super) fn set_content(&mut self, content: PreviewContent) {
        self.content = content;
    }

    /// Swap in `content` and return the preview file it displaced.
    pub(super) fn replace_content(
        &mut self,
        content: PreviewContent,
    ) -> Option<PathBuf> {
        std::mem::replace(&mut self.content, content).into_preview_file()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn showing_pdf(file: &str) -> ViewerState {
        let mut state = ViewerState::default();
        let _previous = state.open(String::from("docs/a.pdf"));
        state.set_content(PreviewContent::Pdf {
            file: PathBuf::from(file),
            size: 8,
        });
        state
    }

    #[test]
    fn given_pdf_preview_when_switching_file_then_previous_file_is_returned() {
        let mut state = showing_pdf("/tmp/filedeck/1-a.pdf");

        let previous = state.open(String::from("docs/b.txt"));

        assert_eq!(previous, Some(PathBuf::from("/tmp/filedeck/1-a.pdf")));
        assert_eq!(state.path(), Some("docs/b.txt"));
    }

    #[test]
    fn given_pdf_preview_when_closed_then_file_is_returned_once() {
        let mut state = showing_pdf("/tmp/filedeck/1-a.pdf");

        assert_eq!(
            state.close(),
            Some(PathBuf::from("/tmp/filedeck/1-a.pdf"))
        );
        assert_eq!(state.close(), None);
    }

    #[test]
    fn given_text_preview_when_content_replaced_then_nothing_is_discarded() {
        let mut state = ViewerState::default();
        let _previous = state.open(String::from("a.txt"));

        let displaced = state.replace_content(PreviewContent::Loading);

        assert_eq!(displaced, None);
    }
}
