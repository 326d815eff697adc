use std::path::PathBuf;

use filedeck_client::PreviewKind;
use filedeck_client::paths::base_name;
use iced::Task;
use iced::widget::image;

use super::event::{ViewerEffect, ViewerEvent};
use super::model::{Detection, PreviewContent, ViewerKind, zip_tree};
use super::state::ViewerState;

/// Reduce a viewer event into state updates and effects.
pub(crate) fn reduce(
    state: &mut ViewerState,
    event: ViewerEvent,
) -> Task<ViewerEffect> {
    match event {
        ViewerEvent::Open { path } => {
            let previous = state.open(path.clone());
            Task::batch([
                discard(previous),
                Task::done(ViewerEffect::DetectType { path }),
            ])
        },
        ViewerEvent::Close => {
            let previous = state.close();
            Task::batch([Task::done(ViewerEffect::Closed), discard(previous)])
        },
        ViewerEvent::TypeDetected { path, info } => {
            if !state.is_current(&path) {
                return Task::none();
            }
            state.set_detected(&info);
            if info.viewable {
                dispatch(state, path, &info.preview_kind())
            } else {
                Task::none()
            }
        },
        ViewerEvent::DetectFailed { path, message } => {
            if state.is_current(&path) {
                log::warn!("type detection for {path:?} failed: {message}");
                state.set_detection_failed();
            }
            Task::none()
        },
        ViewerEvent::ForceChoiceSelected(kind) => {
            state.set_force_choice(kind);
            Task::none()
        },
        ViewerEvent::ForcePreview => {
            if !matches!(state.detection(), Detection::Detected { .. }) {
                return Task::none();
            }
            let Some(path) = state.path().map(str::to_string) else {
                return Task::none();
            };
            let kind = state.force();
            dispatch(state, path, &kind)
        },
        ViewerEvent::TextLoaded { path, preview } => {
            if state.is_current(&path) {
                state.set_content(PreviewContent::Text(preview));
            }
            Task::none()
        },
        ViewerEvent::ImageLoaded { path, bytes } => {
            if state.is_current(&path) {
                state.set_content(PreviewContent::Image(
                    image::Handle::from_bytes(bytes),
                ));
            }
            Task::none()
        },
        ViewerEvent::ZipLoaded { path, listing } => {
            if state.is_current(&path) {
                state.set_content(PreviewContent::Zip(zip_tree(
                    &listing.nodes,
                    "",
                )));
            }
            Task::none()
        },
        ViewerEvent::PdfReady { path, file, size } => {
            if !state.is_current(&path) {
                return discard(Some(file));
            }
            let previous =
                state.replace_content(PreviewContent::Pdf { file, size });
            discard(previous)
        },
        ViewerEvent::ContentFailed { path, message } => {
            if state.is_current(&path) {
                log::warn!("preview of {path:?} failed: {message}");
                state.set_content(PreviewContent::Error);
            }
            Task::none()
        },
        ViewerEvent::OpenExternally => match state.content() {
            PreviewContent::Pdf { file, .. } => {
                Task::done(ViewerEffect::OpenExternally { file: file.clone() })
            },
            _ => Task::none(),
        },
        ViewerEvent::Download => match state.path() {
            Some(path) => Task::done(ViewerEffect::DownloadFile {
                path: path.to_string(),
                name: base_name(path).to_string(),
            }),
            None => Task::none(),
        },
    }
}

fn dispatch(
    state: &mut ViewerState,
    path: String,
    kind: &PreviewKind,
) -> Task<ViewerEffect> {
    let effect = match ViewerKind::from(kind) {
        ViewerKind::Text => ViewerEffect::LoadText { path },
        ViewerKind::Image => ViewerEffect::LoadImage { path },
        ViewerKind::Zip => ViewerEffect::LoadZip { path },
        ViewerKind::Pdf => ViewerEffect::LoadPdf { path },
        ViewerKind::DataError => {
            return discard(state.replace_content(PreviewContent::Error));
        },
    };
    let previous = state.replace_content(PreviewContent::Loading);
    Task::batch([discard(previous), Task::done(effect)])
}

fn discard(file: Option<PathBuf>) -> Task<ViewerEffect> {
    match file {
        Some(file) => Task::done(ViewerEffect::DiscardPreviewFile { file }),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use filedeck_client::{FileTypeInfo, TextPreview, ZipListing};

    use super::*;

    fn open(state: &mut ViewerState, path: &str) {
        let _task = reduce(
            state,
            ViewerEvent::Open {
                path: path.to_string(),
            },
        );
    }

    fn detected(
        state: &mut ViewerState,
        path: &str,
        kind: &str,
        viewable: bool,
    ) {
        let _task = reduce(
            state,
            ViewerEvent::TypeDetected {
                path: path.to_string(),
                info: FileTypeInfo {
                    kind: kind.to_string(),
                    viewable,
                },
            },
        );
    }

    #[test]
    fn given_viewable_text_when_detected_then_text_viewer_loads() {
        let mut state = ViewerState::default();
        open(&mut state, "notes.txt");
        assert_eq!(state.detection(), &Detection::Detecting);

        detected(&mut state, "notes.txt", "TEXT", true);
        assert!(matches!(state.content(), PreviewContent::Loading));

        let _task = reduce(
            &mut state,
            ViewerEvent::TextLoaded {
                path: String::from("notes.txt"),
                preview: TextPreview {
                    content: String::from("hello"),
                    truncate: false,
                    size: 5,
                },
            },
        );
        assert!(matches!(
            state.content(),
            PreviewContent::Text(preview) if preview.content == "hello"
        ));
    }

    #[test]
    fn given_unviewable_file_when_forced_as_zip_then_zip_viewer_loads() {
        let mut state = ViewerState::default();
        open(&mut state, "blob.bin");
        detected(&mut state, "blob.bin", "unknown", false);
        assert!(matches!(state.content(), PreviewContent::Idle));

        let _task = reduce(
            &mut state,
            ViewerEvent::ForceChoiceSelected(PreviewKind::Zip),
        );
        let _task = reduce(&mut state, ViewerEvent::ForcePreview);
        assert_eq!(state.forced(), Some(&PreviewKind::Zip));
        assert!(matches!(state.content(), PreviewContent::Loading));

        let _task = reduce(
            &mut state,
            ViewerEvent::ZipLoaded {
                path: String::from("blob.bin"),
                listing: ZipListing::default(),
            },
        );
        assert!(matches!(
            state.content(),
            PreviewContent::Zip(nodes) if nodes.is_empty()
        ));
    }

    #[test]
    fn given_reopened_viewer_when_stale_response_arrives_then_it_is_dropped() {
        let mut state = ViewerState::default();
        open(&mut state, "a.txt");
        detected(&mut state, "a.txt", "text", true);
        open(&mut state, "b.txt");

        let _task = reduce(
            &mut state,
            ViewerEvent::TextLoaded {
                path: String::from("a.txt"),
                preview: TextPreview::default(),
            },
        );

        assert_eq!(state.path(), Some("b.txt"));
        assert!(matches!(state.content(), PreviewContent::Idle));
        assert_eq!(state.detection(), &Detection::Detecting);
    }

    #[test]
    fn given_detection_failure_when_reduced_then_error_is_shown() {
        let mut state = ViewerState::default();
        open(&mut state, "a.txt");

        let _task = reduce(
            &mut state,
            ViewerEvent::DetectFailed {
                path: String::from("a.txt"),
                message: String::from("HTTP 500"),
            },
        );

        assert_eq!(state.detection(), &Detection::Failed);
        assert!(matches!(state.content(), PreviewContent::Error));
    }

    #[test]
    fn given_error_tag_when_detected_then_no_request_and_error_shown() {
        let mut state = ViewerState::default();
        open(&mut state, "broken");

        detected(&mut state, "broken", "error", true);

        assert!(matches!(state.content(), PreviewContent::Error));
    }

    #[test]
    fn given_open_viewer_when_closed_then_state_resets() {
        let mut state = ViewerState::default();
        open(&mut state, "a.txt");

        let _task = reduce(&mut state, ViewerEvent::Close);

        assert_eq!(state.path(), None);
        assert_eq!(state.force_choice(), &PreviewKind::Text);
    }
}
