use std::path::PathBuf;

use filedeck_client::{FileTypeInfo, PreviewKind, TextPreview, ZipListing};

/// UI and completion events handled by the viewer reducer.
///
/// Completion events carry the path they were requested for.
#[derive(Debug, Clone)]
pub(crate) enum ViewerEvent {
    Open { path: String },
    Close,
    TypeDetected { path: String, info: FileTypeInfo },
    DetectFailed { path: String, message: String },
    ForceChoiceSelected(PreviewKind),
    ForcePreview,
    TextLoaded { path: String, preview: TextPreview },
    ImageLoaded { path: String, bytes: Vec<u8> },
    ZipLoaded { path: String, listing: ZipListing },
    PdfReady { path: String, file: PathBuf, size: u64 },
    ContentFailed { path: String, message: String },
    OpenExternally,
    Download,
}

/// Effect events produced by the viewer reducer.
#[derive(Debug, Clone)]
pub(crate) enum ViewerEffect {
    DetectType { path: String },
    LoadText { path: String },
    LoadImage { path: String },
    LoadZip { path: String },
    LoadPdf { path: String },
    OpenExternally { file: PathBuf },
    DownloadFile { path: String, name: String },
    /// A PDF preview file is no longer shown.
    DiscardPreviewFile { file: PathBuf },
    /// The modal closed; in-flight requests may be dropped.
    Closed,
}
