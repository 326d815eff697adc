use std::io;

use thiserror::Error;

/// Errors raised while staging viewer payloads on disk.
#[derive(Debug, Error)]
pub(crate) enum ViewerError {
    #[error("failed to write preview file: {0}")]
    Io(#[from] io::Error),
}
