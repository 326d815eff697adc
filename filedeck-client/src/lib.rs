//! Client side of the FileDeck file-serving API.
//!
//! The crate bundles the pieces every front-end needs regardless of its UI:
//! - [`UrlBuilder`] / [`build_url`] for joining the backend origin with
//!   request paths;
//! - [`bytes_to_human_readable`] and [`is_filename_valid`] helpers;
//! - wire models mirroring the backend JSON shapes ([`model`]);
//! - [`FileClient`], an async `reqwest` client with one method per endpoint,
//!   including a streaming [`FileClient::upload`] that reports progress.
//!
//! Paths are `/`-joined and relative to the served root; the root itself is
//! the empty string. See [`paths`] for helpers.

mod client;
mod endpoint;
mod error;
pub mod model;
pub mod paths;
mod size;
mod upload;
mod validate;

pub use client::FileClient;
pub use endpoint::{DEFAULT_BASE_URL, UrlBuilder, build_url};
pub use error::{ClientError, Result};
pub use model::{
    DirectoryListing, FileTypeInfo, PreviewKind, RawEntry, TextPreview,
    ZipListing, ZipNode,
};
pub use size::bytes_to_human_readable;
pub use upload::{UPLOAD_CHUNK_SIZE, UploadProgress};
pub use validate::{FILENAME_RULES, is_filename_valid};
