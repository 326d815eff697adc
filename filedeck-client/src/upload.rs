use std::io;
use std::path::{Path, PathBuf};

use futures::channel::mpsc::{self, UnboundedSender};
use futures::channel::oneshot;
use futures::future;
use futures::stream::{self, Stream, StreamExt};
use reqwest::Body;
use reqwest::multipart::{Form, Part};

use crate::client::{FileClient, UPLOAD_ROUTE};
use crate::error::{ClientError, Result};

/// Size of the body chunks handed to the transport.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Observable steps of a single file upload.
#[derive(Debug)]
pub enum UploadProgress {
    /// `loaded` of `total` bytes were handed to the transport.
    Progress { loaded: u64, total: u64 },
    /// Upload finished. Yielded once, after every progress report.
    Finished(Result<()>),
}

impl UploadProgress {
    /// Completed share in percent, when the total is known.
    pub fn percent(loaded: u64, total: u64) -> Option<u8> {
        if total == 0 {
            return None;
        }
        let percent = loaded.min(total) * 100 / total;
        Some(percent as u8)
    }
}

impl FileClient {
    /// Upload `source` into the directory `dir` as a multipart `file` field.
    ///
    /// The returned stream yields progress as chunks are consumed. The
    /// outcome is held back until the transfer and every progress sender are
    /// done, so [`UploadProgress::Finished`] is always the last item.
    pub fn upload(
        &self,
        dir: &str,
        source: PathBuf,
    ) -> impl Stream<Item = UploadProgress> + Send + 'static {
        let client = self.clone();
        let dir = dir.to_string();
        let (sender, receiver) = mpsc::unbounded();
        let (outcome_tx, outcome_rx) = oneshot::channel();

        let transfer = async move {
            let result = client.send_upload(&dir, &source, sender).await;
            if let Err(err) = &result {
                log::warn!("upload of {} failed: {err}", source.display());
            }
            let _ = outcome_tx.send(result);
        };

        let progress = stream::select(
            receiver.map(Some),
            stream::once(transfer).map(|()| None),
        )
        .filter_map(future::ready);
        let finished = stream::once(async move {
            let result = outcome_rx.await.unwrap_or_else(|_| {
                Err(ClientError::Io(io::Error::other("upload task dropped")))
            });
            UploadProgress::Finished(result)
        });

        progress.chain(finished)
    }

    async fn send_upload(
        &self,
        dir: &str,
        source: &Path,
        progress: UnboundedSender<UploadProgress>,
    ) -> Result<()> {
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ClientError::InvalidName(source.display().to_string())
            })?;
        let bytes = tokio::fs::read(source).await?;
        let total = bytes.len() as u64;
        log::debug!("upload {name:?} ({total} bytes) into {dir:?}");

        let chunks: Vec<Vec<u8>> = bytes
            .chunks(UPLOAD_CHUNK_SIZE)
            .map(<[u8]>::to_vec)
            .collect();
        let mut loaded = 0u64;
        let body = stream::iter(chunks).map(move |chunk| {
            loaded += chunk.len() as u64;
            let _ = progress
                .unbounded_send(UploadProgress::Progress { loaded, total });
            Ok::<_, io::Error>(chunk)
        });

        let part = Part::stream_with_length(Body::wrap_stream(body), total)
            .file_name(name);
        let form = Form::new().part("file", part);
        let url = self.endpoint(UPLOAD_ROUTE, dir)?;
        self.send(self.http.post(url).multipart(form)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    #[test]
    fn given_known_total_when_percent_computed_then_value_is_floored() {
        assert_eq!(UploadProgress::percent(0, 200), Some(0));
        assert_eq!(UploadProgress::percent(199, 200), Some(99));
        assert_eq!(UploadProgress::percent(200, 200), Some(100));
        assert_eq!(UploadProgress::percent(300, 200), Some(100));
    }

    #[test]
    fn given_unknown_total_when_percent_computed_then_nothing_is_reported() {
        assert_eq!(UploadProgress::percent(10, 0), None);
    }

    #[tokio::test]
    async fn given_missing_source_when_uploading_then_io_error_is_last() {
        let client =
            FileClient::with_http(reqwest::Client::new(), "http://127.0.0.1:9");
        let items: Vec<UploadProgress> = client
            .upload("", PathBuf::from("/definitely/not/here.bin"))
            .collect()
            .await;

        assert_eq!(items.len(), 1);
        assert!(matches!(
            items.last(),
            Some(UploadProgress::Finished(Err(ClientError::Io(_))))
        ));
    }
}
