use filedeck_client::FileClient;
use futures::future::join_all;
use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers::settings;
use crate::services::{download_dir, save_download};
use crate::widgets::explorer::ExplorerEvent;
use crate::widgets::listing::{ListingCtx, ListingEffect, ListingEvent};
use crate::widgets::upload::UploadEvent;
use crate::widgets::viewer::ViewerEvent;

/// Route a listing UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ListingEvent,
) -> Task<AppEvent> {
    let ctx = ListingCtx {
        additive: app.state.additive_selection(),
    };
    app.widgets
        .listing
        .reduce(event, &ctx)
        .map(AppEvent::ListingEffect)
}

/// Route a listing effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ListingEffect,
) -> Task<AppEvent> {
    use ListingEffect::*;

    match effect {
        LoadDirectory { path, generation } => {
            load_directory(app, path, generation)
        },
        OpenFile { path } => {
            Task::done(AppEvent::ViewerUi(ViewerEvent::Open { path }))
        },
        DownloadFile { path, name } => download_file(app, path, name),
        DeleteEntries { paths, recursive } => {
            let client = app.client.clone();
            log::debug!(
                "deleting {} entries (recursive: {recursive})",
                paths.len()
            );
            Task::perform(
                async move { delete_entries(&client, &paths, recursive).await },
                |errors| {
                    AppEvent::ListingUi(ListingEvent::MutationFinished {
                        errors,
                    })
                },
            )
        },
        Rename { path, new_name } => {
            let client = app.client.clone();
            Task::perform(
                async move {
                    client
                        .rename(&path, &new_name)
                        .await
                        .map_err(|err| format!("rename {path}: {err}"))
                },
                mutation_finished,
            )
        },
        CreateDirectory { path } => {
            let client = app.client.clone();
            Task::perform(
                async move {
                    client
                        .create_directory(&path)
                        .await
                        .map_err(|err| format!("create {path}: {err}"))
                },
                mutation_finished,
            )
        },
        OpenUpload { dir } => {
            Task::done(AppEvent::UploadUi(UploadEvent::Open { dir }))
        },
        ShowHiddenChanged { show_hidden } => {
            app.settings.show_hidden = show_hidden;
            Task::batch([
                settings::persist(app),
                Task::done(AppEvent::ExplorerUi(ExplorerEvent::FilterChanged)),
            ])
        },
    }
}

/// Fetch a listing, aborting whichever fetch it supersedes.
fn load_directory(
    app: &mut App,
    path: String,
    generation: u64,
) -> Task<AppEvent> {
    let client = app.client.clone();
    log::debug!("loading listing {path:?} (generation {generation})");

    let (task, handle) = Task::perform(
        async move { client.list_directory(&path).await },
        move |result| match result {
            Ok(listing) => AppEvent::ListingUi(ListingEvent::Loaded {
                generation,
                listing,
            }),
            Err(err) => AppEvent::ListingUi(ListingEvent::LoadFailed {
                generation,
                message: err.to_string(),
            }),
        },
    )
    .abortable();

    app.state.replace_listing_request(handle);
    task
}

/// Download `path` and store it in the configured download directory.
fn download_file(app: &App, path: String, name: String) -> Task<AppEvent> {
    let client = app.client.clone();
    let dir = download_dir(app.settings.download_dir.as_deref());

    Task::perform(
        async move {
            let result = match client.download(&path).await {
                Ok(bytes) => save_download(&dir, &name, &bytes)
                    .map_err(|err| err.to_string()),
                Err(err) => Err(err.to_string()),
            };
            (name, result)
        },
        |(name, result)| {
            AppEvent::ListingUi(ListingEvent::DownloadFinished { name, result })
        },
    )
}

/// Delete all `paths` concurrently and collect the failures.
async fn delete_entries(
    client: &FileClient,
    paths: &[String],
    recursive: bool,
) -> Vec<String> {
    let requests = paths.iter().map(|path| async move {
        client
            .delete(path, recursive)
            .await
            .map_err(|err| format!("delete {path}: {err}"))
    });

    join_all(requests)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect()
}

fn mutation_finished(result: Result<(), String>) -> AppEvent {
    let errors = result.err().into_iter().collect();
    AppEvent::ListingUi(ListingEvent::MutationFinished { errors })
}

#[cfg(test)]
mod tests {
    use filedeck_client::FileClient;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::delete_entries;

    /// Answer `count` requests, failing those whose path mentions `locked`.
    async fn serve_deletes(count: usize) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let mut request_lines = Vec::new();
            for _ in 0..count {
                let (mut socket, _) = listener.accept().await.expect("accept");
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                while !raw.windows(4).any(|window| window == b"\r\n\r\n") {
                    let read = socket.read(&mut buf).await.expect("read");
                    if read == 0 {
                        break;
                    }
                    raw.extend_from_slice(&buf[..read]);
                }
                let request = String::from_utf8_lossy(&raw).into_owned();
                let line = request.lines().next().unwrap_or("").to_string();
                let status = if line.contains("locked") {
                    "403 Forbidden"
                } else {
                    "200 OK"
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-length: 0\r\n\
                     connection: close\r\n\r\n"
                );
                socket
                    .write_all(response.as_bytes())
                    .await
                    .expect("write response");
                let _ = socket.shutdown().await;
                request_lines.push(line);
            }
            request_lines.sort();
            request_lines
        });

        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn given_one_failing_path_when_deleting_many_then_all_are_attempted()
    {
        let (base, server) = serve_deletes(3).await;
        let client = FileClient::new(base).expect("client");
        let paths = vec![
            String::from("docs/a.txt"),
            String::from("docs/locked"),
            String::from("docs/b.txt"),
        ];

        let errors = delete_entries(&client, &paths, true).await;
        let requests = server.await.expect("server");

        assert_eq!(requests.len(), 3);
        assert!(
            requests
                .iter()
                .all(|line| line.starts_with("DELETE /api/file/delete?path="))
        );
        assert!(requests.iter().all(|line| line.contains("recursive=true")));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("delete docs/locked:"));
    }

    #[tokio::test]
    async fn given_all_deletes_succeed_when_joined_then_no_errors_remain() {
        let (base, server) = serve_deletes(2).await;
        let client = FileClient::new(base).expect("client");
        let paths = vec![String::from("a.txt"), String::from("b.txt")];

        let errors = delete_entries(&client, &paths, false).await;
        let requests = server.await.expect("server");

        assert!(errors.is_empty());
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|line| line.contains("recursive=false")));
    }
}
