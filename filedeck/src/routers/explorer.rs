use iced::Task;
use iced::widget::{operation, scrollable};

use crate::app::{App, AppEvent};
use crate::filter::ViewFilter;
use crate::widgets::explorer::view::sidebar_tree::TREE_SCROLL_ID;
use crate::widgets::explorer::{ExplorerCtx, ExplorerEffect, ExplorerEvent};
use crate::widgets::listing::ListingEvent;

/// Route an explorer UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ExplorerEvent,
) -> Task<AppEvent> {
    let ctx = ExplorerCtx {
        filter: ViewFilter::directories(app.widgets.listing.show_hidden()),
    };
    app.widgets
        .explorer
        .reduce(event, &ctx)
        .map(AppEvent::ExplorerEffect)
}

/// Route an explorer effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &App,
    effect: ExplorerEffect,
) -> Task<AppEvent> {
    match effect {
        ExplorerEffect::LoadRootRequested => {
            let client = app.client.clone();
            Task::perform(
                async move { client.list_directory("").await },
                |result| match result {
                    Ok(listing) => {
                        AppEvent::ExplorerUi(ExplorerEvent::RootLoaded {
                            listing,
                        })
                    },
                    Err(err) => {
                        AppEvent::ExplorerUi(ExplorerEvent::RootLoadFailed {
                            message: err.to_string(),
                        })
                    },
                },
            )
        },
        ExplorerEffect::LoadFolderRequested { id } => {
            let client = app.client.clone();
            Task::perform(
                async move {
                    let result = client.list_directory(&id).await;
                    (id, result)
                },
                |(id, result)| match result {
                    Ok(listing) => AppEvent::ExplorerUi(
                        ExplorerEvent::FolderLoaded { id, listing },
                    ),
                    Err(err) => {
                        AppEvent::ExplorerUi(ExplorerEvent::FolderLoadFailed {
                            id,
                            message: err.to_string(),
                        })
                    },
                },
            )
        },
        ExplorerEffect::NavigateRequested { path } => {
            Task::done(AppEvent::ListingUi(ListingEvent::Navigate { path }))
        },
        ExplorerEffect::ScrollRequested { offset } => operation::scroll_to(
            TREE_SCROLL_ID,
            scrollable::AbsoluteOffset {
                x: offset.x,
                y: offset.y,
            },
        ),
    }
}
