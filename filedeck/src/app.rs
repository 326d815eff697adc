#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use filedeck_client::FileClient;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::settings::Settings;
use crate::state::State;
use crate::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeWidget};
use crate::widgets::explorer::{ExplorerEffect, ExplorerEvent, ExplorerWidget};
use crate::widgets::listing::{ListingEffect, ListingEvent, ListingWidget};
use crate::widgets::upload::{UploadEffect, UploadEvent, UploadWidget};
use crate::widgets::viewer::{ViewerEffect, ViewerEvent, ViewerWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Chrome widget
    ChromeUi(ChromeEvent),
    ChromeEffect(ChromeEffect),
    // Explorer widget
    ExplorerUi(ExplorerEvent),
    ExplorerEffect(ExplorerEffect),
    // Listing widget
    ListingUi(ListingEvent),
    ListingEffect(ListingEffect),
    // Viewer widget
    ViewerUi(ViewerEvent),
    ViewerEffect(ViewerEffect),
    // Upload widget
    UploadUi(UploadEvent),
    UploadEffect(UploadEffect),
    // Direct operations
    SettingsPersisted(Result<(), String>),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) settings: Settings,
    pub(crate) client: FileClient,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(
        settings: Settings,
        client: FileClient,
    ) -> (Self, Task<AppEvent>) {
        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        let widgets = Widgets {
            chrome: ChromeWidget::new(settings.drawer_open),
            explorer: ExplorerWidget::new(),
            listing: ListingWidget::new(settings.show_hidden),
            viewer: ViewerWidget::new(),
            upload: UploadWidget::new(),
        };

        let app = App {
            theme_manager: ThemeManager::default(),
            settings,
            client,
            state: State::new(window_size),
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        let path = self.widgets.listing.path();
        if path.is_empty() {
            String::from("FileDeck")
        } else {
            format!("FileDeck - /{path}")
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
