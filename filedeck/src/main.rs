mod app;
mod components;
mod filter;
mod geometry;
mod guards;
mod routers;
mod services;
mod settings;
mod state;
mod style;
mod theme;
mod widgets;

use env_logger::Env;
use filedeck_client::FileClient;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::settings::load_initial_settings;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = load_initial_settings();
    let client = match FileClient::new(settings.base_url.clone()) {
        Ok(client) => client,
        Err(err) => {
            log::error!("failed to create http client: {err}");
            std::process::exit(1);
        },
    };

    iced::application(
        move || App::new(settings.clone(), client.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window(window::Settings {
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        ..window::Settings::default()
    })
    .resizable(true)
    .subscription(App::subscription)
    .run()
}
