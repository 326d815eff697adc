use iced::widget::text::Wrapping;
use iced::widget::{Space, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::action_button::{self, ActionButtonProps};
use crate::style::bar_style;
use crate::theme::ThemeProps;
use crate::widgets::chrome::event::ChromeEvent;
use crate::widgets::chrome::model::ChromeViewModel;

pub(crate) const HEADER_HEIGHT: f32 = 34.0;
const HEADER_PADDING_X: f32 = 10.0;
const HEADER_SPACING: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 15.0;
const ORIGIN_FONT_SIZE: f32 = 12.0;

/// Props for the application header.
#[derive(Debug, Clone)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) vm: ChromeViewModel,
    pub(crate) base_url: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the header with the drawer toggle and the backend origin.
pub(crate) fn view<'a>(props: HeaderProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();

    let toggle_label = if props.vm.drawer_open {
        "Hide folders"
    } else {
        "Show folders"
    };

    let content = row![
        action_button::view(ActionButtonProps::new(toggle_label, props.theme))
            .map(|_| ChromeEvent::ToggleDrawer),
        text("FileDeck").size(TITLE_FONT_SIZE),
        Space::new().width(Length::Fill),
        text(props.base_url)
            .size(ORIGIN_FONT_SIZE)
            .color(palette.dim_foreground)
            .wrapping(Wrapping::None),
    ]
    .spacing(HEADER_SPACING)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(bar_style(palette))
        .into()
}
