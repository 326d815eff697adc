use iced::widget::{Space, column, container, mouse_area, row, scrollable, text};
use iced::{Element, Length, alignment, mouse};

use crate::style::{backdrop_style, modal_panel_style, thin_scroll_style};
use crate::theme::ThemeProps;

const TITLE_FONT_SIZE: f32 = 15.0;
const PANEL_PADDING: f32 = 14.0;
const SECTION_SPACING: f32 = 12.0;

/// Props for a centered modal dialog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModalProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) width: Length,
    pub(crate) height: Length,
}

impl<'a> ModalProps<'a> {
    pub(crate) fn new(title: &'a str, theme: ThemeProps<'a>) -> Self {
        Self {
            title,
            theme,
            width: Length::Fixed(420.0),
            height: Length::Shrink,
        }
    }

    pub(crate) fn size(mut self, width: Length, height: Length) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Render a modal panel over a backdrop that swallows pointer input.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: ModalProps<'a>,
    body: Element<'a, Message>,
    footer: Element<'a, Message>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();

    let title = text(props.title)
        .size(TITLE_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left);

    let body = scrollable(body)
        .width(Length::Fill)
        .height(if props.height == Length::Shrink {
            Length::Shrink
        } else {
            Length::Fill
        })
        .style(thin_scroll_style(palette.clone()));

    let footer = row![Space::new().width(Length::Fill), footer]
        .align_y(alignment::Vertical::Center);

    let panel = container(
        column![title, body, footer]
            .spacing(SECTION_SPACING)
            .width(Length::Fill),
    )
    .padding(PANEL_PADDING)
    .width(props.width)
    .height(props.height)
    .style(modal_panel_style(props.theme));

    let backdrop = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24.0)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(backdrop_style(palette));

    mouse_area(backdrop)
        .interaction(mouse::Interaction::Idle)
        .into()
}
