use filedeck_client::{TextPreview, bytes_to_human_readable};
use iced::widget::{Row, column, container, text};
use iced::{Element, Font, Length};

use crate::style::badge_style;
use crate::theme::ThemeProps;
use crate::widgets::viewer::event::ViewerEvent;

const FONT_SIZE: f32 = 13.0;
const BADGE_FONT_SIZE: f32 = 11.0;
const SPACING: f32 = 8.0;

/// Props for the text viewer.
#[derive(Debug, Clone)]
pub(crate) struct TextPreviewProps<'a> {
    pub(crate) preview: &'a TextPreview,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the content literally in a monospace block with status badges.
pub(crate) fn view<'a>(
    props: TextPreviewProps<'a>,
) -> Element<'a, ViewerEvent> {
    let palette = props.theme.theme.iced_palette();

    let mut badges = Row::new().spacing(SPACING);
    if props.preview.content.is_empty() {
        badges = badges.push(badge(
            String::from("Empty"),
            palette.dim_foreground,
            props.theme,
        ));
    }
    if props.preview.truncate {
        let label = format!(
            "Truncated (Total: {})",
            bytes_to_human_readable(props.preview.size)
        );
        badges = badges.push(badge(label, palette.yellow, props.theme));
    }

    let content = container(
        text(props.preview.content.as_str())
            .size(FONT_SIZE)
            .font(Font::MONOSPACE),
    )
    .width(Length::Fill);

    column![badges, content].spacing(SPACING).into()
}

fn badge<'a>(
    label: String,
    color: iced::Color,
    theme: ThemeProps<'a>,
) -> Element<'a, ViewerEvent> {
    container(text(label).size(BADGE_FONT_SIZE))
        .padding([1.0, 6.0])
        .style(badge_style(theme.theme.iced_palette(), color))
        .into()
}
