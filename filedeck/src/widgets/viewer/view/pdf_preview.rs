use std::path::Path;

use filedeck_client::bytes_to_human_readable;
use iced::widget::{column, text};
use iced::Element;

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::theme::ThemeProps;
use crate::widgets::viewer::event::ViewerEvent;

const FONT_SIZE: f32 = 13.0;
const SPACING: f32 = 10.0;

/// Props for the PDF viewer.
#[derive(Debug, Clone)]
pub(crate) struct PdfPreviewProps<'a> {
    pub(crate) file: &'a Path,
    pub(crate) size: u64,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the staged PDF summary and a button to open it externally.
pub(crate) fn view<'a>(props: PdfPreviewProps<'a>) -> Element<'a, ViewerEvent> {
    let palette = props.theme.theme.iced_palette();

    column![
        text(format!("PDF document, {}", bytes_to_human_readable(props.size)))
            .size(FONT_SIZE),
        text(props.file.display().to_string())
            .size(FONT_SIZE)
            .color(palette.dim_foreground),
        action_button::view(
            ActionButtonProps::new("Open in system viewer", props.theme)
                .variant(ActionButtonVariant::Primary),
        )
        .map(|_| ViewerEvent::OpenExternally),
    ]
    .spacing(SPACING)
    .into()
}
