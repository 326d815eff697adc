use filedeck_client::PreviewKind;
use iced::widget::{column, pick_list, row, text};
use iced::{Element, alignment};

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::theme::ThemeProps;
use crate::widgets::viewer::event::ViewerEvent;

const FONT_SIZE: f32 = 13.0;
const SPACING: f32 = 10.0;

/// Props for the force-preview controls.
#[derive(Debug, Clone)]
pub(crate) struct ForcePreviewProps<'a> {
    pub(crate) choice: &'a PreviewKind,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the viewability warning with a viewer picker.
pub(crate) fn view<'a>(
    props: ForcePreviewProps<'a>,
) -> Element<'a, ViewerEvent> {
    let palette = props.theme.theme.iced_palette();

    let picker = pick_list(
        PreviewKind::FORCEABLE.to_vec(),
        Some(props.choice.clone()),
        ViewerEvent::ForceChoiceSelected,
    )
    .text_size(FONT_SIZE);

    let controls = row![
        picker,
        action_button::view(
            ActionButtonProps::new("Force preview", props.theme)
                .variant(ActionButtonVariant::Primary),
        )
        .map(|_| ViewerEvent::ForcePreview),
    ]
    .spacing(SPACING)
    .align_y(alignment::Vertical::Center);

    column![
        text("This file type may not be viewable")
            .size(FONT_SIZE)
            .color(palette.yellow),
        controls,
    ]
    .spacing(SPACING)
    .into()
}
