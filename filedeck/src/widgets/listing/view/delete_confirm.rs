use iced::widget::{Column, column, row, text};
use iced::Element;

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant, ActionTrigger,
};
use crate::components::primitive::modal::{self, ModalProps};
use crate::theme::ThemeProps;
use crate::widgets::listing::event::ListingEvent;
use crate::widgets::listing::model::DeleteConfirm;

const FONT_SIZE: f32 = 13.0;
const HINT_FONT_SIZE: f32 = 12.0;
const SPACING: f32 = 8.0;

/// Props for the delete confirmation modal.
#[derive(Debug, Clone)]
pub(crate) struct DeleteConfirmProps<'a> {
    pub(crate) confirm: &'a DeleteConfirm,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the list of doomed names; both delete buttons need a double click.
pub(crate) fn view<'a>(
    props: DeleteConfirmProps<'a>,
) -> Element<'a, ListingEvent> {
    let palette = props.theme.theme.iced_palette();

    let names = Column::with_children(props.confirm.names.iter().map(|name| {
        text(name.as_str()).size(FONT_SIZE).into()
    }))
    .spacing(2.0);

    let body = column![
        text("The following entries will be deleted:").size(FONT_SIZE),
        names,
        text("Double-click a delete button to confirm.")
            .size(HINT_FONT_SIZE)
            .color(palette.dim_foreground),
    ]
    .spacing(SPACING);

    let footer = row![
        action_button::view(ActionButtonProps::new("Cancel", props.theme))
            .map(|_| ListingEvent::DeleteCancelled),
        danger_button("Delete Recursively", props.theme)
            .map(|_| ListingEvent::DeleteConfirmed { recursive: true }),
        danger_button("Delete", props.theme)
            .map(|_| ListingEvent::DeleteConfirmed { recursive: false }),
    ]
    .spacing(SPACING);

    modal::view(
        ModalProps::new("Delete", props.theme),
        body.into(),
        footer.into(),
    )
}

fn danger_button<'a>(
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, action_button::ActionButtonEvent> {
    action_button::view(
        ActionButtonProps::new(label, theme)
            .variant(ActionButtonVariant::Danger)
            .trigger(ActionTrigger::DoubleClick),
    )
}
