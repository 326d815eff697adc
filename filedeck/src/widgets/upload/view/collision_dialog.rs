use iced::widget::{Column, column, row, text};
use iced::Element;

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::components::primitive::modal::{self, ModalProps};
use crate::theme::ThemeProps;
use crate::widgets::upload::event::UploadEvent;
use crate::widgets::upload::model::{CollisionChoice, CollisionPrompt};

const FONT_SIZE: f32 = 13.0;
const SPACING: f32 = 8.0;

/// Props for the name collision dialog.
#[derive(Debug, Clone)]
pub(crate) struct CollisionDialogProps<'a> {
    pub(crate) prompt: &'a CollisionPrompt,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the colliding names with the three ways to continue.
pub(crate) fn view<'a>(
    props: CollisionDialogProps<'a>,
) -> Element<'a, UploadEvent> {
    let names = Column::with_children(props.prompt.colliding.iter().map(|name| {
        text(name.as_str()).size(FONT_SIZE).into()
    }))
    .spacing(2.0);

    let body = column![
        text("These files already exist in the target directory:")
            .size(FONT_SIZE),
        names,
    ]
    .spacing(SPACING);

    let footer = row![
        choice_button("Cancel", CollisionChoice::Cancel, props.theme),
        choice_button(
            "Upload Not Exists",
            CollisionChoice::UploadMissing,
            props.theme,
        ),
        choice_button("Override", CollisionChoice::Override, props.theme),
    ]
    .spacing(SPACING);

    modal::view(
        ModalProps::new("Files already exist", props.theme),
        body.into(),
        footer.into(),
    )
}

fn choice_button<'a>(
    label: &'a str,
    choice: CollisionChoice,
    theme: ThemeProps<'a>,
) -> Element<'a, UploadEvent> {
    let variant = match choice {
        CollisionChoice::Cancel => ActionButtonVariant::Standard,
        CollisionChoice::UploadMissing => ActionButtonVariant::Primary,
        CollisionChoice::Override => ActionButtonVariant::Danger,
    };

    action_button::view(ActionButtonProps::new(label, theme).variant(variant))
        .map(move |_| UploadEvent::CollisionResolved(choice))
}
