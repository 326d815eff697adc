use filedeck_client::FILENAME_RULES;
use iced::widget::{Column, column, row, text, text_input};
use iced::{Element, Length};

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::components::primitive::modal::{self, ModalProps};
use crate::theme::ThemeProps;
use crate::widgets::listing::event::ListingEvent;
use crate::widgets::listing::model::NamePrompt;

const INPUT_SIZE: f32 = 13.0;
const INPUT_PADDING_X: f32 = 8.0;
const INPUT_PADDING_Y: f32 = 6.0;
const RULE_FONT_SIZE: f32 = 12.0;
const FIELD_SPACING: f32 = 8.0;

/// Props for the rename / create-directory prompt.
#[derive(Debug, Clone)]
pub(crate) struct NamePromptProps<'a> {
    pub(crate) prompt: &'a NamePrompt,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the name prompt modal with live validation.
pub(crate) fn view<'a>(
    props: NamePromptProps<'a>,
) -> Element<'a, ListingEvent> {
    let palette = props.theme.theme.iced_palette();
    let is_valid = props.prompt.is_valid();

    let input = text_input(props.prompt.placeholder(), &props.prompt.value)
        .on_input(ListingEvent::PromptChanged)
        .on_submit(ListingEvent::PromptConfirmed)
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .size(INPUT_SIZE)
        .width(Length::Fill);

    let rule_color = if is_valid {
        palette.dim_foreground
    } else {
        palette.red
    };
    let rules = Column::with_children(FILENAME_RULES.iter().map(|rule| {
        text(*rule).size(RULE_FONT_SIZE).color(rule_color).into()
    }))
    .spacing(2.0);

    let body = column![input, rules].spacing(FIELD_SPACING);

    let footer = row![
        action_button::view(ActionButtonProps::new("Cancel", props.theme))
            .map(|_| ListingEvent::PromptCancelled),
        action_button::view(
            ActionButtonProps::new(props.prompt.confirm_label(), props.theme)
                .variant(ActionButtonVariant::Primary)
                .enabled(is_valid),
        )
        .map(|_| ListingEvent::PromptConfirmed),
    ]
    .spacing(FIELD_SPACING);

    modal::view(
        ModalProps::new(props.prompt.title(), props.theme),
        body.into(),
        footer.into(),
    )
}
