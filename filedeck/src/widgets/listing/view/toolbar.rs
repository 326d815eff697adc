use iced::widget::button::Status as ButtonStatus;
use iced::widget::text::Wrapping;
use iced::widget::{Row, Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::action_button::{
    self, ActionButtonProps, ActionButtonVariant,
};
use crate::style::{bar_style, flat_button_style};
use crate::theme::ThemeProps;
use crate::widgets::listing::event::ListingEvent;
use crate::widgets::listing::model::{
    ListingAction, ListingViewModel, available_actions, breadcrumbs,
    shows_selection_summary,
};

const BAR_PADDING_X: f32 = 10.0;
const BAR_PADDING_Y: f32 = 6.0;
const BAR_SPACING: f32 = 6.0;
const CRUMB_FONT_SIZE: f32 = 13.0;
const STATUS_FONT_SIZE: f32 = 12.0;

/// Props for the listing toolbar.
#[derive(Debug, Clone)]
pub(crate) struct ToolbarProps<'a> {
    pub(crate) vm: ListingViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the breadcrumb line, the action line and an optional notice.
pub(crate) fn view<'a>(props: ToolbarProps<'a>) -> Element<'a, ListingEvent> {
    let palette = props.theme.theme.iced_palette();
    let theme = props.theme;

    let show_hidden_label = if props.vm.show_hidden {
        "Hide hidden"
    } else {
        "Show hidden"
    };
    let path_line = row![
        crumb_trail(props.vm.path, theme),
        Space::new().width(Length::Fill),
        action_button::view(ActionButtonProps::new(show_hidden_label, theme))
            .map(|_| ListingEvent::ShowHiddenToggled),
        action_button::view(ActionButtonProps::new("Reload", theme))
            .map(|_| ListingEvent::Reload),
    ]
    .spacing(BAR_SPACING)
    .align_y(alignment::Vertical::Center);

    let selected = props.vm.selected_count;
    let mut action_line = Row::new()
        .spacing(BAR_SPACING)
        .align_y(alignment::Vertical::Center);
    if shows_selection_summary(selected) {
        action_line = action_line
            .push(
                text(format!("Selected {selected}"))
                    .size(STATUS_FONT_SIZE)
                    .color(palette.dim_foreground),
            )
            .push(
                action_button::view(ActionButtonProps::new(
                    "Unselect All",
                    theme,
                ))
                .map(|_| ListingEvent::UnselectAll),
            );
    }
    action_line = action_line.push(Space::new().width(Length::Fill));
    for action in available_actions(selected) {
        action_line =
            action_line.push(action_element(action, selected, theme));
    }

    let mut content = column![path_line, action_line].spacing(BAR_SPACING);

    if let Some(notice) = props.vm.notice {
        let notice_line = row![
            text(notice)
                .size(STATUS_FONT_SIZE)
                .color(palette.red)
                .width(Length::Fill),
            action_button::view(ActionButtonProps::new("Dismiss", theme))
                .map(|_| ListingEvent::DismissNotice),
        ]
        .spacing(BAR_SPACING)
        .align_y(alignment::Vertical::Center);
        content = content.push(notice_line);
    }

    container(content)
        .width(Length::Fill)
        .padding([BAR_PADDING_Y, BAR_PADDING_X])
        .style(bar_style(palette))
        .into()
}

fn action_element<'a>(
    action: ListingAction,
    selected: usize,
    theme: ThemeProps<'a>,
) -> Element<'a, ListingEvent> {
    let variant = match action {
        ListingAction::Delete => ActionButtonVariant::Danger,
        ListingAction::Upload => ActionButtonVariant::Primary,
        _ => ActionButtonVariant::Standard,
    };

    action_button::view(
        ActionButtonProps::new(action.label(selected), theme).variant(variant),
    )
    .map(move |_| ListingEvent::Action(action))
}

fn crumb_trail<'a>(
    path: &str,
    theme: ThemeProps<'a>,
) -> Element<'a, ListingEvent> {
    let palette = theme.theme.iced_palette();
    let mut trail =
        Row::new().spacing(2.0).align_y(alignment::Vertical::Center);

    for (index, crumb) in breadcrumbs(path).into_iter().enumerate() {
        if index > 1 {
            trail = trail.push(
                text("/").size(CRUMB_FONT_SIZE).color(palette.dim_foreground),
            );
        }

        let label = text(crumb.label)
            .size(CRUMB_FONT_SIZE)
            .wrapping(Wrapping::None);
        if crumb.is_last {
            trail = trail.push(container(label).padding([2.0, 4.0]));
            continue;
        }

        let accent = palette.blue;
        trail = trail.push(
            button(label)
                .padding([2.0, 4.0])
                .style(move |_, status| {
                    let mut style = flat_button_style(palette, accent, status);
                    style.border.width = 0.0;
                    if matches!(status, ButtonStatus::Active) {
                        style.background = None;
                    }
                    style
                })
                .on_press(ListingEvent::Navigate { path: crumb.path }),
        );
    }

    trail.into()
}
