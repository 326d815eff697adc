use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, mouse_area, text};
use iced::{Element, alignment, mouse};

use crate::style::flat_button_style;
use crate::theme::{IcedColorPalette, ThemeProps};

const BUTTON_FONT_SIZE: f32 = 13.0;
const BUTTON_PADDING_X: f32 = 10.0;
const BUTTON_PADDING_Y: f32 = 3.0;

/// UI events emitted by an action button.
#[derive(Debug, Clone)]
pub(crate) enum ActionButtonEvent {
    Pressed,
}

/// Visual variants for an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionButtonVariant {
    Standard,
    Primary,
    Danger,
}

/// Gesture that activates the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionTrigger {
    Press,
    /// Destructive actions fire only on a double click.
    DoubleClick,
}

/// Props for rendering an action button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) variant: ActionButtonVariant,
    pub(crate) trigger: ActionTrigger,
    pub(crate) enabled: bool,
}

impl<'a> ActionButtonProps<'a> {
    pub(crate) fn new(label: &'a str, theme: ThemeProps<'a>) -> Self {
        Self {
            label,
            theme,
            variant: ActionButtonVariant::Standard,
            trigger: ActionTrigger::Press,
            enabled: true,
        }
    }

    pub(crate) fn variant(mut self, variant: ActionButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn trigger(mut self, trigger: ActionTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub(crate) fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Render a flat text button.
pub(crate) fn view<'a>(
    props: ActionButtonProps<'a>,
) -> Element<'a, ActionButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let accent = accent_color(palette, props.variant);

    let label = text(props.label)
        .size(BUTTON_FONT_SIZE)
        .align_y(alignment::Vertical::Center);

    match props.trigger {
        ActionTrigger::Press => {
            let mut widget = button(label)
                .padding([BUTTON_PADDING_Y, BUTTON_PADDING_X])
                .style(move |_, status| {
                    flat_button_style(palette, accent, status)
                });
            if props.enabled {
                widget = widget.on_press(ActionButtonEvent::Pressed);
            }
            widget.into()
        },
        ActionTrigger::DoubleClick => {
            let status = if props.enabled {
                ButtonStatus::Active
            } else {
                ButtonStatus::Disabled
            };
            let style = flat_button_style(palette, accent, status);
            let body = container(label)
                .padding([BUTTON_PADDING_Y, BUTTON_PADDING_X])
                .style(move |_| container::Style {
                    background: style.background,
                    text_color: Some(style.text_color),
                    border: style.border,
                    ..Default::default()
                });

            if !props.enabled {
                return body.into();
            }

            mouse_area(body)
                .on_double_click(ActionButtonEvent::Pressed)
                .interaction(mouse::Interaction::Pointer)
                .into()
        },
    }
}

fn accent_color(
    palette: &IcedColorPalette,
    variant: ActionButtonVariant,
) -> iced::Color {
    match variant {
        ActionButtonVariant::Standard => palette.foreground,
        ActionButtonVariant::Primary => palette.blue,
        ActionButtonVariant::Danger => palette.red,
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionButtonVariant, accent_color};
    use crate::theme::AppTheme;

    #[test]
    fn given_danger_variant_when_resolving_accent_then_red_is_used() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        assert_eq!(
            accent_color(palette, ActionButtonVariant::Danger),
            palette.red
        );
        assert_eq!(
            accent_color(palette, ActionButtonVariant::Primary),
            palette.blue
        );
    }
}
