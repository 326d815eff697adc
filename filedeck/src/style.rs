use iced::Background;
use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable};

use crate::theme::{IcedColorPalette, ThemeProps};

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;
        style.horizontal_rail.border.radius = radius;
        style.horizontal_rail.scroller.border.radius = radius;

        let mut scroller_color = palette.dim_foreground;
        scroller_color.a = 0.7;
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);
        style.horizontal_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

/// Row background for tree and listing rows.
pub(crate) fn row_style(
    palette: &IcedColorPalette,
    is_selected: bool,
    is_hovered: bool,
) -> container::Style {
    let background = if is_selected {
        let mut color = palette.dim_blue;
        color.a = 0.7;
        Some(color.into())
    } else if is_hovered {
        let mut color = palette.overlay;
        color.a = 0.6;
        Some(color.into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 0.25,
            color: palette.dim_foreground,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs.
pub(crate) fn backdrop_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let mut color = palette.dim_black;
    color.a = 0.6;
    move |_theme: &iced::Theme| container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

pub(crate) fn modal_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 1.0,
            color: palette.overlay,
            radius: iced::border::Radius::new(6.0),
        },
        ..Default::default()
    }
}

/// Toolbar and header strip.
pub(crate) fn bar_style(
    palette: &IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let overlay = palette.overlay;
    let foreground = palette.foreground;
    move |_theme: &iced::Theme| container::Style {
        background: Some(overlay.into()),
        text_color: Some(foreground),
        ..Default::default()
    }
}

/// Small rounded label such as "Empty" or "Truncated".
pub(crate) fn badge_style(
    palette: &IcedColorPalette,
    color: iced::Color,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let background = palette.overlay;
    move |_theme: &iced::Theme| container::Style {
        background: Some(background.into()),
        text_color: Some(color),
        border: iced::Border {
            width: 1.0,
            color,
            radius: iced::border::Radius::new(3.0),
        },
        ..Default::default()
    }
}

/// Flat text button used in toolbars and dialogs.
pub(crate) fn flat_button_style(
    palette: &IcedColorPalette,
    accent: iced::Color,
    status: ButtonStatus,
) -> button::Style {
    let (background, text_color) = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            (Some(accent.into()), palette.dim_black)
        },
        ButtonStatus::Disabled => (None, palette.dim_foreground),
        ButtonStatus::Active => (None, accent),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            width: 1.0,
            color: if matches!(status, ButtonStatus::Disabled) {
                palette.dim_foreground
            } else {
                accent
            },
            radius: iced::border::Radius::new(3.0),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::{flat_button_style, row_style};
    use crate::theme::AppTheme;

    #[test]
    fn given_selected_row_when_styled_then_selection_wins_over_hover() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = row_style(palette, true, true);

        let mut expected = palette.dim_blue;
        expected.a = 0.7;
        assert_eq!(style.background, Some(Background::Color(expected)));
    }

    #[test]
    fn given_idle_row_when_styled_then_background_is_empty() {
        let theme = AppTheme::default();

        let style = row_style(theme.iced_palette(), false, false);

        assert!(style.background.is_none());
    }

    #[test]
    fn given_disabled_button_when_styled_then_text_is_dimmed() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style =
            flat_button_style(palette, palette.blue, ButtonStatus::Disabled);

        assert_eq!(style.text_color, palette.dim_foreground);
        assert!(style.background.is_none());
    }
}
