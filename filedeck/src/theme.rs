use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw palette in `#RRGGBB` notation.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_blue: String,
    pub(crate) dim_black: String,
    pub(crate) dim_foreground: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            dim_blue: String::from("#2F638F"),
            dim_black: String::from("#0F1115"),
            dim_foreground: String::from("#6B7280"),
            overlay: String::from("#232530"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_blue: Color,
    pub(crate) dim_black: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            red: parse_hex_color(&p.red),
            green: parse_hex_color(&p.green),
            yellow: parse_hex_color(&p.yellow),
            blue: parse_hex_color(&p.blue),
            dim_blue: parse_hex_color(&p.dim_blue),
            dim_black: parse_hex_color(&p.dim_black),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Parse `#RRGGBB`, falling back to magenta so bad input stays visible.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    let digits = value.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
    };

    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::from_rgb8(r, g, b),
        _ => Color::from_rgb8(0xFF, 0x00, 0xFF),
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::from(&ColorPalette::default()),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.dim_blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_valid_hex_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#4FA6ED"),
            Color::from_rgb8(0x4F, 0xA6, 0xED)
        );
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_fallback_is_used() {
        let fallback = Color::from_rgb8(0xFF, 0x00, 0xFF);

        assert_eq!(parse_hex_color("#12"), fallback);
        assert_eq!(parse_hex_color("zzzzzz"), fallback);
    }
}
