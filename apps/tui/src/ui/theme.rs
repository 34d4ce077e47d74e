use portfolio_core::{ColorScheme, Rgb};
use ratatui::style::{Color, Modifier, Style};

/// Colours of one scheme. `Automatic` keeps the terminal's own colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    /// Fill of the selected wedge and legend swatch.
    pub selected: Color,
}

impl Palette {
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Automatic => Self {
                fg: Color::Reset,
                bg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                selected: Color::Rgb(0xd9, 0x3f, 0x72),
            },
            ColorScheme::Light => Self {
                fg: Color::Rgb(0x1f, 0x1f, 0x1f),
                bg: Color::Rgb(0xfa, 0xfa, 0xfa),
                muted: Color::Rgb(0x80, 0x80, 0x80),
                accent: Color::Rgb(0x1f, 0x5f, 0xbf),
                selected: Color::Rgb(0xc0, 0x2a, 0x5c),
            },
            ColorScheme::Dark => Self {
                fg: Color::Rgb(0xe6, 0xe6, 0xe6),
                bg: Color::Rgb(0x16, 0x16, 0x1a),
                muted: Color::Rgb(0x70, 0x70, 0x78),
                accent: Color::Rgb(0x6c, 0xb4, 0xee),
                selected: Color::Rgb(0xf0, 0x5d, 0x8c),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn border(&self, focused: bool) -> Style {
        let color = if focused { self.accent } else { self.muted };
        Style::default().fg(color)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

pub const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_automatic_keeps_terminal_colours() {
        let palette = Palette::for_scheme(ColorScheme::Automatic);
        assert_eq!(palette.fg, Color::Reset);
        assert_eq!(palette.bg, Color::Reset);
        assert_ne!(Palette::for_scheme(ColorScheme::Dark).bg, Color::Reset);
    }

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(rgb((1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
