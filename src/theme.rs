//! Color palette and shared styles for the intake form.

use ratatui::style::{Color, Modifier, Style};

/// Kanagawa Wave palette constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Plain ANSI colors for terminals where the Kanagawa palette washes out.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Magenta,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
        }
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn label_focused(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.red)
    }

    pub fn mode_normal(&self) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(self.text_muted)
            .add_modifier(Modifier::BOLD)
    }

    pub fn mode_insert(&self) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(self.green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default()
            .fg(self.yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn status_ok(&self) -> Style {
        Style::default().fg(self.green)
    }

    pub fn status_warn(&self) -> Style {
        Style::default().fg(self.yellow)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}
