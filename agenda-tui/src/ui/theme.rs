use ratatui::style::{Color, Modifier, Style};

use crate::preferences::Preferences;

/// Palette and text weight picked from the preference flags.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub large_font: bool,
}

impl Theme {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let base = if prefs.dark_mode {
            Self::dark()
        } else {
            Self::light()
        };
        Self {
            large_font: prefs.large_font,
            ..base
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Reset,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Cyan,
            highlight_bg: Color::Rgb(40, 44, 52),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            large_font: false,
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 245),
            text: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            accent: Color::Blue,
            highlight_bg: Color::Rgb(220, 226, 240),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(176, 112, 0),
            error: Color::Rgb(190, 0, 0),
            large_font: false,
        }
    }

    fn weight(&self, style: Style) -> Style {
        if self.large_font {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn text(&self) -> Style {
        self.weight(Style::default().fg(self.text))
    }

    pub fn muted(&self) -> Style {
        self.weight(Style::default().fg(self.muted))
    }

    pub fn accent(&self) -> Style {
        self.weight(Style::default().fg(self.accent))
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn success(&self) -> Style {
        self.weight(Style::default().fg(self.success))
    }

    pub fn warning(&self) -> Style {
        self.weight(Style::default().fg(self.warning))
    }

    pub fn error(&self) -> Style {
        self.weight(Style::default().fg(self.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_font_makes_text_bold() {
        let prefs = Preferences {
            dark_mode: false,
            large_font: true,
            sidebar_collapsed: false,
        };
        let theme = Theme::from_preferences(&prefs);
        assert!(theme.text().add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.text, Color::Black);

        let dark = Theme::from_preferences(&Preferences::defaults(true));
        assert!(!dark.text().add_modifier.contains(Modifier::BOLD));
        assert_eq!(dark.text, Color::White);
    }
}
