use crate::client::notice::NoticeLevel;
use crate::languages::Tint;
use ratatui::style::{Color, Modifier, Style};

/// Colors for the translator screen.
pub struct Theme {
    // Text
    pub fg: Color,
    pub dimmed: Color, // placeholders, history source text
    pub title: Color,

    // Accents
    pub accent: Color, // focused text area title

    // Borders
    pub border_inactive: Color,
    pub border_active: Color,

    // Status bar
    pub status_bar: Color,

    // Notices
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    /// Deep dark background with bright green accents
    pub fn textual_dark() -> Self {
        Self {
            fg: Color::Rgb(200, 200, 200),          // #C8C8C8
            dimmed: Color::Rgb(117, 117, 117),      // #757575
            title: Color::Rgb(180, 180, 180),       // #B4B4B4
            accent: Color::Rgb(0, 255, 95),         // #00FF5F
            border_inactive: Color::Rgb(60, 60, 60), // #3C3C3C
            border_active: Color::Rgb(0, 255, 95),
            status_bar: Color::Rgb(40, 40, 40),     // #282828
            info: Color::Rgb(120, 180, 255),
            success: Color::Rgb(0, 255, 95),
            warning: Color::Rgb(255, 200, 0),       // yellow
            error: Color::Rgb(255, 0, 95),          // pink
        }
    }

    /// VS Code Dark+
    pub fn vscode_style() -> Self {
        Self {
            fg: Color::Rgb(200, 200, 200),
            dimmed: Color::Rgb(113, 113, 113),
            title: Color::Rgb(190, 190, 190),
            accent: Color::Rgb(0, 122, 204), // #007ACC, VS Code blue
            border_inactive: Color::Rgb(70, 70, 70),
            border_active: Color::Rgb(0, 122, 204),
            status_bar: Color::Rgb(25, 25, 26),
            info: Color::Rgb(86, 156, 214),
            success: Color::Rgb(106, 153, 85),
            warning: Color::Rgb(220, 220, 170),
            error: Color::Rgb(244, 63, 94),
        }
    }

    /// Catppuccin-like neutral palette
    pub fn opencode_style() -> Self {
        Self {
            fg: Color::Rgb(190, 198, 230),
            dimmed: Color::Rgb(165, 173, 206),
            title: Color::Rgb(180, 188, 220),
            accent: Color::Rgb(138, 173, 244),
            border_inactive: Color::Rgb(54, 58, 79),
            border_active: Color::Rgb(138, 173, 244),
            status_bar: Color::Rgb(30, 32, 48),
            info: Color::Rgb(145, 215, 227),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(250, 179, 135),
            error: Color::Rgb(237, 135, 150),
        }
    }

    /// Body text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Focused blocks get the active border color
    pub fn border_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.border_active)
        } else {
            Style::default().fg(self.border_inactive)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.status_bar).fg(self.fg)
    }

    /// Status bar while a notice is showing
    pub fn notice_style(&self, level: NoticeLevel) -> Style {
        let color = match level {
            NoticeLevel::Info => self.info,
            NoticeLevel::Success => self.success,
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.error,
        };
        Style::default()
            .bg(self.status_bar)
            .fg(color)
            .add_modifier(Modifier::BOLD)
    }

    /// A language button. Once a choice exists, the others are dimmed.
    pub fn language_style(&self, tint: Tint, selected: bool, any_selected: bool) -> Style {
        let style = Style::default().fg(tint_color(tint));
        if selected {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if any_selected {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

/// Language button colors, shared by every theme.
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Red => Color::Rgb(248, 113, 113),
        Tint::Yellow => Color::Rgb(250, 204, 21),
        Tint::Green => Color::Rgb(74, 222, 128),
        Tint::Orange => Color::Rgb(251, 146, 60),
        Tint::Blue => Color::Rgb(96, 165, 250),
    }
}

pub fn get_theme_by_name(name: &str) -> Theme {
    match name {
        "vscode_style" => Theme::vscode_style(),
        "opencode_style" => Theme::opencode_style(),
        _ => Theme::textual_dark(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_name_uses_textual_dark() {
        assert_eq!(get_theme_by_name("nope").accent, Theme::textual_dark().accent);
        assert_eq!(get_theme_by_name("vscode_style").accent, Color::Rgb(0, 122, 204));
    }

    #[test]
    fn unselected_buttons_dim_only_after_a_choice() {
        let theme = Theme::textual_dark();
        let idle = theme.language_style(Tint::Blue, false, false);
        let dimmed = theme.language_style(Tint::Blue, false, true);
        let chosen = theme.language_style(Tint::Blue, true, true);

        assert!(!idle.add_modifier.contains(Modifier::DIM));
        assert!(dimmed.add_modifier.contains(Modifier::DIM));
        assert!(chosen.add_modifier.contains(Modifier::REVERSED));
    }
}
