use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme. Every pane styles itself from the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub completed: Color,
    pub pending: Color,
    pub danger: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Indexed(63), // indigo
            muted: Color::DarkGray,
            border: Color::Gray,
            selected_fg: Color::White,
            selected_bg: Color::Indexed(63),
            completed: Color::Green,
            pending: Color::Indexed(172), // amber
            danger: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Indexed(234), // slate
            accent: Color::Indexed(111),
            muted: Color::Gray,
            border: Color::DarkGray,
            selected_fg: Color::Black,
            selected_bg: Color::Indexed(111),
            completed: Color::LightGreen,
            pending: Color::Yellow,
            danger: Color::LightRed,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Default text style
    pub fn default_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Selected row highlight style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn completed_style(&self) -> Style {
        Style::default().fg(self.completed)
    }

    pub fn pending_style(&self) -> Style {
        Style::default().fg(self.pending)
    }

    /// Crossed-out title of a completed record
    pub fn done_title_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Active filter chip
    pub fn active_chip_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Row currently being dragged
    pub fn dragging_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::ITALIC | Modifier::BOLD)
    }

    pub fn modal_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }
}
