use crate::domain::Priority;
use ratatui::style::{Color, Modifier, Style};

/// Colour palette for the light or dark theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub modal_bg: Color,
}

const LIGHT: Palette = Palette {
    fg: Color::Black,
    bg: Color::White,
    accent: Color::Blue,
    muted: Color::DarkGray,
    highlight_fg: Color::White,
    highlight_bg: Color::Blue,
    modal_bg: Color::Gray,
};

const DARK: Palette = Palette {
    fg: Color::White,
    bg: Color::Black,
    accent: Color::Cyan,
    muted: Color::Gray,
    highlight_fg: Color::Black,
    highlight_bg: Color::LightCyan,
    modal_bg: Color::DarkGray,
};

/// Palette for the current theme flag
pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        DARK
    } else {
        LIGHT
    }
}

/// Default text style
pub fn default_style(p: Palette) -> Style {
    Style::default().fg(p.fg).bg(p.bg)
}

/// Selected row highlight style
pub fn selected_style(p: Palette) -> Style {
    Style::default()
        .fg(p.highlight_fg)
        .bg(p.highlight_bg)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(p: Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(p: Palette) -> Style {
    Style::default().fg(p.muted)
}

/// Keybinding hint style
pub fn hint_style(p: Palette) -> Style {
    Style::default().fg(p.muted)
}

/// Tree connector style (for subtasks)
pub fn tree_style(p: Palette) -> Style {
    Style::default().fg(p.muted)
}

/// Modal background style
pub fn modal_bg_style(p: Palette) -> Style {
    Style::default().bg(p.modal_bg).fg(p.fg)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Category badge style
pub fn category_style() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Priority badge colour
pub fn priority_style(priority: Priority) -> Style {
    let color = match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Running timer display
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Timer gauge style
pub fn gauge_style(break_mode: bool) -> Style {
    let color = if break_mode { Color::Green } else { Color::Red };
    Style::default().fg(color).bg(Color::DarkGray)
}

/// Celebration banner style
pub fn celebration_style() -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_switches() {
        assert_eq!(palette(false), LIGHT);
        assert_eq!(palette(true), DARK);
        assert_ne!(default_style(palette(true)), default_style(palette(false)));
    }

    #[test]
    fn test_priority_colours_differ() {
        assert_ne!(priority_style(Priority::Low), priority_style(Priority::High));
    }
}
