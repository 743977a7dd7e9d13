use crate::domain::Mode;
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Accent color for a timer mode
pub fn accent_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::Magenta,
        Mode::ShortBreak => Color::Cyan,
        Mode::LongBreak => Color::Blue,
    }
}

/// Large time readout style for a mode
pub fn time_style(mode: Mode) -> Style {
    Style::default()
        .fg(accent_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Active mode tab style
pub fn active_tab_style(mode: Mode) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(accent_color(mode))
        .add_modifier(Modifier::BOLD)
}

/// Inactive mode tab style
pub fn inactive_tab_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Progress gauge style for a mode
pub fn gauge_style(mode: Mode) -> Style {
    Style::default().fg(accent_color(mode)).bg(Color::DarkGray)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Motivation quote style
pub fn quote_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::ITALIC)
}
