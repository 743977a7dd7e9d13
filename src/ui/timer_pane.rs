use crate::app::AppState;
use crate::domain::Mode;
use crate::ui::styles::{
    active_tab_style, border_style, gauge_style, hint_style, inactive_tab_style, time_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the timer pane: mode tabs, the MM:SS readout, run state, and the
/// progress gauge.
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Lumina ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode tabs
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Time readout
            Constraint::Length(1), // Run state
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

    let tabs = Paragraph::new(mode_tabs_line(app.countdown.mode())).alignment(Alignment::Center);
    f.render_widget(tabs, chunks[0]);

    let time = Paragraph::new(app.countdown.format_remaining())
        .style(time_style(app.countdown.mode()))
        .alignment(Alignment::Center);
    f.render_widget(time, chunks[2]);

    let state = if app.countdown.is_running() {
        "RUNNING"
    } else {
        "PAUSED"
    };
    let state_line = Paragraph::new(state)
        .style(hint_style())
        .alignment(Alignment::Center);
    f.render_widget(state_line, chunks[3]);

    // The raw percentage can drift outside 0..100 while a stale countdown
    // outlives a settings save; the gauge display clamps it.
    let percent = app.countdown.progress_percent().clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .gauge_style(gauge_style(app.countdown.mode()))
        .percent(percent)
        .label("");
    f.render_widget(gauge, chunks[5]);
}

/// Build the mode tab line with the active mode highlighted
fn mode_tabs_line(active: Mode) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, mode) in Mode::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let label = format!(" {} ", mode.name());
        if *mode == active {
            spans.push(Span::styled(label, active_tab_style(*mode)));
        } else {
            spans.push(Span::styled(label, inactive_tab_style()));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tabs_line_contains_all_modes() {
        let line = mode_tabs_line(Mode::ShortBreak);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Focus"));
        assert!(text.contains("Short Break"));
        assert!(text.contains("Long Break"));
    }
}
