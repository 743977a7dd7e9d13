use crate::app::{AppState, SettingsFormState};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the timer settings form (durations in minutes)
pub fn render_settings_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        push_field(&mut lines, form, 0, "Focus duration (minutes)", &form.focus_mins);
        push_field(&mut lines, form, 1, "Short break (minutes)", &form.short_break_mins);
        push_field(&mut lines, form, 2, "Long break (minutes)", &form.long_break_mins);
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Timer Settings ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

fn push_field(
    lines: &mut Vec<Line<'static>>,
    form: &SettingsFormState,
    index: usize,
    label: &'static str,
    value: &str,
) {
    let editing = form.editing_field == index;
    let label_line = if editing {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };
    lines.push(Line::raw(label_line));

    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));
}
