use crate::app::AppState;
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

/// Render the add-task input form
pub fn render_task_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.task_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw("What do you want to focus on?"));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.text.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Enter to add  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
