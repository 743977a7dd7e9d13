use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task checklist pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(" Tasks ({}) ", app.tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.tasks.is_empty() {
        let hint = Paragraph::new("No tasks yet — press a to add one")
            .style(hint_style())
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .as_slice()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_task {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Create a single checklist line: checkbox glyph plus the task text,
/// struck through once completed.
fn create_task_line(task: &Task) -> Line<'static> {
    if task.completed {
        Line::from(vec![
            Span::raw("[✓] "),
            Span::styled(task.text.clone(), done_style()),
        ])
    } else {
        Line::from(vec![Span::raw("[ ] "), Span::raw(task.text.clone())])
    }
}
