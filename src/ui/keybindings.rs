use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" Space start/pause   "),
        Span::raw("r reset   "),
        Span::raw("1/2/3 mode   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Enter toggle   "),
        Span::raw("a add   "),
        Span::raw("x delete   "),
        Span::raw("m motivation   "),
        Span::raw("o settings   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
