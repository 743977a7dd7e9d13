use crate::app::AppState;
use crate::ui::styles::{border_style, hint_style, quote_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the motivation pane: fetch hint, loading indicator, or the quote.
pub fn render_quote_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Motivation ", title_style()));

    let paragraph = if app.quote.loading {
        Paragraph::new("Consulting the AI...").style(hint_style())
    } else if app.quote.text.is_empty() {
        Paragraph::new("Need motivation? Press m — stay productive, take breaks.")
            .style(hint_style())
    } else {
        Paragraph::new(format!("\u{201c}{}\u{201d}", app.quote.text)).style(quote_style())
    };

    f.render_widget(
        paragraph
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
