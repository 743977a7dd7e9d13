pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod quote_pane;
pub mod settings_form;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use input_form::render_task_form;
use keybindings::render_keybindings;
use layout::create_layout;
use quote_pane::render_quote_pane;
use ratatui::Frame;
use settings_form::render_settings_form;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.tasks_area);
    render_quote_pane(f, app, layout.quote_area);

    // Render the active form on top
    match app.ui_mode {
        UiMode::AddingTask => render_task_form(f, app, size),
        UiMode::EditingSettings => render_settings_form(f, app, size),
        UiMode::Normal => {}
    }
}
