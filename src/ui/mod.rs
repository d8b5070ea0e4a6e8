pub mod details_pane;
pub mod editor_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use details_pane::render_details_pane;
use editor_form::render_editor_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);

    // Render editor modal if open
    if app.editor.is_some() {
        render_editor_form(f, app, size);
    }
}
