pub mod details_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use details_pane::render_details_pane;
use header::render_header;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{widgets::Block, Frame};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = app.palette();
    let layout = create_layout(size);

    // Paint the whole screen in the theme's background first
    f.render_widget(Block::default().style(palette.default_style()), size);

    render_keybindings(f, layout.keybindings_area, &palette);
    render_header(f, app, layout.header_area);
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);

    if app.form.is_some() {
        render_input_form(f, app, size);
    }
}
