pub mod details_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use details_pane::render_details_pane;
use header::{render_filter_bar, render_header};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_notice_modal, render_subtask_prompt};
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, app, layout.header_area);
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);
    render_timer_pane(f, app, layout.timer_area);
    render_keybindings(f, layout.keybindings_area, app.dark_mode);

    // Overlays, lowest first
    render_input_form(f, app, size);

    if app.ui_mode == UiMode::AddingSubtask {
        render_subtask_prompt(f, app, size);
    }

    if app.ui_mode == UiMode::Notice {
        render_notice_modal(f, app, size);
    }
}
