//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;
mod submission;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Form => forms::draw(frame, main_area, app),
        View::Submission => submission::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlay (modal)
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.pending_errors());
    }
}
