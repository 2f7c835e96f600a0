//! UI module for rendering the TUI

mod components;
mod fields;
mod layout;
mod progress;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let Some(step) = app.current_step() else {
        return;
    };

    let sections = layout::create_layout(frame.area());
    layout::draw_header(frame, sections.header, app, step);
    progress::draw_gauge(frame, sections.gauge, app);
    fields::draw_step_inputs(frame, sections.body, app, step);
    layout::draw_nav_buttons(frame, sections.buttons, app);
    layout::draw_status_bar(frame, app);
}
