//! Animated step progress gauge

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Gauge,
    Frame,
};

/// Draw the progress gauge at the currently displayed (eased) ratio
pub fn draw_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let ratio = app.progress.current().clamp(0.0, 1.0) as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, area);
}
