//! Layout components (card, header, navigation buttons, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::schema::{InputKind, Step};
use crate::state::{BUTTON_BACK, BUTTON_FORWARD};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the centered form card
const CARD_WIDTH: u16 = 62;

/// Sections of the form card, top to bottom
pub struct CardSections {
    pub header: Rect,
    pub gauge: Rect,
    pub body: Rect,
    pub buttons: Rect,
}

/// Center the form card and slice it into sections, reserving the bottom
/// line for the status bar
pub fn create_layout(area: Rect) -> CardSections {
    let width = area.width.min(CARD_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let card = Rect {
        x,
        y: area.y + 1,
        width,
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title and step counter
            Constraint::Length(1),             // Progress gauge
            Constraint::Length(1),             // Spacing
            Constraint::Min(1),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Navigation buttons
        ])
        .split(card);

    CardSections {
        header: chunks[0],
        gauge: chunks[1],
        body: chunks[3],
        buttons: chunks[4],
    }
}

/// Draw the step title and the "Step x of y" counter
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, step: &Step) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        step.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let counter = Paragraph::new(Span::styled(
        format!("Step {} of {}", app.wizard.current_order(), app.wizard.max_order()),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(counter, chunks[1]);
}

/// Draw the Previous and Next/Submit buttons
pub fn draw_nav_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(area);

    let input_count = app
        .current_step()
        .map(|s| s.inputs.len())
        .unwrap_or_default();
    let on_buttons = app.wizard.on_buttons_row(input_count);

    // The back button loses its label on the first step, where it is inert
    let back_label = if app.wizard.is_first_step() {
        ""
    } else {
        "← Previous"
    };
    render_button(
        frame,
        chunks[0],
        back_label,
        on_buttons && app.wizard.selected_button() == BUTTON_BACK,
        !app.wizard.is_first_step(),
    );

    let forward_label = if app.wizard.is_last_step() {
        "Submit"
    } else {
        "Next →"
    };
    render_button(
        frame,
        chunks[2],
        forward_label,
        on_buttons && app.wizard.selected_button() == BUTTON_FORWARD,
        true,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}", focus_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus
fn focus_hints(app: &App) -> &'static str {
    let Some(step) = app.current_step() else {
        return "";
    };
    if app.wizard.on_buttons_row(step.inputs.len()) {
        return "←/→:button  Enter:activate  Tab:fields  Esc:back";
    }
    match step.inputs.get(app.wizard.active_input()).map(|i| i.kind) {
        Some(InputKind::Text) => "type to edit  Tab:next field  Esc:back",
        Some(_) => "↑/↓:option  Space:select  Tab:next field  Esc:back",
        None => "",
    }
}
