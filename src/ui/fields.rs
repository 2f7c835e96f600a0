//! Field rendering: maps each input's declared type to its widget

use crate::app::App;
use crate::schema::{capitalize, InputKind, Step, StepInput};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to render an input (content plus borders)
fn input_height(input: &StepInput) -> u16 {
    match input.kind {
        InputKind::Text => 3,
        InputKind::SelectCheckbox | InputKind::Checkbox => input.options().len() as u16 + 2,
    }
}

/// Draw every input of the current step
pub fn draw_step_inputs(frame: &mut Frame, area: Rect, app: &App, step: &Step) {
    let mut constraints: Vec<Constraint> = step
        .inputs
        .iter()
        .map(|i| Constraint::Length(input_height(i)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let on_buttons = app.wizard.on_buttons_row(step.inputs.len());
    for (idx, input) in step.inputs.iter().enumerate() {
        let is_active = !on_buttons && app.wizard.active_input() == idx;
        match input.kind {
            InputKind::Text => draw_text_input(frame, chunks[idx], app, input, is_active),
            InputKind::SelectCheckbox | InputKind::Checkbox => {
                draw_option_group(frame, chunks[idx], app, input, is_active)
            }
        }
    }
}

/// Bordered block with the field label, required indicator, and format hint
fn field_block(input: &StepInput, is_active: bool) -> Block<'static> {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {}", input.label()))];
    if input.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    // Affordance hint only; the accepted input is never restricted
    if input.kind == InputKind::Text {
        if let Some(hint) = input.format.map(|f| f.hint()).filter(|h| !h.is_empty()) {
            title.push(Span::styled(
                format!(" ({hint})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    title.push(Span::raw(" "));

    Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Single editable text control bound to the field's value
fn draw_text_input(frame: &mut Frame, area: Rect, app: &App, input: &StepInput, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app
        .values
        .get(&input.key)
        .map(|v| v.as_str())
        .unwrap_or_default();
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value.to_string(), style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(input, is_active)), area);
}

/// Option group: mutually exclusive `(•)` rows for single-select fields,
/// independent `[x]` rows for checkbox fields
fn draw_option_group(frame: &mut Frame, area: Rect, app: &App, input: &StepInput, is_active: bool) {
    let value = app.values.get(&input.key);

    let lines: Vec<Line> = input
        .options()
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let selected = value.is_some_and(|v| v.has_selection(option));
            let marker = match (input.kind, selected) {
                (InputKind::SelectCheckbox, true) => "(•)",
                (InputKind::SelectCheckbox, false) => "( )",
                (_, true) => "[x]",
                (_, false) => "[ ]",
            };

            let under_cursor = is_active && app.wizard.option_cursor() == idx;
            let style = if under_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default()
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(Span::styled(
                format!("{marker} {}", capitalize(option)),
                style,
            ))
        })
        .collect();

    let content = Paragraph::new(lines);
    frame.render_widget(content.block(field_block(input, is_active)), area);
}
