//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field: bordered input, then error or helper text, then
/// the strength strip for password fields
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    show_helper: bool,
) {
    let strip_rows = if field.is_password() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),             // Input
            Constraint::Length(1),          // Error or helper text
            Constraint::Length(strip_rows), // Strength strip
        ])
        .split(area);

    draw_input(frame, chunks[0], field, is_active);
    draw_message(frame, chunks[1], field, show_helper);
    if field.shows_strength() {
        draw_strength(frame, chunks[2], field);
    }
}

fn border_color(field: &FormField, is_active: bool) -> Color {
    if field.has_error() {
        Color::Red
    } else if field.disabled {
        Color::DarkGray
    } else if is_active {
        Color::Cyan
    } else {
        Color::Gray
    }
}

/// Title line: label plus a red asterisk for required fields
fn title_line(field: &FormField) -> Line<'_> {
    let mut spans = vec![Span::raw(" "), Span::raw(field.display_label())];
    if field.is_required() {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn draw_input(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = border_color(field, is_active);
    let mut block = Block::default()
        .title(title_line(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    if field.is_password() {
        let toggle = if field.show_password { " hide " } else { " show " };
        block = block.title(Line::from(toggle).right_aligned());
    }
    if field.read_only {
        block = block.title(Line::from(" read-only ").right_aligned());
    }

    let value_style = if field.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let display_value = field.display_value();
    let content = if display_value.is_empty() {
        let placeholder = Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        Paragraph::new(Line::from(vec![cursor, placeholder]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            cursor,
        ]))
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn draw_message(frame: &mut Frame, area: Rect, field: &FormField, show_helper: bool) {
    let line = match &field.error {
        Some(error) => Line::from(Span::styled(
            format!(" ⚠ {error}"),
            Style::default().fg(Color::Red),
        )),
        None if show_helper && !field.helper_text.is_empty() => Line::from(Span::styled(
            format!(" {}", field.helper_text),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_strength(frame: &mut Frame, area: Rect, field: &FormField) {
    let segments = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .horizontal_margin(1)
        .spacing(1)
        .split(area);

    for (lit, segment) in field.strength_segments().into_iter().zip(segments.iter()) {
        let color = if lit { Color::Green } else { Color::DarkGray };
        let bar = "━".repeat(segment.width as usize);
        frame.render_widget(
            Paragraph::new(bar).style(Style::default().fg(color)),
            *segment,
        );
    }
}
