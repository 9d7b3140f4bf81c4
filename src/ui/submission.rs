//! Results page for a submitted form

use crate::app::App;
use crate::state::FormValues;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Fields listed on the Personal Information card
const PERSONAL_FIELDS: [(&str, &str); 3] = [("fullName", "Full Name"), ("age", "Age"), ("bio", "Bio")];

/// Fields listed on the Contact Information card
const CONTACT_FIELDS: [(&str, &str); 3] =
    [("email", "Email"), ("phone", "Phone"), ("website", "Website")];

/// Draw the results page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    draw_results(
        frame,
        area,
        app.state.submitted.as_ref(),
        app.state.scroll_offset,
    );
}

/// Draw the results page for `values`, scrolling the data dump by `scroll`
pub fn draw_results(frame: &mut Frame, area: Rect, values: Option<&FormValues>, scroll: usize) {
    match values {
        Some(values) => draw_details(frame, area, values, scroll),
        None => draw_empty_state(frame, area),
    }
}

/// Label/value lines for every non-empty field in `fields`
fn card_lines<'a>(values: &'a FormValues, fields: &[(&str, &'a str)]) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (name, label) in fields {
        let Some(value) = values.get(name).filter(|v| !v.is_empty()) else {
            continue;
        };
        lines.push(Line::from(Span::styled(
            *label,
            Style::default().fg(Color::DarkGray),
        )));
        for value_line in value.split('\n') {
            lines.push(Line::from(Span::styled(
                value_line,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
    }
    lines
}

fn draw_details(frame: &mut Frame, area: Rect, values: &FormValues, scroll: usize) {
    let block = Block::default()
        .title(" Form Submission Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let personal = card_lines(values, &PERSONAL_FIELDS);
    let contact = card_lines(values, &CONTACT_FIELDS);
    let card_height = personal.len().max(contact.len()).max(1) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),           // Success banner
            Constraint::Length(card_height), // Cards
            Constraint::Min(3),              // Raw data
            Constraint::Length(1),           // Help text
        ])
        .split(inner);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "✓ Submission Successful!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Thank you for submitting the form. Here's a summary of your information:",
            Style::default().fg(Color::Blue),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(banner, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_card(frame, cards[0], " Personal Information ", personal);
    draw_card(frame, cards[1], " Contact Information ", contact);

    let json = values
        .to_pretty_json()
        .unwrap_or_else(|e| format!("<unable to render form data: {e}>"));
    let dump = Paragraph::new(json)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title(" Complete Form Data ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(dump, chunks[2]);

    frame.render_widget(back_hint(), chunks[3]);
}

fn draw_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    frame.render_widget(card, area);
}

fn back_hint() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": ← Back to Form  "),
        Span::styled("y", Style::default().fg(Color::Cyan)),
        Span::raw(": copy data"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
}

/// Draw the page when there is no submitted data
fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "No Form Data Available",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("There is no submitted form data to display."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": ← Back to Form"),
        ]),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
