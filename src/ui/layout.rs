//! Layout components (header, content areas, status bar)

use crate::app::App;
use crate::platform::{PASSWORD_TOGGLE_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{View, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the inline submission panel next to the form
pub const BANNER_WIDTH: u16 = 44;

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),     // Header
            Constraint::Min(0),                    // Main content
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split the main area into the form and, when present, the inline submission panel
pub fn form_areas(main: Rect, has_banner: bool) -> (Rect, Option<Rect>) {
    if !has_banner {
        return (main, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),              // Form
            Constraint::Length(BANNER_WIDTH), // Submission panel
        ])
        .split(main);
    (chunks[0], Some(chunks[1]))
}

/// Rect the form fields are drawn into for a terminal of the given size
pub fn form_content_area(terminal: Rect, has_banner: bool) -> Rect {
    let (_, main, _) = create_layout(terminal);
    let (form, _) = form_areas(main, has_banner);
    form.inner(Margin::new(1, 1))
}

/// Draw the header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "Form Input",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  reusable inputs with inline validation",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Validation mode
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("validate {} (F2)", app.state.form.mode.label()),
        Style::default().fg(Color::Blue),
    ));

    // Status message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Form => format!(
            "Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  {PASSWORD_TOGGLE_SHORTCUT}:show password"
        ),
        View::Submission => "Esc:back  y:copy  j/k:scroll".to_string(),
    }
}
