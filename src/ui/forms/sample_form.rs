//! Sample form rendering (fields, buttons row, inline submission panel)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, FormButton, FormValues, SampleForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::form_areas;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the sample form and, when present, the inline submission panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let inline = app.state.inline_submission.as_ref();
    let (form_area, banner_area) = form_areas(area, inline.is_some());

    draw_form(frame, form_area, app);

    if let (Some(values), Some(banner_area)) = (inline, banner_area) {
        draw_inline_submission(frame, banner_area, values);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let title = match form.error_count() {
        0 => " Sample Form ".to_string(),
        1 => " Sample Form (1 error) ".to_string(),
        n => format!(" Sample Form ({n} errors) "),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Keep the active item in view
    let start = form.scroll_offset(inner.height);
    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    for index in start..SampleForm::BUTTONS_ROW {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let height = field.height();
        if y + height > bottom {
            return;
        }
        let field_area = Rect::new(inner.x, y, inner.width, height);
        draw_field(
            frame,
            field_area,
            field,
            form.active_field() == index,
            app.config.show_helper_text(),
        );
        y += height;
    }

    if y + BUTTON_HEIGHT <= bottom {
        draw_buttons(frame, Rect::new(inner.x, y, inner.width, BUTTON_HEIGHT), form);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &SampleForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let row_active = form.is_buttons_row_active();
    for (button, chunk) in FormButton::ALL.into_iter().zip(chunks.iter()) {
        let accent = match button {
            FormButton::Reset => Color::Gray,
            FormButton::Submit => Color::Green,
        };
        render_button(
            frame,
            *chunk,
            button.label(),
            row_active && form.selected_button == button,
            accent,
        );
    }
}

/// Inline success panel shown when the results page is disabled
fn draw_inline_submission(frame: &mut Frame, area: Rect, values: &FormValues) {
    let json = values
        .to_pretty_json()
        .unwrap_or_else(|e| format!("<unable to render form data: {e}>"));

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Form Submitted Successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Here's what you submitted:",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
    ];
    lines.extend(json.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            crate::platform::RESET_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": reset form  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": dismiss"),
    ]));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Submitted ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use crate::state::BUTTONS_ROW_HEIGHT;
    use crate::ui::components::BUTTON_HEIGHT;

    #[test]
    fn test_button_height_matches_form_geometry() {
        assert_eq!(BUTTON_HEIGHT, BUTTONS_ROW_HEIGHT);
    }
}
