//! Application state and core logic

use crate::clipboard::{ClipboardProvider, SystemClipboard};
use crate::config::TuiConfig;
use crate::platform::{is_shortcut, ACTION_MODIFIER};
use crate::state::{AppState, Form, FormButton, SampleForm, UiArea, View};
use crate::ui::layout::form_content_area;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C press
const DOUBLE_TAP_QUIT: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Where configuration changes are saved (`None` disables saving)
    config_path: Option<PathBuf>,
    /// Clipboard used to copy submitted data
    clipboard: Box<dyn ClipboardProvider>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App using the system clipboard
    pub fn new(config: TuiConfig) -> Self {
        Self::with_clipboard(config, TuiConfig::config_path(), Box::new(SystemClipboard))
    }

    /// Create a new App with an explicit config path and clipboard
    pub fn with_clipboard(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        let mut state = AppState::new(config.validation_mode());
        state.form.password.show_password = !config.mask_passwords();

        Self {
            state,
            config,
            config_path,
            clipboard,
            quit: false,
            status_message: None,
            terminal_size: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Global quit: Ctrl+C twice, or Ctrl+Q
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::F(2) {
            self.cycle_validation_mode();
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Submission => self.handle_submission_key(key),
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        let is_double_tap = self
            .last_ctrl_c
            .is_some_and(|t| now.duration_since(t) < DOUBLE_TAP_QUIT);
        if is_double_tap {
            self.quit = true;
        } else {
            self.last_ctrl_c = Some(now);
            self.status_message = Some("Press Ctrl+C again to quit".to_string());
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_buttons = self.state.form.is_buttons_row_active();
        let has_modifier = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | ACTION_MODIFIER);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if is_shortcut(&key, 's') => self.submit(),
            KeyCode::Char('r') if is_shortcut(&key, 'r') => self.reset(),
            KeyCode::Char('t') if is_shortcut(&key, 't') => {
                self.state.form.toggle_password_visibility()
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Left/Right choose a button on the buttons row
            KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Right if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => {
                let button = self.state.form.selected_button;
                self.activate_button(button);
            }
            KeyCode::Enter => {
                // Enter in the bio adds a newline, elsewhere it moves on
                if !self.state.form.newline() {
                    self.state.form.next_field();
                }
            }
            KeyCode::Esc => self.state.inline_submission = None,
            KeyCode::Backspace if !on_buttons => self.state.form.backspace(),
            KeyCode::Char(c) if !on_buttons && !has_modifier => self.state.form.input_char(c),
            _ => {}
        }
    }

    fn handle_submission_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.state.back_to_form(),
            KeyCode::Char('y') => self.copy_submission(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            _ => {}
        }
    }

    fn activate_button(&mut self, button: FormButton) {
        match button {
            FormButton::Reset => self.reset(),
            FormButton::Submit => self.submit(),
        }
    }

    /// Submit the form, showing the results page or the inline panel on success
    fn submit(&mut self) {
        match self.state.form.submit() {
            Some(values) => {
                if self.config.show_results_page() {
                    self.state.show_submission(values);
                } else {
                    self.state.show_inline_submission(values);
                }
                self.status_message = Some("Form submitted".to_string());
            }
            None => {
                let count = self.state.form.error_count();
                let noun = if count == 1 { "error" } else { "errors" };
                self.status_message = Some(format!("Fix {count} {noun} before submitting"));
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset_form();
        self.status_message = Some("Form reset".to_string());
    }

    /// Copy the submitted record as JSON to the clipboard
    fn copy_submission(&mut self) {
        let Some(values) = self.state.submitted.as_ref() else {
            return;
        };
        let result = values
            .to_pretty_json()
            .map_err(anyhow::Error::from)
            .and_then(|json| self.clipboard.set_text(&json));
        match result {
            Ok(()) => self.status_message = Some("Copied form data to clipboard".to_string()),
            Err(e) => self.push_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    /// Switch to the next validation mode and remember it in the config file
    fn cycle_validation_mode(&mut self) {
        let mode = self.state.form.mode.next();
        self.state.form.mode = mode;
        self.config.validation_mode = Some(mode);
        tracing::info!(mode = mode.label(), "validation mode changed");

        let saved = match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        };
        match saved {
            Ok(()) => self.status_message = Some(format!("Validating {}", mode.label())),
            Err(e) => self.push_error(format!("Failed to save config: {e}")),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            return Ok(());
        }

        match self.state.current_view {
            View::Form => self.handle_form_mouse(mouse),
            View::Submission => self.handle_scroll_mouse(mouse),
        }
        Ok(())
    }

    /// Rect of the form content for the current terminal size
    fn form_content(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        form_content_area(
            Rect::new(0, 0, width, height),
            self.state.inline_submission.is_some(),
        )
    }

    fn handle_form_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        let content = self.form_content();
        if !UiArea::FormContent.contains_row(mouse.row)
            || !content.contains(Position::new(mouse.column, mouse.row))
        {
            return;
        }

        // Same offset the renderer used for this frame
        let start = self.state.form.scroll_offset(content.height);
        let row = UiArea::FormContent.relative_row(mouse.row);
        let Some(index) = self.state.form.item_at_row(row, start, content.height) else {
            return;
        };

        self.state.form.set_active_field(index);
        if index == SampleForm::BUTTONS_ROW {
            let button = if mouse.column < content.x + content.width / 2 {
                FormButton::Reset
            } else {
                FormButton::Submit
            };
            self.state.form.selected_button = button;
            self.activate_button(button);
        }
    }

    fn handle_scroll_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.scroll_down(),
            _ => {}
        }
    }
}
