//! Application state definitions

use super::forms::{FormValues, SampleForm, ValidationMode};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Submission,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form
    pub form: SampleForm,
    /// Snapshot handed to the results page
    pub submitted: Option<FormValues>,
    /// Snapshot shown inline under the form when the results page is disabled
    pub inline_submission: Option<FormValues>,

    // UI state
    pub scroll_offset: usize,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            form: SampleForm::new(mode),
            ..Default::default()
        }
    }

    /// Show the results page for a submitted snapshot
    pub fn show_submission(&mut self, values: FormValues) {
        self.submitted = Some(values);
        self.scroll_offset = 0;
        self.current_view = View::Submission;
    }

    /// Keep the form on screen and show the snapshot inline
    pub fn show_inline_submission(&mut self, values: FormValues) {
        self.inline_submission = Some(values);
    }

    /// Clear the form to defaults and hide any submission output
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.submitted = None;
        self.inline_submission = None;
        self.scroll_offset = 0;
        self.current_view = View::Form;
    }

    /// Leave the results page. The submitted record is discarded.
    pub fn back_to_form(&mut self) {
        self.reset_form();
    }

    /// Scroll down, stopping at the last line of the data dump
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll() {
            self.scroll_offset += 1;
        }
    }

    /// Highest offset that still shows a line of the submitted data dump
    fn max_scroll(&self) -> usize {
        self.submitted
            .as_ref()
            .and_then(|values| values.to_pretty_json().ok())
            .map_or(0, |json| json.lines().count().saturating_sub(1))
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Number of queued errors including the one on screen
    pub fn pending_errors(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> FormValues {
        FormValues {
            full_name: "Alice Smith".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_view_is_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(state.submitted.is_none());
        assert!(!state.has_errors());
    }

    #[test]
    fn test_new_applies_mode() {
        let state = AppState::new(ValidationMode::OnSubmit);
        assert_eq!(state.form.mode, ValidationMode::OnSubmit);
    }

    #[test]
    fn test_show_submission_switches_view() {
        let mut state = AppState::default();
        state.scroll_offset = 4;
        state.show_submission(values());
        assert_eq!(state.current_view, View::Submission);
        assert_eq!(state.submitted, Some(values()));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_back_to_form_discards_record() {
        let mut state = AppState::default();
        state.form.full_name.value = "Alice Smith".to_string();
        state.show_submission(values());
        state.back_to_form();
        assert_eq!(state.current_view, View::Form);
        assert!(state.submitted.is_none());
        assert_eq!(state.form.values(), FormValues::default());
    }

    #[test]
    fn test_reset_hides_inline_submission() {
        let mut state = AppState::default();
        state.show_inline_submission(values());
        state.reset_form();
        assert!(state.inline_submission.is_none());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        assert_eq!(state.pending_errors(), 2);
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        state.show_submission(values());
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 2);
    }

    #[test]
    fn test_scroll_stops_at_last_dump_line() {
        let mut state = AppState::default();
        state.show_submission(values());
        // "{", seven fields, "}"
        for _ in 0..50 {
            state.scroll_down();
        }
        assert_eq!(state.scroll_offset, 8);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 7);
    }

    #[test]
    fn test_scroll_without_submission_stays_at_top() {
        let mut state = AppState::default();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 0);
    }
}
