//! Form state management and the sample form

use super::field::{FormField, InputType};
use super::validation::{FieldRules, ValidationMode, ValidationTrigger};
use super::values::FormValues;
use regex::Regex;
use std::sync::LazyLock;

/// Rows taken by the buttons row
pub const BUTTONS_ROW_HEIGHT: u16 = 3;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("EMAIL_PATTERN failed")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{3}\)\s[0-9]{3}-[0-9]{4}$").expect("PHONE_PATTERN failed")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("URL_PATTERN failed")
});

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons at the bottom of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Reset,
    #[default]
    Submit,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Reset, FormButton::Submit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Submit => "Submit",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Reset => Self::Submit,
            Self::Submit => Self::Reset,
        };
    }
}

/// Password must mix uppercase, digits and a special character
fn validate_password(value: &str) -> Result<(), String> {
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number".to_string());
    }
    if !value.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err("Password must contain at least one special character".to_string());
    }
    Ok(())
}

/// Age must parse to an integer in 18..=120
fn validate_age(value: &str) -> Result<(), String> {
    match parse_leading_int(value) {
        Some(age) if (18..=120).contains(&age) => Ok(()),
        Some(age) if age > 120 => Err("Please enter a valid age".to_string()),
        _ => Err("You must be at least 18 years old".to_string()),
    }
}

/// Parse the integer prefix of `value`: leading whitespace, an optional sign,
/// then digits up to the first non-digit. `None` when there are no digits.
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

// Sample Form
#[derive(Debug, Clone)]
pub struct SampleForm {
    pub full_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub age: FormField,
    pub phone: FormField,
    pub website: FormField,
    pub bio: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
    /// Number of submit attempts since the last reset
    pub submit_count: u32,
    pub mode: ValidationMode,
}

impl SampleForm {
    /// Index of the buttons row (after the last field)
    pub const BUTTONS_ROW: usize = 7;

    pub fn new(mode: ValidationMode) -> Self {
        Self {
            full_name: FormField::new("fullName", "Full Name", InputType::Text)
                .with_placeholder("Enter your full name")
                .with_rules(FieldRules::required().min_length(3).max_length(50))
                .with_helper_text("Enter your legal full name"),
            email: FormField::new("email", "Email Address", InputType::Email)
                .with_placeholder("your.email@example.com")
                .with_rules(
                    FieldRules::required()
                        .pattern(EMAIL_PATTERN.clone(), "Please enter a valid email address"),
                )
                .with_helper_text("We'll never share your email"),
            password: FormField::new("password", "Password", InputType::Password)
                .with_placeholder("Create a password")
                .with_rules(
                    FieldRules::required()
                        .min_length(8)
                        .validate(validate_password),
                )
                .with_helper_text(
                    "Must contain at least 8 characters, including uppercase, number, and special character",
                ),
            age: FormField::new("age", "Age", InputType::Number)
                .with_placeholder("Enter your age")
                .with_rules(FieldRules::required().validate(validate_age))
                .with_helper_text("Must be at least 18 years old"),
            phone: FormField::new("phone", "Phone Number", InputType::Tel)
                .with_placeholder("(123) 456-7890")
                .with_rules(
                    FieldRules::default()
                        .pattern(PHONE_PATTERN.clone(), "Phone format: (123) 456-7890"),
                )
                .with_helper_text("Format: (123) 456-7890"),
            website: FormField::new("website", "Website", InputType::Url)
                .with_placeholder("https://example.com")
                .with_rules(FieldRules::default().pattern(
                    URL_PATTERN.clone(),
                    "Please enter a valid URL (e.g., https://example.com)",
                ))
                .with_helper_text("Optional: Enter your website URL"),
            bio: FormField::new("bio", "Bio", InputType::TextArea)
                .with_placeholder("Tell us about yourself...")
                .with_helper_text("Optional: Share a brief description about yourself"),
            active_field_index: 0,
            selected_button: FormButton::default(),
            submit_count: 0,
            mode,
        }
    }

    /// All fields in tab order
    pub fn fields(&self) -> [&FormField; 7] {
        [
            &self.full_name,
            &self.email,
            &self.password,
            &self.age,
            &self.phone,
            &self.website,
            &self.bio,
        ]
    }

    fn fields_mut(&mut self) -> [&mut FormField; 7] {
        [
            &mut self.full_name,
            &mut self.email,
            &mut self.password,
            &mut self.age,
            &mut self.phone,
            &mut self.website,
            &mut self.bio,
        ]
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields_mut().into_iter().nth(index)
    }

    /// Whether a submit has been attempted since the last reset
    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    pub fn next_button(&mut self) {
        self.selected_button.toggle();
    }

    pub fn prev_button(&mut self) {
        self.selected_button.toggle();
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        let (mode, submitted) = (self.mode, self.is_submitted());
        if let Some(field) = self.get_active_field_mut() {
            if field.push_char(c) {
                field.validate_for(ValidationTrigger::Change, mode, submitted);
            }
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        let (mode, submitted) = (self.mode, self.is_submitted());
        if let Some(field) = self.get_active_field_mut() {
            if field.pop_char() {
                field.validate_for(ValidationTrigger::Change, mode, submitted);
            }
        }
    }

    /// Insert a line break in the active field. Returns false for single-line fields.
    pub fn newline(&mut self) -> bool {
        let (mode, submitted) = (self.mode, self.is_submitted());
        let Some(field) = self.get_active_field_mut() else {
            return false;
        };
        if !field.push_newline() {
            return false;
        }
        field.validate_for(ValidationTrigger::Change, mode, submitted);
        true
    }

    /// Toggle visibility of the active field if it is a password
    pub fn toggle_password_visibility(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.toggle_password_visibility();
        }
    }

    /// Snapshot of the current values
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for field in self.fields() {
            values.set(&field.name, field.value.clone());
        }
        values
    }

    /// Validate every field. Returns the snapshot when all pass; otherwise
    /// focuses the first failing field and returns `None`.
    pub fn submit(&mut self) -> Option<FormValues> {
        self.submit_count += 1;

        for field in self.fields_mut() {
            // Errors are stored on the field
            let _ = field.validate();
        }

        if let Some(index) = self.first_error_index() {
            tracing::info!(
                errors = self.error_count(),
                field = %self.fields()[index].name,
                "submission blocked by validation"
            );
            self.active_field_index = index;
            return None;
        }

        let values = self.values();
        tracing::info!(
            filled = values.entries().filter(|(_, v)| !v.is_empty()).count(),
            "form submitted"
        );
        Some(values)
    }

    /// Restore every field to its default and forget submit attempts
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.reset();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
        self.submit_count = 0;
        tracing::info!("form reset");
    }

    pub fn first_error_index(&self) -> Option<usize> {
        self.fields().iter().position(|f| f.has_error())
    }

    pub fn error_count(&self) -> usize {
        self.fields().iter().filter(|f| f.has_error()).count()
    }

    /// Heights of every row item (fields then the buttons row)
    pub fn item_heights(&self) -> Vec<u16> {
        let mut heights: Vec<u16> = self.fields().iter().map(|f| f.height()).collect();
        heights.push(BUTTONS_ROW_HEIGHT);
        heights
    }

    /// Index of the first item to draw so the active item fits in `available` rows
    pub fn scroll_offset(&self, available: u16) -> usize {
        let heights = self.item_heights();
        let active = self.active_field_index.min(heights.len() - 1);
        let mut start = 0;
        while start < active && heights[start..=active].iter().sum::<u16>() > available {
            start += 1;
        }
        start
    }

    /// Item under `row` (relative to the top of the form content) when drawing
    /// from `start` into `available` rows. Items cut off at the bottom are not drawn
    /// and never match.
    pub fn item_at_row(&self, row: u16, start: usize, available: u16) -> Option<usize> {
        let mut top = 0u16;
        for (index, height) in self.item_heights().into_iter().enumerate().skip(start) {
            if top + height > available {
                return None;
            }
            if row >= top && row < top + height {
                return Some(index);
            }
            top += height;
        }
        None
    }
}

impl Default for SampleForm {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl Form for SampleForm {
    fn field_count(&self) -> usize {
        8 // seven fields, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Moving focus away from a field blurs it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(Self::BUTTONS_ROW);
        if index == self.active_field_index {
            return;
        }
        let (mode, submitted) = (self.mode, self.is_submitted());
        let previous = self.active_field_index;
        if let Some(field) = self.field_mut(previous) {
            field.blur(mode, submitted);
        }
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.field_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        // Index 7 is the buttons row, no FormField for it
        self.fields().into_iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut SampleForm, index: usize, text: &str) {
        form.set_active_field(index);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn fill_valid(form: &mut SampleForm) {
        type_into(form, 0, "Alice Smith");
        type_into(form, 1, "a@b.com");
        type_into(form, 2, "Abcdef1!");
        type_into(form, 3, "25");
    }

    fn error_of(field: &FormField) -> Option<String> {
        field.error.as_ref().map(|e| e.to_string())
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SampleForm::default();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, FormButton::Submit);
            assert_eq!(form.submit_count, 0);
            assert_eq!(form.mode, ValidationMode::OnBlur);
            assert!(form.fields().iter().all(|f| f.value.is_empty()));
        }

        #[test]
        fn test_field_count() {
            let form = SampleForm::default();
            assert_eq!(form.field_count(), 8);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SampleForm::default();
            for _ in 0..8 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = SampleForm::default();
            form.prev_field();
            assert_eq!(form.active_field_index, SampleForm::BUTTONS_ROW);
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SampleForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SampleForm::BUTTONS_ROW);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SampleForm::default();
            let names: Vec<_> = (0..7)
                .map(|i| form.get_field(i).unwrap().name.clone())
                .collect();
            assert_eq!(
                names,
                vec!["fullName", "email", "password", "age", "phone", "website", "bio"]
            );
            assert!(form.get_field(7).is_none());
        }

        #[test]
        fn test_buttons_toggle() {
            let mut form = SampleForm::default();
            form.next_button();
            assert_eq!(form.selected_button, FormButton::Reset);
            form.prev_button();
            assert_eq!(form.selected_button, FormButton::Submit);
        }

        #[test]
        fn test_input_ignored_on_buttons_row() {
            let mut form = SampleForm::default();
            form.set_active_field(SampleForm::BUTTONS_ROW);
            form.input_char('x');
            assert!(form.fields().iter().all(|f| f.value.is_empty()));
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_keystroke_updates_exactly_one_field() {
            let mut form = SampleForm::default();
            type_into(&mut form, 4, "(");
            let values = form.values();
            assert_eq!(values.phone, "(");
            assert_eq!(values.entries().filter(|(_, v)| !v.is_empty()).count(), 1);
        }

        #[test]
        fn test_backspace() {
            let mut form = SampleForm::default();
            type_into(&mut form, 0, "Bob");
            form.backspace();
            assert_eq!(form.full_name.value, "Bo");
        }

        #[test]
        fn test_newline_only_in_bio() {
            let mut form = SampleForm::default();
            assert!(!form.newline());
            type_into(&mut form, 6, "Hi");
            assert!(form.newline());
            assert_eq!(form.bio.value, "Hi\n");
        }

        #[test]
        fn test_toggle_password_visibility_on_active_field() {
            let mut form = SampleForm::default();
            form.set_active_field(2);
            form.toggle_password_visibility();
            assert!(form.password.show_password);
        }
    }

    mod blur_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_name_error_on_blur() {
            let mut form = SampleForm::default();
            type_into(&mut form, 0, "Al");
            assert!(form.full_name.error.is_none());
            form.next_field();
            assert_eq!(
                error_of(&form.full_name),
                Some("Full Name must be at least 3 characters".to_string())
            );
            assert!(form.full_name.touched);
        }

        #[test]
        fn test_error_stays_while_typing_before_submit() {
            let mut form = SampleForm::default();
            type_into(&mut form, 0, "Al");
            form.next_field();
            type_into(&mut form, 0, "ice");
            assert!(form.full_name.error.is_some());
            form.next_field();
            assert!(form.full_name.error.is_none());
        }

        #[test]
        fn test_on_change_mode_validates_each_keystroke() {
            let mut form = SampleForm::new(ValidationMode::OnChange);
            type_into(&mut form, 0, "A");
            assert!(form.full_name.error.is_some());
            form.input_char('l');
            form.input_char('i');
            assert!(form.full_name.error.is_none());
        }

        #[test]
        fn test_revalidates_on_change_after_submit() {
            let mut form = SampleForm::default();
            assert!(form.submit().is_none());
            assert_eq!(form.active_field_index, 0);
            form.input_char('A');
            assert_eq!(
                error_of(&form.full_name),
                Some("Full Name must be at least 3 characters".to_string())
            );
            form.input_char('n');
            form.input_char('n');
            assert!(form.full_name.error.is_none());
        }
    }

    mod sample_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        fn check(form: &mut SampleForm, index: usize, value: &str) -> Option<String> {
            let field = form.field_mut(index).unwrap();
            field.value = value.to_string();
            field.validate().err().map(|e| e.to_string())
        }

        #[test]
        fn test_full_name_rules() {
            let mut form = SampleForm::default();
            assert_eq!(check(&mut form, 0, ""), Some("Full Name is required".to_string()));
            assert_eq!(
                check(&mut form, 0, &"x".repeat(51)),
                Some("Full Name must not exceed 50 characters".to_string())
            );
            assert_eq!(check(&mut form, 0, "Alice Smith"), None);
        }

        #[test]
        fn test_email_rules() {
            let mut form = SampleForm::default();
            assert_eq!(
                check(&mut form, 1, ""),
                Some("Email Address is required".to_string())
            );
            assert_eq!(
                check(&mut form, 1, "not-an-email"),
                Some("Please enter a valid email address".to_string())
            );
            assert_eq!(check(&mut form, 1, "a@b.co"), None);
        }

        #[test]
        fn test_password_rules_in_order() {
            let mut form = SampleForm::default();
            assert_eq!(
                check(&mut form, 2, "Abc1!"),
                Some("Password must be at least 8 characters".to_string())
            );
            assert_eq!(
                check(&mut form, 2, "abcdefg1!"),
                Some("Password must contain at least one uppercase letter".to_string())
            );
            assert_eq!(
                check(&mut form, 2, "Abcdefgh!"),
                Some("Password must contain at least one number".to_string())
            );
            assert_eq!(
                check(&mut form, 2, "Abcdefg1"),
                Some("Password must contain at least one special character".to_string())
            );
            assert_eq!(check(&mut form, 2, "Abcdef1!"), None);
        }

        #[test]
        fn test_age_rules() {
            let mut form = SampleForm::default();
            assert_eq!(check(&mut form, 3, ""), Some("Age is required".to_string()));
            assert_eq!(
                check(&mut form, 3, "17"),
                Some("You must be at least 18 years old".to_string())
            );
            // A lone sign is not a number, so it counts as empty
            assert_eq!(check(&mut form, 3, "-"), Some("Age is required".to_string()));
            assert_eq!(check(&mut form, 3, "e"), Some("Age is required".to_string()));
            assert_eq!(
                check(&mut form, 3, "121"),
                Some("Please enter a valid age".to_string())
            );
            assert_eq!(check(&mut form, 3, "18"), None);
            assert_eq!(check(&mut form, 3, "120"), None);
            assert_eq!(check(&mut form, 3, "25.9"), None);
        }

        #[test]
        fn test_phone_is_optional_but_formatted() {
            let mut form = SampleForm::default();
            assert_eq!(check(&mut form, 4, ""), None);
            assert_eq!(check(&mut form, 4, "(123) 456-7890"), None);
            assert_eq!(
                check(&mut form, 4, "123-456-7890"),
                Some("Phone format: (123) 456-7890".to_string())
            );
        }

        #[test]
        fn test_website_is_optional_but_a_url() {
            let mut form = SampleForm::default();
            assert_eq!(check(&mut form, 5, ""), None);
            assert_eq!(check(&mut form, 5, "https://example.com"), None);
            assert_eq!(check(&mut form, 5, "http://www.example.org/path?q=1"), None);
            assert_eq!(
                check(&mut form, 5, "example.com"),
                Some("Please enter a valid URL (e.g., https://example.com)".to_string())
            );
        }

        #[test]
        fn test_bio_has_no_rules() {
            let mut form = SampleForm::default();
            assert_eq!(check(&mut form, 6, ""), None);
        }

        #[test]
        fn test_parse_leading_int() {
            assert_eq!(parse_leading_int("  42abc"), Some(42));
            assert_eq!(parse_leading_int("-5"), Some(-5));
            assert_eq!(parse_leading_int("+7"), Some(7));
            assert_eq!(parse_leading_int("abc"), None);
            assert_eq!(parse_leading_int(""), None);
            assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_returns_values_unchanged() {
            let mut form = SampleForm::default();
            fill_valid(&mut form);
            let values = form.submit().expect("form should submit");
            assert_eq!(
                values,
                FormValues {
                    full_name: "Alice Smith".to_string(),
                    email: "a@b.com".to_string(),
                    password: "Abcdef1!".to_string(),
                    age: "25".to_string(),
                    ..Default::default()
                }
            );
            assert_eq!(form.error_count(), 0);
        }

        #[test]
        fn test_invalid_submission_is_blocked() {
            let mut form = SampleForm::default();
            fill_valid(&mut form);
            form.full_name.value = "Al".to_string();
            assert!(form.submit().is_none());
            assert_eq!(
                error_of(&form.full_name),
                Some("Full Name must be at least 3 characters".to_string())
            );
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_submit_focuses_first_failing_field() {
            let mut form = SampleForm::default();
            fill_valid(&mut form);
            form.phone.value = "555".to_string();
            form.website.value = "nope".to_string();
            assert!(form.submit().is_none());
            assert_eq!(form.active_field_index, 4);
            assert_eq!(form.first_error_index(), Some(4));
            assert_eq!(form.error_count(), 2);
        }

        #[test]
        fn test_empty_submit_flags_required_fields() {
            let mut form = SampleForm::default();
            assert!(form.submit().is_none());
            assert_eq!(form.error_count(), 4);
            assert!(form.is_submitted());
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut form = SampleForm::default();
            fill_valid(&mut form);
            form.bio.value = "Hello".to_string();
            let _ = form.submit();
            form.full_name.value.clear();
            let _ = form.submit();
            form.reset();
            assert_eq!(form.values(), FormValues::default());
            assert_eq!(form.error_count(), 0);
            assert!(form.fields().iter().all(|f| !f.touched));
            assert!(!form.is_submitted());
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod geometry {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scroll_offset_zero_when_everything_fits() {
            let form = SampleForm::default();
            assert_eq!(form.scroll_offset(100), 0);
        }

        #[test]
        fn test_scroll_offset_keeps_active_visible() {
            let mut form = SampleForm::default();
            form.active_field_index = SampleForm::BUTTONS_ROW;
            let start = form.scroll_offset(12);
            let heights = form.item_heights();
            let visible: u16 = heights[start..].iter().sum();
            assert!(visible <= 12 || start == SampleForm::BUTTONS_ROW);
            assert!(start > 0);
        }

        #[test]
        fn test_item_at_row() {
            let form = SampleForm::default();
            assert_eq!(form.item_at_row(0, 0, 100), Some(0));
            assert_eq!(form.item_at_row(3, 0, 100), Some(0));
            assert_eq!(form.item_at_row(4, 0, 100), Some(1));
            // fullName 4 + email 4 + password 5
            assert_eq!(form.item_at_row(13, 0, 100), Some(3));
            assert_eq!(form.item_at_row(0, 2, 100), Some(2));
            assert_eq!(form.item_at_row(500, 0, 100), None);
        }

        #[test]
        fn test_item_at_row_skips_items_cut_off() {
            let form = SampleForm::default();
            // Fields take 32 rows; the buttons row (32..35) does not fit in 33
            assert_eq!(form.item_at_row(31, 0, 33), Some(6));
            assert_eq!(form.item_at_row(32, 0, 33), None);
            assert_eq!(form.item_at_row(32, 0, 35), Some(SampleForm::BUTTONS_ROW));
        }
    }
}
