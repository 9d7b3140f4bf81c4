//! Form field value objects

use super::validation::{FieldError, FieldRules, ValidationMode, ValidationTrigger};

/// Rows taken by a single-line field (bordered input + message line)
pub const FIELD_HEIGHT: u16 = 4;
/// Rows taken by a password field (adds the strength strip)
pub const PASSWORD_FIELD_HEIGHT: u16 = 5;
/// Rows taken by a multi-line field
pub const TEXTAREA_FIELD_HEIGHT: u16 = 7;

/// Kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    TextArea,
}

impl InputType {
    /// Whether a typed character is accepted by this input kind
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputType::Number => c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'),
            InputType::TextArea => !c.is_control() || c == '\n',
            _ => !c.is_control(),
        }
    }

    /// Value the rules see. A number input holding something that is not a
    /// number (a lone sign or exponent) counts as empty.
    pub fn checked_value<'a>(&self, value: &'a str) -> &'a str {
        match self {
            InputType::Number if value.starts_with('+') || value.parse::<f64>().is_err() => "",
            _ => value,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub input_type: InputType,
    pub placeholder: String,
    pub helper_text: String,
    pub rules: FieldRules,
    pub value: String,
    /// Set once focus has left the field
    pub touched: bool,
    /// Current validation error, if any
    pub error: Option<FieldError>,
    pub disabled: bool,
    pub read_only: bool,
    /// Password fields only: render the value in clear text
    pub show_password: bool,
}

impl FormField {
    /// Create a new field with no constraints
    pub fn new(name: &str, label: &str, input_type: InputType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input_type,
            placeholder: String::new(),
            helper_text: String::new(),
            rules: FieldRules::default(),
            value: String::new(),
            touched: false,
            error: None,
            disabled: false,
            read_only: false,
            show_password: false,
        }
    }

    pub fn with_rules(mut self, rules: FieldRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_helper_text(mut self, helper_text: &str) -> Self {
        self.helper_text = helper_text.to_string();
        self
    }

    /// Label used in messages; falls back to the field name
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.input_type == InputType::TextArea
    }

    pub fn is_password(&self) -> bool {
        self.input_type == InputType::Password
    }

    pub fn is_required(&self) -> bool {
        self.rules.required
    }

    pub fn is_editable(&self) -> bool {
        !self.disabled && !self.read_only
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Push a character to the field value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.is_editable() || !self.input_type.accepts(c) {
            return false;
        }
        self.value.push(c);
        true
    }

    /// Insert a line break (multi-line fields only)
    pub fn push_newline(&mut self) -> bool {
        if !self.is_multiline() {
            return false;
        }
        self.push_char('\n')
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.value.pop().is_some()
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Restore the default value and forget touched/error state
    pub fn reset(&mut self) {
        self.clear();
        self.touched = false;
        self.error = None;
    }

    /// Run every rule against the current value and store the outcome
    pub fn validate(&mut self) -> Result<(), FieldError> {
        let value = self.input_type.checked_value(&self.value);
        let result = self.rules.check(self.display_label(), value);
        match &result {
            Ok(()) => tracing::debug!(field = %self.name, "field valid"),
            Err(e) => tracing::debug!(field = %self.name, error = %e, "field invalid"),
        }
        self.error = result.clone().err();
        result
    }

    /// Validate if the mode calls for it on this trigger
    pub fn validate_for(
        &mut self,
        trigger: ValidationTrigger,
        mode: ValidationMode,
        submitted: bool,
    ) {
        if mode.should_validate(trigger, submitted) {
            let _ = self.validate();
        }
    }

    /// Mark the field as left by focus and validate per mode
    pub fn blur(&mut self, mode: ValidationMode, submitted: bool) {
        self.touched = true;
        self.validate_for(ValidationTrigger::Blur, mode, submitted);
    }

    pub fn toggle_password_visibility(&mut self) {
        if self.is_password() {
            self.show_password = !self.show_password;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_password() && !self.show_password {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Whether the strength strip is shown under this field
    pub fn shows_strength(&self) -> bool {
        self.is_password() && self.rules.min_length.is_some() && !self.has_error()
    }

    /// Lit state of the three strength segments
    pub fn strength_segments(&self) -> [bool; 3] {
        [
            self.touched,
            self.touched && self.rules.min_length.is_some(),
            self.touched && self.rules.validate.is_some(),
        ]
    }

    /// Rows the renderer reserves for this field
    pub fn height(&self) -> u16 {
        match self.input_type {
            InputType::TextArea => TEXTAREA_FIELD_HEIGHT,
            InputType::Password => PASSWORD_FIELD_HEIGHT,
            _ => FIELD_HEIGHT,
        }
    }
}
