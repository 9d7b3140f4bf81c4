//! Field constraints and rule evaluation

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Custom predicate attached to a field. `Ok(())` accepts the value,
/// `Err(message)` rejects it with that message.
pub type CustomValidator = fn(&str) -> Result<(), String>;

/// A validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },
    #[error("{label} must not exceed {max} characters")]
    TooLong { label: String, max: usize },
    #[error("{0}")]
    Pattern(String),
    #[error("{0}")]
    Custom(String),
}

/// Regex constraint with an optional message shown on mismatch
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub regex: Regex,
    pub message: Option<String>,
}

impl PatternRule {
    pub fn new(regex: Regex, message: &str) -> Self {
        Self {
            regex,
            message: Some(message.to_string()),
        }
    }
}

/// The set of constraints registered for one field
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<PatternRule>,
    pub validate: Option<CustomValidator>,
}

impl FieldRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, regex: Regex, message: &str) -> Self {
        self.pattern = Some(PatternRule::new(regex, message));
        self
    }

    pub fn validate(mut self, validator: CustomValidator) -> Self {
        self.validate = Some(validator);
        self
    }

    /// Check `value` against every rule in order. The first failing rule wins.
    ///
    /// Length and pattern rules only apply to non-empty values, so an optional
    /// field left blank passes. The custom predicate always runs.
    pub fn check(&self, label: &str, value: &str) -> Result<(), FieldError> {
        let is_empty = value.is_empty();

        if self.required && is_empty {
            return Err(FieldError::Required {
                label: label.to_string(),
            });
        }

        if !is_empty {
            let length = value.chars().count();

            if let Some(min) = self.min_length {
                if length < min {
                    return Err(FieldError::TooShort {
                        label: label.to_string(),
                        min,
                    });
                }
            }

            if let Some(max) = self.max_length {
                if length > max {
                    return Err(FieldError::TooLong {
                        label: label.to_string(),
                        max,
                    });
                }
            }

            if let Some(pattern) = &self.pattern {
                if !pattern.regex.is_match(value) {
                    let message = pattern
                        .message
                        .clone()
                        .unwrap_or_else(|| format!("{label} format is invalid"));
                    return Err(FieldError::Pattern(message));
                }
            }
        }

        if let Some(validate) = self.validate {
            validate(value).map_err(FieldError::Custom)?;
        }

        Ok(())
    }
}

/// What caused a field to be considered for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTrigger {
    /// The field value was edited
    Change,
    /// Focus left the field
    Blur,
}

/// When fields are validated individually (submit always validates everything)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    OnBlur,
    OnChange,
    OnSubmit,
    All,
}

impl ValidationMode {
    /// Whether a field should be validated for `trigger`.
    ///
    /// Once the form has seen a submit attempt, fields re-validate on change.
    pub fn should_validate(self, trigger: ValidationTrigger, submitted: bool) -> bool {
        match (self, submitted) {
            (ValidationMode::All, _) => true,
            (_, true) => trigger == ValidationTrigger::Change,
            (ValidationMode::OnBlur, false) => trigger == ValidationTrigger::Blur,
            (ValidationMode::OnChange, false) => trigger == ValidationTrigger::Change,
            (ValidationMode::OnSubmit, false) => false,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::OnBlur => Self::OnChange,
            Self::OnChange => Self::OnSubmit,
            Self::OnSubmit => Self::All,
            Self::All => Self::OnBlur,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnBlur => "on blur",
            Self::OnChange => "on change",
            Self::OnSubmit => "on submit",
            Self::All => "always",
        }
    }
}
