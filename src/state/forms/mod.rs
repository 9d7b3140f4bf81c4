//! Form domain layer
//!
//! Field constraints, field values and the sample form composed from them.

mod field;
mod form_state;
mod validation;
mod values;

pub use field::FormField;
pub use form_state::{Form, FormButton, SampleForm};
pub use validation::ValidationMode;
pub use values::FormValues;

#[cfg(test)]
pub use field::InputType;
#[cfg(test)]
pub use form_state::BUTTONS_ROW_HEIGHT;
#[cfg(test)]
pub use validation::FieldRules;
