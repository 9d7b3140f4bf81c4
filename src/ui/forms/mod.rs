//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `sample_form`: The sample form, its buttons and the inline submission panel

mod field_renderer;
mod sample_form;

pub use sample_form::draw;
