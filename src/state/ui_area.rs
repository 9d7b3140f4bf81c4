//! UI area positioning for mouse event handling
//!
//! This module provides a centralized way to calculate vertical offsets
//! for different UI areas, accounting for the header at the top of the screen.

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// UI area for calculating mouse Y offset
///
/// # Layout
///
/// ```text
/// Row 0-2:  Header (3 rows with borders)
/// Row 3+:   Main content area (form or results page, bordered)
///           - Form fields start one row below the border
/// Bottom:   Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Form fields (starts after header + border)
    FormContent,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::FormContent => HEADER_HEIGHT + 1, // +1 for border
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y()
    }
}
