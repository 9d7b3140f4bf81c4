//! Platform-specific configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Password visibility shortcut display
pub const PASSWORD_TOGGLE_SHORTCUT: &str = "Ctrl+T";

/// Whether `key` is `c` pressed with Ctrl or the platform action modifier
pub fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c)
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(ACTION_MODIFIER))
}
