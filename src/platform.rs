//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifiers accepted for form shortcuts (send, theme)
/// - macOS: SUPER (Cmd key) or CONTROL, since many terminals swallow Cmd
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIERS: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::CONTROL);

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Send shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const SEND_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SEND_SHORTCUT: &str = "Ctrl+S";

/// Theme toggle shortcut display
#[cfg(target_os = "macos")]
pub const THEME_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const THEME_SHORTCUT: &str = "Ctrl+T";
