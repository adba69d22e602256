//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{KeyBinding, actions};

use crate::app::navigation::ActivePage;

actions!(
    archive_gui,
    [
        /// Quit the application
        Quit,
        /// Increment the counter widget
        Increment,
        /// Go to the counter page
        ShowCounter,
        /// Go to the archive page
        ShowArchive,
        /// Go to the welcome page
        ShowWelcome,
    ]
);

/// Keystroke of the increment action
pub const INCREMENT_KEYSTROKE: &str = "secondary-=";

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    let mut display_text = String::new();
    for (i, part) in keystroke.split('-').enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" | "ctrl" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "enter" => "Enter",
            "escape" => "Esc",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new(INCREMENT_KEYSTROKE, Increment, None),
        // Navigation
        KeyBinding::new(ActivePage::Counter.shortcut(), ShowCounter, None),
        KeyBinding::new(ActivePage::Archive.shortcut(), ShowArchive, None),
        KeyBinding::new(ActivePage::Welcome.shortcut(), ShowWelcome, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_keystroke() {
        let label = humanize_keystroke("secondary-2");
        assert!(label.ends_with('2'));
        #[cfg(not(target_os = "macos"))]
        assert_eq!(label, "Ctrl+2");
        #[cfg(target_os = "macos")]
        assert_eq!(label, "⌘2");

        assert!(humanize_keystroke("secondary-q").ends_with('Q'));
    }
}
