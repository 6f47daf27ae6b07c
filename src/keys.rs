//! Keybinding definitions for listmerge
//!
//! All keybindings are defined here, together with the help entries and
//! status bar hints that describe them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::state::Screen;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refresh)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_force_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit (cancels the merge when one is active)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Close help / cancel merge
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Lists view keys
// =============================================================================

/// Toggle the list under the cursor
pub const TOGGLE_SELECT: KeyCode = KeyCode::Char(' ');

/// Start a merge of the two selected lists
pub const CREATE_LIST: KeyCode = KeyCode::Char('c');

// =============================================================================
// Merge view keys
// =============================================================================

pub const FOCUS_LEFT: KeyCode = KeyCode::Char('h');
pub const FOCUS_LEFT_ARROW: KeyCode = KeyCode::Left;
pub const FOCUS_RIGHT: KeyCode = KeyCode::Char('l');
pub const FOCUS_RIGHT_ARROW: KeyCode = KeyCode::Right;

/// Switch between the two lists
pub const SWITCH_PANE: KeyCode = KeyCode::Tab;

/// Move the highlighted item to the other list
pub const MOVE_ITEM: KeyCode = KeyCode::Enter;

/// Alternative move key
pub const MOVE_ITEM_ALT: KeyCode = KeyCode::Char(' ');

/// Keep the moves and leave the merge
pub const UPDATE: KeyCode = KeyCode::Char('u');

/// Discard the moves and reload
pub const CANCEL: KeyCode = KeyCode::Char('x');

pub fn is_focus_left(code: KeyCode) -> bool {
    matches!(code, FOCUS_LEFT | FOCUS_LEFT_ARROW)
}

pub fn is_focus_right(code: KeyCode) -> bool {
    matches!(code, FOCUS_RIGHT | FOCUS_RIGHT_ARROW)
}

pub fn is_move_item(code: KeyCode) -> bool {
    matches!(code, MOVE_ITEM | MOVE_ITEM_ALT)
}

pub fn is_cancel(code: KeyCode) -> bool {
    matches!(code, CANCEL | ESC)
}

// =============================================================================
// Error view keys
// =============================================================================

/// Retry the failed fetch
pub const RETRY: KeyCode = KeyCode::Char('r');

/// Check if key retries a failed fetch (r or Enter)
pub fn is_retry(code: KeyCode) -> bool {
    matches!(code, RETRY | KeyCode::Enter)
}

// =============================================================================
// Help entries
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Cancel merge",
    },
    KeyBindEntry {
        key: "?",
        description: "Toggle help",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Reload lists",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/↓",
        description: "Move down",
    },
    KeyBindEntry {
        key: "k/↑",
        description: "Move up",
    },
    KeyBindEntry {
        key: "g",
        description: "Go to top",
    },
    KeyBindEntry {
        key: "G",
        description: "Go to bottom",
    },
];

/// Lists view key bindings for help display
pub const LISTS_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Space",
        description: "Select / unselect list (max 2)",
    },
    KeyBindEntry {
        key: "c",
        description: "Create a new list from the 2 selected",
    },
];

/// Merge view key bindings for help display
pub const MERGE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "h/l/Tab",
        description: "Switch list",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Move item to the other list",
    },
    KeyBindEntry {
        key: "u",
        description: "Update (keep moves)",
    },
    KeyBindEntry {
        key: "x/Esc",
        description: "Cancel (discard moves)",
    },
];

/// Error view key bindings for help display
pub const ERROR_KEYS: &[KeyBindEntry] = &[KeyBindEntry {
    key: "r/Enter",
    description: "Try again",
}];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint shown in the status bar
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_SELECT: KeyHint = KeyHint {
    key: "Space",
    label: "Select",
    color: Color::Green,
};
pub const HINT_CREATE: KeyHint = KeyHint {
    key: "c",
    label: "Create a new list",
    color: Color::Yellow,
};
pub const HINT_MOVE: KeyHint = KeyHint {
    key: "Enter",
    label: "Move",
    color: Color::Green,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Switch",
    color: Color::Blue,
};
pub const HINT_UPDATE: KeyHint = KeyHint {
    key: "u",
    label: "Update",
    color: Color::Yellow,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "x",
    label: "Cancel",
    color: Color::Red,
};
pub const HINT_RETRY: KeyHint = KeyHint {
    key: "r",
    label: "Try Again",
    color: Color::Yellow,
};

pub const LOADING_HINTS: &[KeyHint] = &[HINT_HELP, HINT_QUIT];
pub const ERROR_VIEW_HINTS: &[KeyHint] = &[HINT_RETRY, HINT_HELP, HINT_QUIT];
pub const LISTS_VIEW_HINTS: &[KeyHint] = &[HINT_SELECT, HINT_CREATE, HINT_HELP, HINT_QUIT];
pub const MERGE_VIEW_HINTS: &[KeyHint] =
    &[HINT_MOVE, HINT_SWITCH, HINT_UPDATE, HINT_CANCEL, HINT_HELP];

/// Status bar hints for a screen
pub fn current_hints(screen: &Screen) -> &'static [KeyHint] {
    match screen {
        Screen::Loading => LOADING_HINTS,
        Screen::Error(_) => ERROR_VIEW_HINTS,
        Screen::Viewing => LISTS_VIEW_HINTS,
        Screen::Merging(_) => MERGE_VIEW_HINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListNumber, MergeSession};

    #[test]
    fn test_refresh_key_requires_ctrl() {
        assert!(is_refresh_key(&KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_refresh_key(&KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_force_quit_key() {
        assert!(is_force_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_force_quit_key(&KeyEvent::new(
            CREATE_LIST,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_key_groups() {
        assert!(is_move_up(KeyCode::Up) && is_move_up(KeyCode::Char('k')));
        assert!(is_move_down(KeyCode::Down) && is_move_down(KeyCode::Char('j')));
        assert!(is_focus_left(KeyCode::Left) && is_focus_right(KeyCode::Char('l')));
        assert!(is_move_item(KeyCode::Enter) && is_move_item(KeyCode::Char(' ')));
        assert!(is_cancel(KeyCode::Esc) && is_cancel(KeyCode::Char('x')));
        assert!(is_retry(KeyCode::Char('r')) && is_retry(KeyCode::Enter));
    }

    #[test]
    fn test_hints_per_screen() {
        assert_eq!(current_hints(&Screen::Viewing)[1].key, "c");
        assert_eq!(current_hints(&Screen::Error("x".to_string()))[0].key, "r");
        let merging = Screen::Merging(MergeSession::new(ListNumber(1), ListNumber(2)));
        assert!(current_hints(&merging).iter().any(|h| h.key == "u"));
        assert!(current_hints(&Screen::Loading).iter().all(|h| h.key != "c"));
    }
}
