//! UI symbols (markers, arrows, labels)

use crate::model::Side;

/// Row markers
pub mod markers {
    /// Cursor marker (▶)
    pub const CURSOR: &str = "▶ ";
    /// Blank space where the cursor marker would be
    pub const NO_CURSOR: &str = "  ";
}

/// Checkbox shown next to each list
pub mod checkbox {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
}

/// Move arrows shown next to items in a merge
pub mod arrows {
    /// Item goes to the right-hand list
    pub const TO_RIGHT: &str = "→";
    /// Item goes to the left-hand list
    pub const TO_LEFT: &str = "←";
}

/// Empty state labels
pub mod empty {
    /// List without items
    pub const NO_ITEMS: &str = "(no items)";
    /// Merge accumulator with nothing in it
    pub const NEW_LIST: &str = "(empty)";
}

/// Arrow for items on `side`: it points at the list they move to
pub fn arrow(side: Side) -> &'static str {
    match side {
        Side::Left => arrows::TO_RIGHT,
        Side::Right => arrows::TO_LEFT,
    }
}

/// Checkbox for a list's selection state
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        checkbox::CHECKED
    } else {
        checkbox::UNCHECKED
    }
}
