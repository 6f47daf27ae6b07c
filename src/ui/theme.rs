//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the lists view
pub mod lists_view {
    use super::*;

    /// List title color
    pub const TITLE: Color = Color::Cyan;
    /// Checked checkbox color
    pub const CHECKED: Color = Color::Green;
    /// Unchecked checkbox color
    pub const UNCHECKED: Color = Color::DarkGray;
    /// Item text color
    pub const ITEM: Color = Color::Reset;
    /// Cursor row background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for the merge view
pub mod merge_view {
    use super::*;

    /// Border of the focused list
    pub const FOCUSED_BORDER: Color = Color::Cyan;
    /// Border of the other panes
    pub const UNFOCUSED_BORDER: Color = Color::DarkGray;
    /// Move arrow color
    pub const ARROW: Color = Color::Yellow;
    /// Cursor row background
    pub const SELECTED_BG: Color = Color::DarkGray;
    /// "New List" pane title
    pub const NEW_LIST: Color = Color::Magenta;
}

/// Colors for loading and error screens
pub mod status_screen {
    use super::*;

    pub const LOADING: Color = Color::Cyan;
    pub const ERROR: Color = Color::Red;
}
