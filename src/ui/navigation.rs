//! Cursor helpers for list-based views
//!
//! Pure functions over a cursor index and a row count. Views hold the
//! cursor; the data they point into can shrink between key presses (items
//! moved away, lists reloaded), so every read goes through [`clamp`].

/// Clamp a cursor into `0..len` (0 when empty)
pub fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

/// Move the cursor down by one, stopping at the last row
pub fn select_next(selected: usize, len: usize) -> usize {
    clamp(selected.saturating_add(1), len)
}

/// Move the cursor up by one
pub fn select_prev(selected: usize, len: usize) -> usize {
    clamp(selected, len).saturating_sub(1)
}

/// Index of the last row (0 when empty)
pub fn last(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Scroll offset that keeps row `selected` inside a `visible_count` window
///
/// If `visible_count` is 0, returns `scroll_offset` unchanged.
pub fn adjust_scroll(selected: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_count {
        selected - visible_count + 1
    } else {
        scroll_offset
    }
}
