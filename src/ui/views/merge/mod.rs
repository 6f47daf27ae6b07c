//! Merge View: the two picked lists side by side with the new list
//!
//! Items move between the left and right lists one at a time. The cursor
//! of each pane is kept separately so switching focus does not lose place.

mod input;
mod render;

use crate::model::{List, ListNumber, MergeSession, Side, find_list};
use crate::ui::navigation;

/// Action returned by the Merge View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// No action needed
    None,
    /// Move `item` out of the focused list into the other one
    Move {
        item: String,
        from: ListNumber,
        to: ListNumber,
    },
    /// Discard the moves
    Cancel,
    /// Keep the moves
    Update,
}

/// Merge View state
#[derive(Debug, Default)]
pub struct MergeView {
    focus: Side,
    /// Cursor per side, indexed by [`side_index`]
    cursors: [usize; 2],
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl MergeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the left pane with both cursors on top
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus(&self) -> Side {
        self.focus
    }

    pub fn set_focus(&mut self, side: Side) {
        self.focus = side;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Cursor of `side` clamped to `len` items
    pub fn cursor(&self, side: Side, len: usize) -> usize {
        navigation::clamp(self.cursors[side_index(side)], len)
    }

    fn move_cursor(&mut self, len: usize, step: fn(usize, usize) -> usize) {
        let idx = side_index(self.focus);
        self.cursors[idx] = step(self.cursors[idx], len);
    }

    pub fn select_next(&mut self, len: usize) {
        self.move_cursor(len, navigation::select_next);
    }

    pub fn select_prev(&mut self, len: usize) {
        self.move_cursor(len, navigation::select_prev);
    }

    pub fn select_first(&mut self) {
        self.cursors[side_index(self.focus)] = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.cursors[side_index(self.focus)] = navigation::last(len);
    }

    /// Item under the cursor of the focused list
    pub fn selected_item<'a>(&self, session: &MergeSession, lists: &'a [List]) -> Option<&'a str> {
        let list = find_list(lists, session.list_on(self.focus))?;
        list.items
            .get(self.cursor(self.focus, list.items.len()))
            .map(String::as_str)
    }
}
