//! Lists View: every list with its items, two of which can be picked

mod input;
mod render;

use crate::model::{List, ListNumber};
use crate::ui::navigation;

/// Action returned by the Lists View after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListsAction {
    /// No action needed
    None,
    /// Toggle the list under the cursor in the selection set
    Toggle(ListNumber),
    /// Start a merge of the selected lists
    CreateNewList,
}

/// Lists View state
///
/// Only the cursor lives here; the lists themselves are owned by
/// `ListsState` and passed in on every call.
#[derive(Debug, Default)]
pub struct ListsView {
    /// Index of the list under the cursor
    selected: usize,
}

impl ListsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor index clamped to the current collection
    pub fn selected_index(&self, lists: &[List]) -> usize {
        navigation::clamp(self.selected, lists.len())
    }

    /// List under the cursor
    pub fn selected_list<'a>(&self, lists: &'a [List]) -> Option<&'a List> {
        lists.get(self.selected_index(lists))
    }

    pub fn select_next(&mut self, lists: &[List]) {
        self.selected = navigation::select_next(self.selected, lists.len());
    }

    pub fn select_prev(&mut self, lists: &[List]) {
        self.selected = navigation::select_prev(self.selected, lists.len());
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, lists: &[List]) {
        self.selected = navigation::last(lists.len());
    }
}
