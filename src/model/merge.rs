//! Merge session model
//!
//! A merge session pairs the two selected lists and moves items between
//! them. Moves mutate the list collection in place; nothing is sent to the
//! list service.

use super::{List, ListNumber};

/// Side of the merge a list sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// First selected list
    #[default]
    Left,
    /// Second selected list
    Right,
}

impl Side {
    /// The opposite side
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Result of moving an item between the merged lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Item removed from the source and appended to the target
    Moved,
    /// Source list does not hold the item; nothing changed
    ItemNotFound,
    /// Source and target are not the two lists of this session
    NotInSession,
    /// A session list is missing from the collection
    UnknownList(ListNumber),
}

/// Transient state of an in-progress merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSession {
    left: ListNumber,
    right: ListNumber,
    /// Result accumulator shown as "New List". Moves never write to it.
    new_list: Vec<String>,
}

impl MergeSession {
    /// Start a session over two distinct lists
    pub fn new(left: ListNumber, right: ListNumber) -> Self {
        Self {
            left,
            right,
            new_list: Vec::new(),
        }
    }

    pub fn left(&self) -> ListNumber {
        self.left
    }

    pub fn right(&self) -> ListNumber {
        self.right
    }

    /// List number on the given side
    pub fn list_on(&self, side: Side) -> ListNumber {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Side a list sits on, if it belongs to the session
    pub fn side_of(&self, number: ListNumber) -> Option<Side> {
        if number == self.left {
            Some(Side::Left)
        } else if number == self.right {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn new_list(&self) -> &[String] {
        &self.new_list
    }

    /// Move the first occurrence of `item` from `from` to the end of `to`
    ///
    /// Both lists must be the session's pair. Nothing is modified unless the
    /// outcome is [`MoveOutcome::Moved`].
    pub fn move_item(
        &self,
        lists: &mut [List],
        item: &str,
        from: ListNumber,
        to: ListNumber,
    ) -> MoveOutcome {
        if from == to || self.side_of(from).is_none() || self.side_of(to).is_none() {
            return MoveOutcome::NotInSession;
        }

        let Some(from_idx) = lists.iter().position(|l| l.list_number == from) else {
            return MoveOutcome::UnknownList(from);
        };
        let Some(to_idx) = lists.iter().position(|l| l.list_number == to) else {
            return MoveOutcome::UnknownList(to);
        };

        if !lists[from_idx].remove_first(item) {
            return MoveOutcome::ItemNotFound;
        }
        lists[to_idx].push(item);
        MoveOutcome::Moved
    }
}
