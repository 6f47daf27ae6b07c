//! Selection set model
//!
//! Holds the lists chosen for merging. At most [`MAX_SELECTED`] members,
//! kept in the order they were picked: the first member is the left-hand
//! list of a merge, the second the right-hand one.

use super::ListNumber;

/// Number of lists a merge needs
pub const MAX_SELECTED: usize = 2;

/// Result of toggling a list in the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The list was added
    Added,
    /// The list was already selected and has been removed
    Removed,
    /// The selection is full; nothing changed
    Full,
}

/// Up-to-two list numbers chosen for merging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    members: Vec<ListNumber>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the list if absent (and there is room), remove it if present
    pub fn toggle(&mut self, number: ListNumber) -> ToggleOutcome {
        if let Some(idx) = self.members.iter().position(|n| *n == number) {
            self.members.remove(idx);
            ToggleOutcome::Removed
        } else if self.members.len() < MAX_SELECTED {
            self.members.push(number);
            ToggleOutcome::Added
        } else {
            ToggleOutcome::Full
        }
    }

    pub fn contains(&self, number: ListNumber) -> bool {
        self.members.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Selected lists in pick order
    pub fn members(&self) -> &[ListNumber] {
        &self.members
    }

    /// The two selected lists, if exactly two are selected
    pub fn pair(&self) -> Option<(ListNumber, ListNumber)> {
        match self.members.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Drop members that fail the predicate (e.g. lists gone after a reload)
    pub fn retain(&mut self, mut keep: impl FnMut(ListNumber) -> bool) {
        self.members.retain(|n| keep(*n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = Selection::new();
        assert_eq!(sel.toggle(ListNumber(1)), ToggleOutcome::Added);
        assert!(sel.contains(ListNumber(1)));
        assert_eq!(sel.toggle(ListNumber(1)), ToggleOutcome::Removed);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_third_member_is_noop() {
        let mut sel = Selection::new();
        sel.toggle(ListNumber(1));
        sel.toggle(ListNumber(2));
        assert_eq!(sel.toggle(ListNumber(3)), ToggleOutcome::Full);
        assert_eq!(sel.members(), &[ListNumber(1), ListNumber(2)]);
    }

    #[test]
    fn test_remove_when_full() {
        let mut sel = Selection::new();
        sel.toggle(ListNumber(1));
        sel.toggle(ListNumber(2));
        assert_eq!(sel.toggle(ListNumber(1)), ToggleOutcome::Removed);
        assert_eq!(sel.members(), &[ListNumber(2)]);
    }

    #[test]
    fn test_pair_requires_exactly_two() {
        let mut sel = Selection::new();
        assert!(sel.pair().is_none());
        sel.toggle(ListNumber(4));
        assert!(sel.pair().is_none());
        sel.toggle(ListNumber(2));
        assert_eq!(sel.pair(), Some((ListNumber(4), ListNumber(2))));
    }

    #[test]
    fn test_retain() {
        let mut sel = Selection::new();
        sel.toggle(ListNumber(1));
        sel.toggle(ListNumber(2));
        sel.retain(|n| n != ListNumber(1));
        assert_eq!(sel.members(), &[ListNumber(2)]);
    }
}
