//! List model
//!
//! A list as served by the list service: a numeric key plus ordered items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a list (`list_number` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListNumber(pub u64);

impl fmt::Display for ListNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ListNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A named, ordered collection of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Unique key of the list
    pub list_number: ListNumber,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<String>,
}

impl List {
    /// Create a list from a number and items
    pub fn new<I, S>(list_number: u64, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list_number: ListNumber(list_number),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Display title ("List 3")
    pub fn title(&self) -> String {
        format!("List {}", self.list_number)
    }

    /// Remove the first occurrence of `item`
    ///
    /// Returns `false` if the item was not present.
    pub fn remove_first(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Append an item at the end
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

/// Find a list by number
pub fn find_list(lists: &[List], number: ListNumber) -> Option<&List> {
    lists.iter().find(|l| l.list_number == number)
}
