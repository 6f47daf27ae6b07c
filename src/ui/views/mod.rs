//! View components
//!
//! Each view represents a screen in the application.

mod lists;
mod merge;

pub use lists::{ListsAction, ListsView};
pub use merge::{MergeAction, MergeView};
