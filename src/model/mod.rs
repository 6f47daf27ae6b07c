//! Data models for listmerge
//!
//! UI-independent data structures: lists as served by the list service,
//! the selection set, merge sessions, and user-facing notifications.

mod list;
mod merge;
mod notification;
mod selection;

pub use list::{List, ListNumber, find_list};
pub use merge::{MergeSession, MoveOutcome, Side};
pub use notification::{Notification, NotificationKind};
pub use selection::{MAX_SELECTED, Selection, ToggleOutcome};
