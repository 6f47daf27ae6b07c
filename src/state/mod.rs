//! View state machine
//!
//! All state behind the UI lives in [`ListsState`] and changes only through
//! [`ListsState::update`]. The current screen is a tagged union, so loading,
//! error, browsing and merging can never be active at the same time.
//! Side effects are handed back to the caller as [`Command`]s.

mod reducer;

use crate::model::{List, ListNumber, MergeSession, Notification, Selection, find_list};

/// Alert shown when "create" is pressed without exactly two lists
pub const SELECT_TWO_MESSAGE: &str = "You should select exactly 2 lists to create a new list";

/// Title of the alert shown when "create" is pressed without two lists
pub const CREATE_TITLE: &str = "Create New List";

/// Title of the alert shown after a merge is committed
pub const UPDATE_TITLE: &str = "Update Lists";

/// Alert message shown after a merge is committed
pub const UPDATED_MESSAGE: &str = "Lists updated successfully";

/// Screen currently shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// A fetch is in flight
    #[default]
    Loading,
    /// The last fetch failed (reason for display)
    Error(String),
    /// Browsing all lists and picking two
    Viewing,
    /// Moving items between the two picked lists
    Merging(MergeSession),
}

/// Input to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Fetch the list collection (activation, retry, cancel)
    Reload,
    /// Manual reload from the lists screen; reports the count when it lands
    Refresh,
    /// Fetch completed with the full collection
    FetchSucceeded(Vec<List>),
    /// Fetch failed
    FetchFailed(String),
    /// Toggle a list in the selection set
    ToggleSelection(ListNumber),
    /// Enter a merge session over the selected pair
    CreateNewList,
    /// Move one item between the merged lists
    MoveItem {
        item: String,
        from: ListNumber,
        to: ListNumber,
    },
    /// Drop local moves and reload
    Cancel,
    /// Leave the merge session keeping local moves
    Update,
}

/// Side effect requested by the reducer
#[derive(Debug, Clone)]
pub enum Command {
    /// Issue one read request to the list service
    Fetch,
    /// Blocking validation message
    Alert { title: String, message: String },
    /// Transient feedback
    Notify(Notification),
}

/// State behind the list merge UI
#[derive(Debug, Clone, Default)]
pub struct ListsState {
    lists: Vec<List>,
    selection: Selection,
    screen: Screen,
    fetch_pending: bool,
    /// The pending fetch was a manual refresh
    announce_load: bool,
}

impl ListsState {
    /// Initial state: loading, nothing requested yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Look up a list by number
    pub fn list(&self, number: ListNumber) -> Option<&List> {
        find_list(&self.lists, number)
    }

    /// Whether a fetch has been requested and not yet answered
    pub fn fetch_pending(&self) -> bool {
        self.fetch_pending
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading)
    }

    /// Whether the lists are being browsed
    pub fn is_viewing(&self) -> bool {
        matches!(self.screen, Screen::Viewing)
    }

    /// Whether a merge session is active
    pub fn is_creating(&self) -> bool {
        matches!(self.screen, Screen::Merging(_))
    }

    /// Reason of the last failed fetch, while the error screen is shown
    pub fn error(&self) -> Option<&str> {
        match &self.screen {
            Screen::Error(reason) => Some(reason),
            _ => None,
        }
    }

    /// Active merge session
    pub fn session(&self) -> Option<&MergeSession> {
        match &self.screen {
            Screen::Merging(session) => Some(session),
            _ => None,
        }
    }
}
