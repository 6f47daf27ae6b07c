//! The single update function for [`ListsState`]

use tracing::{debug, info, warn};

use super::{
    CREATE_TITLE, Command, ListsState, Msg, SELECT_TWO_MESSAGE, Screen, UPDATE_TITLE,
    UPDATED_MESSAGE,
};
use crate::model::{
    List, ListNumber, MergeSession, MoveOutcome, Notification, ToggleOutcome, find_list,
};

impl ListsState {
    /// Apply a message, returning the side effect it requires (if any)
    ///
    /// Messages that do not apply to the current screen are ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::Reload => self.reload(),
            Msg::Refresh => self.refresh(),
            Msg::FetchSucceeded(lists) => self.fetch_succeeded(lists),
            Msg::FetchFailed(reason) => self.fetch_failed(reason),
            Msg::ToggleSelection(number) => self.toggle_selection(number),
            Msg::CreateNewList => self.create_new_list(),
            Msg::MoveItem { item, from, to } => self.move_item(&item, from, to),
            Msg::Cancel => self.cancel(),
            Msg::Update => self.commit(),
        }
    }

    fn reload(&mut self) -> Option<Command> {
        if self.fetch_pending {
            debug!("fetch already in flight, reload ignored");
            return None;
        }
        if self.is_creating() {
            debug!("reload ignored during a merge session");
            return None;
        }

        self.fetch_pending = true;
        self.announce_load = false;
        self.screen = Screen::Loading;
        info!("fetching lists");
        Some(Command::Fetch)
    }

    fn refresh(&mut self) -> Option<Command> {
        if !self.is_viewing() {
            return None;
        }
        let command = self.reload();
        self.announce_load = command.is_some();
        command
    }

    fn fetch_succeeded(&mut self, lists: Vec<List>) -> Option<Command> {
        if !self.fetch_pending {
            debug!("discarding fetch result with no pending request");
            return None;
        }

        self.fetch_pending = false;
        self.lists = lists;
        self.selection
            .retain(|number| find_list(&self.lists, number).is_some());
        self.screen = Screen::Viewing;
        info!(count = self.lists.len(), "lists loaded");

        if std::mem::take(&mut self.announce_load) {
            return Some(Command::Notify(Notification::success(loaded_message(
                self.lists.len(),
            ))));
        }
        None
    }

    fn fetch_failed(&mut self, reason: String) -> Option<Command> {
        if !self.fetch_pending {
            debug!("discarding fetch failure with no pending request");
            return None;
        }

        self.fetch_pending = false;
        self.announce_load = false;
        warn!(%reason, "list fetch failed");
        self.screen = Screen::Error(reason);
        None
    }

    fn toggle_selection(&mut self, number: ListNumber) -> Option<Command> {
        if self.screen != Screen::Viewing {
            return None;
        }
        if find_list(&self.lists, number).is_none() {
            debug!(list = %number, "toggle ignored for unknown list");
            return None;
        }

        if self.selection.toggle(number) == ToggleOutcome::Full {
            debug!(list = %number, "selection full, toggle ignored");
        }
        None
    }

    fn create_new_list(&mut self) -> Option<Command> {
        if self.screen != Screen::Viewing {
            return None;
        }

        match self.selection.pair() {
            Some((left, right)) => {
                info!(%left, %right, "merge session started");
                self.screen = Screen::Merging(MergeSession::new(left, right));
                None
            }
            None => Some(Command::Alert {
                title: CREATE_TITLE.to_string(),
                message: SELECT_TWO_MESSAGE.to_string(),
            }),
        }
    }

    fn move_item(&mut self, item: &str, from: ListNumber, to: ListNumber) -> Option<Command> {
        let Screen::Merging(session) = &self.screen else {
            return None;
        };

        let warning = match session.move_item(&mut self.lists, item, from, to) {
            MoveOutcome::Moved => {
                debug!(item, %from, %to, "item moved");
                return None;
            }
            MoveOutcome::ItemNotFound => format!("\"{item}\" is not in List {from}"),
            MoveOutcome::NotInSession => {
                format!("List {from} and List {to} are not being merged")
            }
            MoveOutcome::UnknownList(number) => format!("List {number} is no longer available"),
        };
        warn!(item, %from, %to, "move rejected: {warning}");
        Some(Command::Notify(Notification::warning(warning)))
    }

    fn cancel(&mut self) -> Option<Command> {
        if !self.is_creating() {
            return None;
        }

        info!("merge cancelled, discarding local moves");
        self.selection.clear();
        self.screen = Screen::Viewing;
        self.reload()
    }

    fn commit(&mut self) -> Option<Command> {
        if !self.is_creating() {
            return None;
        }

        // The merged result stays local; there is no write endpoint yet.
        info!("merge committed locally, nothing transmitted");
        self.selection.clear();
        self.screen = Screen::Viewing;
        Some(Command::Alert {
            title: UPDATE_TITLE.to_string(),
            message: UPDATED_MESSAGE.to_string(),
        })
    }
}

fn loaded_message(count: usize) -> String {
    match count {
        1 => "1 list loaded".to_string(),
        n => format!("{n} lists loaded"),
    }
}
