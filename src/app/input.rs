//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::App;
use crate::keys;
use crate::state::Msg;
use crate::ui::views::{ListsAction, MergeAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_force_quit_key(&key) {
            self.quit();
            return;
        }

        // An open alert takes every key until dismissed
        if let Some(ref dialog) = self.active_dialog {
            if dialog.handle_key(key) {
                self.active_dialog = None;
            }
            return;
        }

        if self.show_help {
            self.handle_help_key(key);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_screen_key(key);
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::HELP | keys::ESC | keys::QUIT => {
                self.show_help = false;
                self.help_scroll = 0;
            }
            k if keys::is_move_down(k) => {
                self.help_scroll = self.help_scroll.saturating_add(1);
            }
            k if keys::is_move_up(k) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.execute_refresh();
            return true;
        }
        match key.code {
            keys::HELP => {
                self.show_help = true;
                true
            }
            // In a merge, q cancels instead (handled by the merge view)
            keys::QUIT if !self.state.is_creating() => {
                self.quit();
                true
            }
            _ => false,
        }
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        if self.state.is_loading() {
            return;
        }

        if self.state.error().is_some() {
            if keys::is_retry(key.code) {
                self.execute_retry();
            }
            return;
        }

        if let Some(session) = self.state.session() {
            let action = self
                .merge_view
                .handle_key(key, session, self.state.lists());
            self.handle_merge_action(action);
            return;
        }

        let action = self.lists_view.handle_key(key, self.state.lists());
        self.handle_lists_action(action);
    }

    fn handle_lists_action(&mut self, action: ListsAction) {
        match action {
            ListsAction::None => {}
            ListsAction::Toggle(number) => self.dispatch(Msg::ToggleSelection(number)),
            ListsAction::CreateNewList => self.dispatch(Msg::CreateNewList),
        }
    }

    fn handle_merge_action(&mut self, action: MergeAction) {
        match action {
            MergeAction::None => {}
            MergeAction::Move { item, from, to } => {
                self.dispatch(Msg::MoveItem { item, from, to });
            }
            MergeAction::Cancel => self.dispatch(Msg::Cancel),
            MergeAction::Update => self.dispatch(Msg::Update),
        }
    }
}
