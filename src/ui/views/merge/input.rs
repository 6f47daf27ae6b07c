//! Merge View key handling

use crossterm::event::KeyEvent;

use super::{MergeAction, MergeView};
use crate::keys;
use crate::model::{List, MergeSession, Side, find_list};

impl MergeView {
    /// Handle key input
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        session: &MergeSession,
        lists: &[List],
    ) -> MergeAction {
        let focused_len = find_list(lists, session.list_on(self.focus))
            .map_or(0, |list| list.items.len());

        match key.code {
            k if keys::is_move_down(k) => {
                self.select_next(focused_len);
                MergeAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev(focused_len);
                MergeAction::None
            }
            k if k == keys::GO_TOP => {
                self.select_first();
                MergeAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.select_last(focused_len);
                MergeAction::None
            }
            k if keys::is_focus_left(k) => {
                self.set_focus(Side::Left);
                MergeAction::None
            }
            k if keys::is_focus_right(k) => {
                self.set_focus(Side::Right);
                MergeAction::None
            }
            k if k == keys::SWITCH_PANE => {
                self.toggle_focus();
                MergeAction::None
            }
            k if keys::is_move_item(k) => match self.selected_item(session, lists) {
                Some(item) => MergeAction::Move {
                    item: item.to_string(),
                    from: session.list_on(self.focus),
                    to: session.list_on(self.focus.other()),
                },
                None => MergeAction::None,
            },
            k if k == keys::UPDATE => MergeAction::Update,
            k if keys::is_cancel(k) || k == keys::QUIT => MergeAction::Cancel,
            _ => MergeAction::None,
        }
    }
}
