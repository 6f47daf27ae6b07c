//! Lists View key handling

use crossterm::event::KeyEvent;

use super::{ListsAction, ListsView};
use crate::keys;
use crate::model::List;

impl ListsView {
    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent, lists: &[List]) -> ListsAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.select_next(lists);
                ListsAction::None
            }
            k if keys::is_move_up(k) => {
                self.select_prev(lists);
                ListsAction::None
            }
            k if k == keys::GO_TOP => {
                self.select_first();
                ListsAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.select_last(lists);
                ListsAction::None
            }
            k if k == keys::TOGGLE_SELECT => match self.selected_list(lists) {
                Some(list) => ListsAction::Toggle(list.list_number),
                None => ListsAction::None,
            },
            k if k == keys::CREATE_LIST => ListsAction::CreateNewList,
            _ => ListsAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListNumber;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_toggles_list_under_cursor() {
        let lists = vec![List::new(4, ["a"]), List::new(9, ["b"])];
        let mut view = ListsView::new();

        assert_eq!(
            view.handle_key(key(KeyCode::Char(' ')), &lists),
            ListsAction::Toggle(ListNumber(4))
        );

        view.handle_key(key(KeyCode::Char('j')), &lists);
        assert_eq!(
            view.handle_key(key(KeyCode::Char(' ')), &lists),
            ListsAction::Toggle(ListNumber(9))
        );
    }

    #[test]
    fn test_space_on_empty_collection() {
        let mut view = ListsView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Char(' ')), &[]),
            ListsAction::None
        );
    }

    #[test]
    fn test_create_key() {
        let mut view = ListsView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Char('c')), &[]),
            ListsAction::CreateNewList
        );
    }

    #[test]
    fn test_unbound_key() {
        let lists = vec![List::new(1, ["a"])];
        let mut view = ListsView::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Char('z')), &lists),
            ListsAction::None
        );
    }
}
