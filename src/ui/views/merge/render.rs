//! Merge View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::MergeView;
use crate::model::{List, MergeSession, Side, find_list};
use crate::ui::{components, navigation, symbols, theme::merge_view};

impl MergeView {
    /// Render left list, right list and the new list in three columns
    pub fn render(&self, frame: &mut Frame, area: Rect, session: &MergeSession, lists: &[List]) {
        let [left, right, new_list] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(area);

        self.render_side(frame, left, Side::Left, session, lists);
        self.render_side(frame, right, Side::Right, session, lists);
        render_new_list(frame, new_list, session.new_list());
    }

    fn render_side(
        &self,
        frame: &mut Frame,
        area: Rect,
        side: Side,
        session: &MergeSession,
        lists: &[List],
    ) {
        let number = session.list_on(side);
        let focused = self.focus == side;
        let title = Line::from(format!(" List {number} ")).bold();
        let block = components::focus_block(
            title,
            focused,
            merge_view::FOCUSED_BORDER,
            merge_view::UNFOCUSED_BORDER,
        );

        let items = find_list(lists, number).map_or(&[][..], |list| list.items.as_slice());
        if items.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(symbols::empty::NO_ITEMS).dark_gray()).block(block),
                area,
            );
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let cursor = self.cursor(side, items.len());
        let scroll_offset = navigation::adjust_scroll(cursor, 0, inner_height);
        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(idx, item)| build_item_line(item, side, focused && idx == cursor))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_item_line(item: &str, side: Side, highlighted: bool) -> Line<'static> {
    let line = Line::from(vec![
        Span::raw(format!("{item} ")),
        Span::styled(
            symbols::arrow(side),
            Style::default().fg(merge_view::ARROW),
        ),
    ]);
    if highlighted {
        line.style(Style::default().bg(merge_view::SELECTED_BG))
    } else {
        line
    }
}

fn render_new_list(frame: &mut Frame, area: Rect, items: &[String]) {
    let title = Line::from(" New List ").bold().fg(merge_view::NEW_LIST);
    let block = components::focus_block(
        title,
        false,
        merge_view::FOCUSED_BORDER,
        merge_view::UNFOCUSED_BORDER,
    );

    let lines: Vec<Line> = if items.is_empty() {
        vec![Line::from(symbols::empty::NEW_LIST).dark_gray()]
    } else {
        items.iter().map(|item| Line::from(item.clone())).collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
