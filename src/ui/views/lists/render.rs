//! Lists View rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::ListsView;
use crate::model::{List, MAX_SELECTED, Selection};
use crate::ui::{components, navigation, symbols, theme::lists_view};

impl ListsView {
    /// Render every list with a checkbox header and its items below
    pub fn render(&self, frame: &mut Frame, area: Rect, lists: &[List], selection: &Selection) {
        let title = Line::from(format!(
            " List Creation ({}/{} selected) ",
            selection.len(),
            MAX_SELECTED
        ))
        .bold()
        .fg(lists_view::TITLE)
        .centered();
        let block = components::bordered_block(title);

        if lists.is_empty() {
            frame.render_widget(components::no_lists_state().block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let selected = self.selected_index(lists);
        let mut lines = Vec::new();
        let mut cursor_row = 0;
        for (idx, list) in lists.iter().enumerate() {
            let is_cursor = idx == selected;
            if is_cursor {
                cursor_row = lines.len();
            }
            lines.push(build_header_line(
                list,
                selection.contains(list.list_number),
                is_cursor,
            ));
            lines.extend(build_item_lines(list));
        }

        let scroll_offset = navigation::adjust_scroll(cursor_row, 0, inner_height);
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(scroll_offset)
            .take(inner_height)
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

fn build_header_line(list: &List, checked: bool, is_cursor: bool) -> Line<'static> {
    let marker = if is_cursor {
        symbols::markers::CURSOR
    } else {
        symbols::markers::NO_CURSOR
    };
    let checkbox_color = if checked {
        lists_view::CHECKED
    } else {
        lists_view::UNCHECKED
    };

    let line = Line::from(vec![
        Span::raw(marker),
        Span::styled(
            symbols::checkbox(checked),
            Style::default().fg(checkbox_color),
        ),
        Span::raw(" "),
        Span::styled(list.title(), Style::default().add_modifier(Modifier::BOLD)),
    ]);

    if is_cursor {
        line.style(Style::default().bg(lists_view::SELECTED_BG))
    } else {
        line
    }
}

fn build_item_lines(list: &List) -> Vec<Line<'static>> {
    if list.items.is_empty() {
        return vec![Line::from(format!("      {}", symbols::empty::NO_ITEMS)).dark_gray()];
    }
    list.items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("      {item}"),
                Style::default().fg(lists_view::ITEM),
            ))
        })
        .collect()
}
