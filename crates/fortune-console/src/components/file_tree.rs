// crates/fortune-console/src/components/file_tree.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use fortune_core::{FileNode, NodeKind};

use crate::tree::TreeView;

pub fn draw_file_tree(f: &mut Frame, area: Rect, tree: &FileNode, view: &TreeView) {
    let rows = view.visible_rows(tree);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let chevron = if row.has_children {
                if row.expanded {
                    "▾ "
                } else {
                    "▸ "
                }
            } else {
                "  "
            };
            let name_style = match row.kind {
                NodeKind::Folder => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                NodeKind::File => Style::default().fg(Color::Gray),
            };
            let mut spans = vec![
                Span::raw(indent),
                Span::styled(chevron, Style::default().fg(Color::DarkGray)),
                Span::styled(row.name.as_str(), name_style),
            ];
            if row.kind == NodeKind::Folder {
                spans.push(Span::styled("/", name_style));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(view.selected));
    f.render_stateful_widget(list, area, &mut state);
}
