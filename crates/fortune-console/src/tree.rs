// crates/fortune-console/src/tree.rs
//
// Fold state and flattening for the generated file tree. The tree itself
// is immutable once generated; which folders are open lives here, keyed
// by a path of "{index}:{name}" segments so duplicate sibling names stay
// distinct. Everything starts expanded and only folders with children
// can be folded.

use std::collections::HashSet;

use fortune_core::{FileNode, NodeKind};

/// One visible line of the flattened tree.
pub struct TreeRow {
    pub key: String,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub expanded: bool,
    pub has_children: bool,
}

/// Fold and selection state, kept outside the tree data.
#[derive(Debug, Default)]
pub struct TreeView {
    collapsed: HashSet<String>,
    pub selected: usize,
}

impl TreeView {
    /// Flatten the tree in display order, skipping the descendants of
    /// collapsed folders.
    pub fn visible_rows(&self, root: &FileNode) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let root_key = format!("0:{}", root.name);
        self.push_node(root, root_key, 0, &mut rows);
        rows
    }

    fn push_node(&self, node: &FileNode, key: String, depth: usize, rows: &mut Vec<TreeRow>) {
        let has_children = node.is_folder() && !node.children().is_empty();
        let expanded = has_children && !self.collapsed.contains(&key);
        rows.push(TreeRow {
            key: key.clone(),
            name: node.name.clone(),
            kind: node.kind,
            depth,
            expanded,
            has_children,
        });
        if expanded {
            for (index, child) in node.children().iter().enumerate() {
                let child_key = format!("{key}/{index}:{}", child.name);
                self.push_node(child, child_key, depth + 1, rows);
            }
        }
    }

    /// Fold or unfold the folder under the cursor. Files and empty
    /// folders are left alone. The cursor stays on the folder, which is
    /// always still visible after the fold.
    pub fn toggle_selected(&mut self, root: &FileNode) {
        let rows = self.visible_rows(root);
        let Some(row) = rows.get(self.selected) else {
            return;
        };
        if !row.has_children {
            return;
        }
        if !self.collapsed.remove(&row.key) {
            self.collapsed.insert(row.key.clone());
        }
    }

    pub fn select_next(&mut self, root: &FileNode) {
        let count = self.visible_rows(root).len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
