//! Generated project-tree value objects.
//!
//! The AI proxy answers a scaffolding prompt with a JSON document shaped
//! like:
//!
//! ```json
//! {
//!   "name": "my-app",
//!   "type": "folder",
//!   "children": [
//!     { "name": "README.md", "type": "file", "content": "# my-app" }
//!   ]
//! }
//! ```
//!
//! [`FileNode`] is the typed form of that document. The tree is an owned
//! value (no cycles possible), rooted at exactly one folder, constructed
//! wholesale from a parsed reply and never mutated afterwards; the console
//! keeps its expand/collapse flags out-of-band, keyed by node path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a node is a folder or a file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// One node of a generated project tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    /// Display name, e.g. `"src"` or `"main.rs"`.
    pub name: String,

    /// Folder or file. The backend spells the field `"type"`.
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// File body, files only. An empty string means "file requested with
    /// no content", per the scaffold prompt contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Ordered children, folders only. Order is display order; the UI
    /// never sorts it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
}

/// Why a parsed tree is not usable as a project scaffold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeShapeError {
    /// The root node must be a folder.
    #[error("root node '{0}' is not a folder")]
    RootNotFolder(String),

    /// A file node carried a `children` array.
    #[error("file node '{0}' has children")]
    FileWithChildren(String),
}

impl FileNode {
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Children slice, empty for files and childless folders.
    pub fn children(&self) -> &[FileNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Check the shape invariants the scaffold prompt demands: the root is
    /// a folder, and no file node has children. A folder without a
    /// `children` array is fine (treated as empty).
    pub fn validate(&self) -> Result<(), TreeShapeError> {
        if !self.is_folder() {
            return Err(TreeShapeError::RootNotFolder(self.name.clone()));
        }
        self.check_files_childless()
    }

    fn check_files_childless(&self) -> Result<(), TreeShapeError> {
        if self.kind == NodeKind::File && self.children.as_ref().is_some_and(|c| !c.is_empty()) {
            return Err(TreeShapeError::FileWithChildren(self.name.clone()));
        }
        for child in self.children() {
            child.check_files_childless()?;
        }
        Ok(())
    }
}
