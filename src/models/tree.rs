use serde::{Deserialize, Serialize};

// =============================================================================
// Structure Document Types
// =============================================================================

/// One entry of the structure document.
///
/// Serialized with an internal `"type"` tag:
/// `{ "type": "folder", "name": ..., "children": [...] }` or
/// `{ "type": "file", "name": ..., "path": ... }`.
/// Extra fields (the generator also writes a `path` on folders) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder {
        name: String,
        /// Missing `children` is read as an empty folder.
        #[serde(default)]
        children: Vec<Node>,
    },
    File {
        name: String,
        /// Location of the document, with either separator style.
        path: String,
    },
}

impl Node {
    /// Create a folder node.
    pub fn folder(name: &str, children: Vec<Node>) -> Self {
        Node::Folder {
            name: name.to_string(),
            children,
        }
    }

    /// Create a file node.
    pub fn file(name: &str, path: &str) -> Self {
        Node::File {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    /// Display name of the entry.
    pub fn name(&self) -> &str {
        match self {
            Node::Folder { name, .. } | Node::File { name, .. } => name,
        }
    }

    /// Check if this entry is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    /// Children of a folder (None for files).
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Folder { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }
}

/// The whole folder/file structure, as loaded at startup.
///
/// Immutable once built; the root is an ordered sequence of nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Tree(Vec<Node>);

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }

    /// Root-level entries in source order.
    pub fn roots(&self) -> &[Node] {
        &self.0
    }

    /// True for a structure document with no root entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + n.children().map(count).unwrap_or(0))
                .sum()
        }
        count(&self.0)
    }
}

/// Supported file kinds for row icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    Pdf,
    Other,
}

impl FileKind {
    /// Detect file kind from the name's extension.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).as_deref() {
            Some("pdf") => Self::Pdf,
            _ => Self::Other,
        }
    }
}
