//! View model derivation.
//!
//! [`derive_view`] turns the tree and the current path into everything the
//! browser paints: the folder label, the list rows and the breadcrumb trail.
//! It is a pure function; the UI layer reconciles the DOM against its output.

use super::navigator::Action;
use super::resolver::resolve;
use crate::config::{EMPTY_FOLDER_LABEL, ROOT_LABEL, UP_ROW_LABEL};
use crate::models::{FileKind, NavigationPath, Node, Tree};
use crate::utils::resolve_locator;

/// One row of the file list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    /// Pseudo-row that goes one level up.
    Up,
    /// Explanatory row for an empty non-root folder.
    Empty,
    Folder {
        name: String,
    },
    File {
        name: String,
        kind: FileKind,
        /// Path as written in the structure document.
        path: String,
        /// Normalized, encoded location.
        locator: String,
    },
}

/// Secondary download control of a file row.
///
/// Carries no [`Action`]: activating it only downloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub href: String,
    pub filename: String,
}

impl Row {
    fn from_node(node: &Node) -> Self {
        match node {
            Node::Folder { name, .. } => Row::Folder { name: name.clone() },
            Node::File { name, path } => Row::File {
                name: name.clone(),
                kind: FileKind::from_name(name),
                path: path.clone(),
                locator: resolve_locator(path),
            },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Row::Up => UP_ROW_LABEL,
            Row::Empty => EMPTY_FOLDER_LABEL,
            Row::Folder { name } | Row::File { name, .. } => name,
        }
    }

    /// Primary action when the row is activated.
    pub fn action(&self) -> Option<Action> {
        match self {
            Row::Up => Some(Action::GoUp),
            Row::Empty => None,
            Row::Folder { name } => Some(Action::EnterFolder(name.clone())),
            Row::File { name, path, .. } => Some(Action::Select {
                name: name.clone(),
                path: path.clone(),
            }),
        }
    }

    /// Download control, for file rows only.
    pub fn download(&self) -> Option<Download> {
        match self {
            Row::File { name, locator, .. } => Some(Download {
                href: locator.clone(),
                filename: name.clone(),
            }),
            _ => None,
        }
    }
}

/// One element of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Crumb {
    /// Always-present root control.
    Root,
    /// An ancestor folder; jumps to the path ending at it.
    Link {
        label: String,
        target: NavigationPath,
    },
    /// The displayed folder, inert.
    Current { label: String },
}

impl Crumb {
    pub fn label(&self) -> &str {
        match self {
            Crumb::Root => ROOT_LABEL,
            Crumb::Link { label, .. } | Crumb::Current { label } => label,
        }
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            Crumb::Root => Some(Action::GoToRoot),
            Crumb::Link { target, .. } => Some(Action::JumpTo(target.clone())),
            Crumb::Current { .. } => None,
        }
    }
}

/// Everything the browser displays for one navigation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerView {
    /// Name of the displayed folder, or the root label.
    pub folder_label: String,
    pub rows: Vec<Row>,
    pub breadcrumbs: Vec<Crumb>,
}

/// Derive the view model for `path` within `tree`.
pub fn derive_view(tree: &Tree, path: &NavigationPath) -> ExplorerView {
    ExplorerView {
        folder_label: path.last().unwrap_or(ROOT_LABEL).to_string(),
        rows: derive_rows(tree, path),
        breadcrumbs: derive_breadcrumbs(path),
    }
}

fn derive_rows(tree: &Tree, path: &NavigationPath) -> Vec<Row> {
    let entries = resolve(tree, path);
    let mut rows = Vec::with_capacity(entries.len() + 1);

    if !path.is_root() {
        rows.push(Row::Up);
        if entries.is_empty() {
            rows.push(Row::Empty);
            return rows;
        }
    }

    rows.extend(entries.iter().map(Row::from_node));
    rows
}

fn derive_breadcrumbs(path: &NavigationPath) -> Vec<Crumb> {
    let segments = path.segments();
    let mut crumbs = Vec::with_capacity(segments.len() + 1);
    crumbs.push(Crumb::Root);

    for (idx, segment) in segments.iter().enumerate() {
        let label = segment.clone();
        if idx + 1 < segments.len() {
            crumbs.push(Crumb::Link {
                label,
                target: path.prefix(idx + 1),
            });
        } else {
            crumbs.push(Crumb::Current { label });
        }
    }

    crumbs
}
