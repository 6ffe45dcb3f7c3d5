//! Navigation state and selection handling.
//!
//! [`Navigator`] is the single state container of the browser: it owns the
//! current [`NavigationPath`], the transient [`PreviewState`] and the
//! [`DeviceClass`] injected at construction. The UI keeps one instance in a
//! signal and routes every user intent through [`Navigator::apply`].
//!
//! Every navigation resets the preview to the idle placeholder, since a
//! preview belongs to the folder it was opened from.

use super::view::{ExplorerView, derive_view};
use crate::config::preview_messages;
use crate::models::{DeviceClass, NavigationPath, PreviewState, Tree};
use crate::utils::resolve_locator;

/// A user intent produced by activating a row or breadcrumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    EnterFolder(String),
    GoUp,
    GoToRoot,
    JumpTo(NavigationPath),
    Select { name: String, path: String },
}

/// Side effect the UI must carry out after a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectEffect {
    /// Content is shown in the preview region; nothing else to do.
    Embed { target: String },
    /// Open `target` in a new browsing context.
    OpenExternal { target: String },
}

impl SelectEffect {
    pub fn target(&self) -> &str {
        match self {
            Self::Embed { target } | Self::OpenExternal { target } => target,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    path: NavigationPath,
    preview: PreviewState,
    device: DeviceClass,
}

impl Navigator {
    /// Start at the root with the idle placeholder for `device`.
    pub fn new(device: DeviceClass) -> Self {
        Self {
            path: NavigationPath::root(),
            preview: PreviewState::idle(device),
            device,
        }
    }

    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Derive the view model for the current path.
    pub fn view(&self, tree: &Tree) -> ExplorerView {
        derive_view(tree, &self.path)
    }

    /// Descend into `name`. The folder is not checked for existence.
    pub fn enter_folder(&mut self, name: impl Into<String>) {
        self.path.push(name);
        self.reset_preview();
    }

    /// Ascend one level; the path is unchanged at root.
    pub fn go_up(&mut self) {
        self.path.pop();
        self.reset_preview();
    }

    pub fn go_to_root(&mut self) {
        self.path.clear();
        self.reset_preview();
    }

    /// Replace the path wholesale (breadcrumb navigation).
    pub fn jump_to(&mut self, path: NavigationPath) {
        self.path = path;
        self.reset_preview();
    }

    /// Select a file for preview.
    ///
    /// The embed target and the new-tab target are the same resolved
    /// locator. Any previous preview is replaced, never stacked.
    pub fn select(&mut self, name: &str, path: &str) -> SelectEffect {
        let target = resolve_locator(path);

        match self.device {
            DeviceClass::Touch => {
                self.preview = PreviewState::Placeholder {
                    message: preview_messages::touch_opened(name),
                };
                SelectEffect::OpenExternal { target }
            }
            DeviceClass::Pointer => {
                self.preview = PreviewState::Embedded {
                    name: name.to_string(),
                    target: target.clone(),
                };
                SelectEffect::Embed { target }
            }
        }
    }

    /// Apply a user intent. Returns the selection effect, if any.
    pub fn apply(&mut self, action: Action) -> Option<SelectEffect> {
        match action {
            Action::EnterFolder(name) => self.enter_folder(name),
            Action::GoUp => self.go_up(),
            Action::GoToRoot => self.go_to_root(),
            Action::JumpTo(path) => self.jump_to(path),
            Action::Select { name, path } => return Some(self.select(&name, &path)),
        }
        None
    }

    fn reset_preview(&mut self) {
        self.preview = PreviewState::idle(self.device);
    }
}
