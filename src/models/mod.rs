//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`Tree`], [`FileKind`] - The static folder/file structure
//! - [`NavigationPath`], [`PreviewState`], [`DeviceClass`] - Browser view state
//! - [`LoadState`] - Structure document lifecycle

mod explorer;
mod tree;

pub use explorer::{DeviceClass, DisplayMode, LoadState, NavigationPath, PreviewState};
pub use tree::{FileKind, Node, Tree};
