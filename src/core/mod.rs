//! Core browsing logic, independent of the UI toolkit.
//!
//! This module provides:
//! - [`store`] loading of the structure document
//! - [`resolve`] path resolution into the tree
//! - [`Navigator`] navigation and selection state
//! - [`derive_view`] the view model painted by the components

pub mod error;
mod navigator;
mod resolver;
pub mod store;
mod view;

pub use navigator::{Action, Navigator, SelectEffect};
pub use resolver::resolve;
pub use view::{Crumb, Download, ExplorerView, Row, derive_view};
