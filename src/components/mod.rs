//! UI components built with Leptos.
//!
//! - [`browser`] - Folder list, breadcrumbs and PDF preview
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::Browser;
