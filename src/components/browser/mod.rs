//! Folder browser UI components.
//!
//! Components:
//! - [`Browser`] - Main layout and current folder label
//! - [`Breadcrumbs`] - Root control plus one element per path segment
//! - [`FileList`] - Rows of the displayed folder
//! - [`PreviewPane`] - Embedded PDF viewer and placeholder message

mod breadcrumbs;
#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod preview;

pub use breadcrumbs::Breadcrumbs;
pub use browser::Browser;
pub use file_list::FileList;
pub use preview::PreviewPane;
