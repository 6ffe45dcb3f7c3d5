//! Utility modules for web, DOM, and locator operations.
//!
//! Provides:
//! - [`fetch_text`] - One-shot network fetching
//! - [`resolve_locator`] - Path normalization and percent-encoding
//! - [`dom`] - Browser window, user agent and new-tab helpers

pub mod dom;
mod fetch;
mod url;

pub use fetch::fetch_text;
pub use url::resolve_locator;
