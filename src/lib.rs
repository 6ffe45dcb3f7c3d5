//! Static folder/file browser with in-page PDF preview.
//!
//! The structure document (`structure.json`) is fetched once at startup. The
//! [`core`] module holds the toolkit-independent navigation logic; the
//! [`components`] module paints it with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
