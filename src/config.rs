//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "PDF Shelf";

// =============================================================================
// Structure Document
// =============================================================================

/// Location of the pre-computed folder/file tree, relative to the serving root.
pub const STRUCTURE_URL: &str = "structure.json";

// =============================================================================
// Labels
// =============================================================================

/// Label for the tree root (folder label and first breadcrumb).
pub const ROOT_LABEL: &str = "Root";

/// Label of the pseudo-row that navigates one level up.
pub const UP_ROW_LABEL: &str = ".. (Up a level)";

/// Shown in place of rows when a non-root folder has no children.
pub const EMPTY_FOLDER_LABEL: &str = "(This folder is empty or contains no PDFs)";

/// Glyph placed between breadcrumb segments.
pub const BREADCRUMB_SEPARATOR: &str = " / ";

/// Label of the secondary download control on file rows.
pub const DOWNLOAD_LABEL: &str = "Download";

/// Prefix of the inline message shown when the structure document fails to load.
pub const LOAD_ERROR_PREFIX: &str = "Error loading file structure. Details:";

// =============================================================================
// Device Classification
// =============================================================================

/// User agent pattern that classifies a device as touch-class.
pub const TOUCH_UA_PATTERN: &str = r"(?i)Mobi|Android|iPhone|iPad|iPod";

/// Preview messages per device class.
pub mod preview_messages {
    /// Idle placeholder on pointer-class devices.
    pub const POINTER_IDLE: &str = "Select a PDF to view it here.";
    /// Idle placeholder on touch-class devices.
    pub const TOUCH_IDLE: &str = "Select a PDF from the list. It will open in a new tab.";

    /// Confirmation after opening `name` in a new tab.
    pub fn touch_opened(name: &str) -> String {
        format!("'{}' opened in a new tab. Select another PDF or navigate.", name)
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
