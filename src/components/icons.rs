//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::Row;
use crate::models::FileKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Up, LuBookOpen as FilePdf, LuDownload as Download, LuFile as File,
        LuFolder as Folder, LuHouse as Home,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Up, BsDownload as Download, BsFileEarmark as File,
        BsFileEarmarkPdf as FilePdf, BsFolderFill as Folder, BsHouseFill as Home,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(UP, Up);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(DOWNLOAD, Download);

/// Icon for a list row (None for the empty-folder message).
pub fn row_icon(row: &Row) -> Option<Icon> {
    match row {
        Row::Up => Some(UP),
        Row::Empty => None,
        Row::Folder { .. } => Some(FOLDER),
        Row::File {
            kind: FileKind::Pdf,
            ..
        } => Some(FILE_PDF),
        Row::File { .. } => Some(FILE),
    }
}
