//! Centralized icon definitions for UI chrome.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`. File glyphs in
//! the list itself come from `core::classify`, not from here.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuFiles as Files, LuFolderOpen as EmptyFolder,
        LuHardDrive as Storage, LuHistory as Updated,
    };
}

mod bootstrap {
    pub use icondata::{
        BsClockHistory as Updated, BsDownload as Download, BsFiles as Files,
        BsFolder2Open as EmptyFolder, BsHdd as Storage,
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

themed_icon!(DOWNLOAD, Download);
themed_icon!(EMPTY_FOLDER, EmptyFolder);
themed_icon!(FILES, Files);
themed_icon!(STORAGE, Storage);
themed_icon!(UPDATED, Updated);
