//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuFile as File, LuFileText as FileText, LuFolder as Folder,
        LuMoon as Moon, LuRefreshCw as Refresh, LuSearch as Search, LuSun as Sun, LuTag as Tag,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsChevronLeft as ChevronLeft, BsFileEarmark as File,
        BsFileEarmarkText as FileText, BsFolderFill as Folder, BsMoonStarsFill as Moon,
        BsSearch as Search, BsSunFill as Sun, BsTag as Tag,
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

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(SEARCH, Search);
themed_icon!(REFRESH, Refresh);
themed_icon!(TAG, Tag);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
