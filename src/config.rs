//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the logger target prefix.
pub const APP_NAME: &str = "folio";

// =============================================================================
// Network Configuration
// =============================================================================

/// Network request settings.
pub mod network {
    /// Fetch request timeout in milliseconds.
    pub const FETCH_TIMEOUT_MS: i32 = 10000;
}

// =============================================================================
// Archive Navigator
// =============================================================================

/// Remote archive browsing configuration.
pub mod archive {
    /// Contents API of the archive repository. Directory listings live under it.
    pub const API_BASE_URL: &str =
        "https://api.github.com/repos/Eclectic-Wind/The-Megastructure-Archives/contents";

    /// Large-object (LFS) media endpoint for the same repository and branch.
    pub const LARGE_OBJECT_BASE_URL: &str =
        "https://media.githubusercontent.com/media/Eclectic-Wind/The-Megastructure-Archives/main";

    /// First line of a large-file pointer served in place of the real content.
    pub const LARGE_FILE_MARKER: &str = "version https://git-lfs.github.com/spec/v1";

    /// Lifetime of a cached listing or file body in milliseconds (5 minutes).
    pub const CACHE_TTL_MS: f64 = 5.0 * 60.0 * 1000.0;

    /// Cache key used for the repository root listing.
    pub const ROOT_CACHE_KEY: &str = "/";

    /// Input inactivity before a search starts, in milliseconds.
    pub const SEARCH_DEBOUNCE_MS: u32 = 300;

    /// Shorter search terms fall back to the listing view.
    pub const MIN_SEARCH_TERM_LEN: usize = 3;

    /// Version-control metadata skipped during deep search.
    pub const SEARCH_IGNORED: &[&str] = &[
        ".git",
        ".github",
        ".gitignore",
        ".gitattributes",
        ".gitmodules",
    ];

    /// File extensions rendered as Markdown and routed as file targets.
    pub const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

    /// Maximum displayed name length in the directory listing.
    pub const LISTING_NAME_WIDTH: usize = 30;

    /// Maximum displayed name length in the search result tree.
    pub const RESULT_NAME_WIDTH: usize = 20;

    /// Indentation per nesting level in the search result tree, in pixels.
    pub const RESULT_INDENT_PX: usize = 20;

    /// Label of the breadcrumb root.
    pub const ROOT_LABEL: &str = "Archives";

    /// Inline messages shown in place of the listing on failure.
    pub mod messages {
        pub const LISTING_FAILED: &str =
            "Error loading repository contents. Please try again later.";
        pub const FILE_FAILED: &str = "Error loading file content. Please try again later.";
        pub const SEARCH_FAILED: &str = "Error performing search. Please try again later.";
    }
}

// =============================================================================
// Pages
// =============================================================================

/// SPA page routing configuration.
pub mod pages {
    /// Route name to HTML fragment URL.
    pub const ROUTES: &[(&str, &str)] = &[
        ("home", "_includes/pages/home.html"),
        ("arts", "_includes/pages/arts.html"),
        ("philosophy", "_includes/pages/philosophy.html"),
        ("writing", "_includes/pages/writing.html"),
        ("archives", "_includes/pages/archives.html"),
        ("bio", "_includes/pages/bio-more.html"),
    ];

    /// Page shown for an empty hash.
    pub const DEFAULT_ROUTE: &str = "home";

    /// Only page with the parallax effect enabled.
    pub const PARALLAX_ROUTE: &str = "home";

    /// Page that hosts the archive navigator.
    pub const ARCHIVES_ROUTE: &str = "archives";

    /// Fragment rendered for unknown routes.
    pub const NOT_FOUND_FRAGMENT: &str = "_includes/pages/404.html";

    /// Shown when a fragment cannot be fetched at all.
    pub const UNAVAILABLE_MESSAGE: &str = "This page is either under repair or does not exist";

    /// Fade-out duration before the content swap, in milliseconds.
    pub const FADE_OUT_MS: u32 = 300;

    /// Delay before fading the new content back in, in milliseconds.
    pub const FADE_IN_DELAY_MS: u32 = 50;

    /// Fragment URL of a page; unknown pages map to the not-found fragment.
    pub fn fragment_url(page: &str) -> &'static str {
        ROUTES
            .iter()
            .find(|(name, _)| *name == page)
            .map_or(NOT_FOUND_FRAGMENT, |(_, url)| url)
    }

    /// Menu entries in display order: (route, label).
    pub const MENU: &[(&str, &str)] = &[
        ("home", "Home"),
        ("arts", "Arts"),
        ("philosophy", "Philosophy"),
        ("writing", "Writing"),
        ("archives", "Archives"),
        ("bio", "Bio"),
    ];
}

// =============================================================================
// Theme
// =============================================================================

/// Dark/light mode configuration.
pub mod theme {
    /// localStorage key holding `"true"` or `"false"`.
    pub const STORAGE_KEY: &str = "darkModeEnabled";

    /// Classes toggled on the document element.
    pub const DARK_CLASS: &str = "dark-mode";
    pub const LIGHT_CLASS: &str = "light-mode";
}

// =============================================================================
// Lazy Loading
// =============================================================================

/// Intersection-based lazy loading of inserted page content.
pub mod lazy {
    /// Visible fraction that triggers loading.
    pub const THRESHOLD: f64 = 0.1;

    /// Attribute set once an element has been handled.
    pub const LOADED_ATTR: &str = "data-lazy-loaded";
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
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
