//! Hash-based routing.
//!
//! URL format: `#page` for top-level pages, `#archives/{path}` for the archive
//! navigator. An empty hash selects the default page.

use crate::config::pages::{ARCHIVES_ROUTE, DEFAULT_ROUTE};
use crate::models::is_markdown_path;

/// Top-level route parsed from the URL hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// First hash segment (e.g. `home`, `archives`).
    pub page: String,
    /// Remainder after the first `/`, if non-empty.
    pub sub_path: Option<String>,
}

impl Route {
    /// Parse URL hash into Route
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim_start_matches('#');
        let (page, rest) = match hash.split_once('/') {
            Some((page, rest)) => (page, rest),
            None => (hash, ""),
        };

        let page = if page.is_empty() { DEFAULT_ROUTE } else { page };
        let sub_path = rest.trim_matches('/');

        Self {
            page: page.to_string(),
            sub_path: (!sub_path.is_empty()).then(|| sub_path.to_string()),
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> String {
        match &self.sub_path {
            Some(sub) => format!("#{}/{}", self.page, sub),
            None => format!("#{}", self.page),
        }
    }

    #[inline]
    pub fn is_archives(&self) -> bool {
        self.page == ARCHIVES_ROUTE
    }

    /// Navigator target for an `archives` route.
    pub fn archive_target(&self) -> ArchiveTarget {
        ArchiveTarget::from_sub_path(self.sub_path.as_deref())
    }
}

/// Location inside the archive navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArchiveTarget {
    /// Repository root listing
    Root,
    /// Directory listing at a path
    Folder(String),
    /// File view at a path (Markdown extension)
    File(String),
}

impl ArchiveTarget {
    /// Classify an archives sub-path. Markdown paths are files, anything else a folder.
    pub fn from_sub_path(sub_path: Option<&str>) -> Self {
        let Some(path) = sub_path.map(|p| p.trim_matches('/')).filter(|p| !p.is_empty()) else {
            return Self::Root;
        };

        if is_markdown_path(path) {
            Self::File(path.to_string())
        } else {
            Self::Folder(path.to_string())
        }
    }

    /// Directory target for a path, whatever its extension.
    pub fn folder(path: &str) -> Self {
        let path = path.trim_matches('/');
        if path.is_empty() {
            Self::Root
        } else {
            Self::Folder(path.to_string())
        }
    }

    /// Repository path of the target (`""` for root).
    pub fn path(&self) -> &str {
        match self {
            Self::Root => "",
            Self::Folder(path) | Self::File(path) => path,
        }
    }

    pub fn to_hash(&self) -> String {
        archive_hash(self.path())
    }
}

/// URL hash for a repository path inside the archives page.
pub fn archive_hash(path: &str) -> String {
    if path.is_empty() {
        format!("#{}", ARCHIVES_ROUTE)
    } else {
        format!("#{}/{}", ARCHIVES_ROUTE, path)
    }
}
