//! Remote repository tree entries.

use serde::Deserialize;

use crate::config::archive::MARKDOWN_EXTENSIONS;

/// One node of the remote repository listing.
///
/// Identity is the slash-separated `path` from the repository root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEntry {
    File {
        name: String,
        path: String,
        /// Raw content URL; absent for entries the host cannot serve directly.
        download_url: Option<String>,
    },
    Directory {
        name: String,
        path: String,
    },
}

impl TreeEntry {
    pub fn file(
        name: impl Into<String>,
        path: impl Into<String>,
        download_url: Option<String>,
    ) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
            download_url,
        }
    }

    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Directory {
            name: name.into(),
            path: path.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Directory { name, .. } => name,
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        match self {
            Self::File { path, .. } | Self::Directory { path, .. } => path,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Whether the entry is a file rendered as Markdown.
    pub fn is_markdown(&self) -> bool {
        !self.is_dir() && is_markdown_path(self.name())
    }
}

/// Whether a path ends in one of the Markdown extensions.
pub fn is_markdown_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    MARKDOWN_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Listing item as served by the contents API.
#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl RawEntry {
    /// Convert to a [`TreeEntry`]; symlinks and submodules yield `None`.
    pub fn into_entry(self) -> Option<TreeEntry> {
        match self.kind.as_str() {
            "file" => Some(TreeEntry::File {
                name: self.name,
                path: self.path,
                download_url: self.download_url,
            }),
            "dir" => Some(TreeEntry::Directory {
                name: self.name,
                path: self.path,
            }),
            _ => None,
        }
    }
}
