//! Archive navigator view models.

use std::sync::Arc;

use crate::config::archive::ROOT_LABEL;
use crate::models::{SearchResultTree, TreeEntry};

/// What the navigator pane currently shows. Exactly one at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigatorView {
    /// Directory listing; `entries` is `None` while the fetch is in flight.
    Listing {
        path: String,
        entries: Option<Arc<[TreeEntry]>>,
    },
    /// Rendered file content
    File(FileView),
    /// Deep search results; `results` is `None` while searching.
    SearchResults {
        term: String,
        results: Option<SearchResultTree>,
    },
    /// Inline error message shown in place of the listing
    Error(String),
}

impl Default for NavigatorView {
    fn default() -> Self {
        Self::Listing {
            path: String::new(),
            entries: None,
        }
    }
}

/// A loaded file ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileView {
    pub entry: TreeEntry,
    pub tags: Vec<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    /// Body HTML: rendered Markdown or escaped `<pre>` text.
    pub html: String,
}

/// Breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Folder to navigate to; `None` for the open file.
    pub path: Option<String>,
}

/// Location restored by "back" from a file view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviousState {
    pub current_path: Vec<String>,
    pub search_term: String,
}

/// Build breadcrumbs for a folder path and an optional open file name.
pub fn breadcrumb(segments: &[String], file: Option<&str>) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: ROOT_LABEL.to_string(),
        path: Some(String::new()),
    }];

    let mut current = String::new();
    for segment in segments {
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        crumbs.push(Crumb {
            label: segment.clone(),
            path: Some(current.clone()),
        });
    }

    if let Some(name) = file {
        crumbs.push(Crumb {
            label: name.to_string(),
            path: None,
        });
    }

    crumbs
}

/// Split a repository path into non-empty segments.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
