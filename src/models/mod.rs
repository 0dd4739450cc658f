//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`TreeEntry`] - Remote repository listing entries
//! - [`Frontmatter`] - File metadata block
//! - [`Route`], [`ArchiveTarget`] - Hash-based navigation
//! - [`NavigatorView`], [`FileView`], [`Crumb`] - Archive navigator view state
//! - [`SearchResultTree`] - Folded deep-search results
//! - [`Theme`] - Dark/light mode

mod entry;
mod frontmatter;
mod navigator;
mod route;
mod search;
mod theme;

pub use entry::{RawEntry, TreeEntry, is_markdown_path};
pub use frontmatter::Frontmatter;
pub use navigator::{Crumb, FileView, NavigatorView, PreviousState, breadcrumb, path_segments};
pub use route::{ArchiveTarget, Route};
pub use search::{ResultRow, SearchResultTree};
pub use theme::Theme;
