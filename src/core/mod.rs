//! Browser-independent application logic.
//!
//! This module provides:
//! - [`RepoClient`] over a [`Transport`] with a TTL [`cache`]
//! - [`frontmatter`] parsing and recursive [`search`]
//! - the archive [`Navigator`] and the page-level [`SpaRouter`]
//! - the dark-mode [`theme`] preference
//!
//! Everything that touches the browser is reached through a capability trait
//! (`Transport`, `Timer`, `Viewport`, `PageHost`, `PreferenceStore`), so the
//! logic here runs under plain host tests.

pub mod cache;
pub mod cancel;
pub mod clock;
pub mod error;
pub mod frontmatter;
pub mod navigator;
pub mod router;
pub mod search;
pub mod source;
pub mod theme;

#[cfg(test)]
pub mod testing;

pub use navigator::{Navigator, Viewport};
pub use router::{PageContent, PageHost, SpaRouter};
pub use source::RepoClient;
