//! Browser adapters and small helpers.
//!
//! Provides:
//! - [`BrowserTransport`] - `fetch` with timeout and abort
//! - [`BrowserTimer`] - `Date.now()` clock and `setTimeout` sleeping
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`lazy`] loading and the console [`logger`]

pub mod dom;
pub mod fetch;
pub mod format;
pub mod lazy;
pub mod logger;
pub mod markdown;
mod timer;

pub use fetch::{BrowserTransport, fetch_content};
pub use format::{tag_hint, truncate_name};
pub use markdown::{escape_html, markdown_to_html};
pub use timer::BrowserTimer;
