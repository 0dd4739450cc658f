//! UI components built with Leptos.
//!
//! - [`router`] - Application routing and the content container (main entry point)
//! - [`archive`] - Archive navigator UI
//! - [`menu`] - Page indicator dots
//! - [`theme_toggle`] - Dark-mode switch
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod archive;
pub mod icons;
pub mod menu;
pub mod router;
pub mod theme_toggle;

pub use router::AppRouter;
