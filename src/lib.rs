//! orderdesk - terminal admin panel for a customers/orders backend.
//!
//! This library provides:
//! - `api` - HTTP client and wire types of the backend
//! - `view` - paginated, sortable collection views and the customer detail subview
//! - `theme` - light/dark mode persisted through a key-value store
//! - `tui` - the interactive terminal front end (feature `tui`)

pub mod api;
pub mod config;
pub mod error;
pub mod fmt;
pub mod route;
pub mod source;
pub mod theme;
#[cfg(feature = "tui")]
pub mod tui;
pub mod view;

/// Crate version, shown by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
