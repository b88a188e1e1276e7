//! Terminal user interface for orderdesk.
//!
//! Two routed tables (Customers, Orders) backed by remote collection views,
//! a customer detail popup, help and quit confirmation. Fetches run on a
//! tokio runtime; their results come back through the UI event channel.

mod app;
mod event;
mod fetch;
mod input;
mod navigable;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use fetch::Sources;
pub use state::{AppState, FetchCommand, PopupState};
