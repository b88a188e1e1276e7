//! TUI widgets.

mod collection;
mod customer_detail;
mod detail_common;
mod header;
mod help;
mod quit_confirm;

pub use collection::render_collection;
pub use customer_detail::render_customer_detail;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
