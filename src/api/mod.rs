//! Backend API: wire types, query bodies, and the HTTP client.

mod client;
mod query;
mod types;

pub use client::ApiClient;
pub use query::{CustomerQuery, OrderQuery, SortParams};
pub use types::{
    ApiResponse, Customer, CustomerOrder, CustomerOrdersResponse, Order, OrderLine,
};
