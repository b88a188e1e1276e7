//! View models: remote collection state, local detail paging, and
//! UI-agnostic table descriptions.

pub mod collection;
pub mod columns;
pub mod common;
pub mod detail;
pub mod page;
pub mod query;

pub use collection::{Completion, FetchTicket, RemoteCollectionView, ViewStatus};
pub use columns::{
    CollectionSpec, Column, DETAIL_PAGE_SIZE, PAGE_SIZE_OPTIONS, customers_spec,
    detail_order_columns, orders_spec,
};
pub use common::{RowEntity, TableViewModel, build_pager_view, build_table_view};
pub use detail::{DetailOrdersSubview, DetailStatus, OrdersRequest};
pub use page::Page;
pub use query::{QueryState, Sort, SortDirection};
