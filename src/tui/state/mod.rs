//! Application state management.

mod app_state;

pub use app_state::*;

use crate::view::{FetchTicket, OrdersRequest};

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the Customers country filter.
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Orders of the selected customer (see `AppState::detail`).
    CustomerDetail,
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn is_detail_open(&self) -> bool {
        matches!(self, Self::CustomerDetail)
    }
}

/// A fetch the app must run and post back as an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    Customers(FetchTicket),
    Orders(FetchTicket),
    CustomerOrders(OrdersRequest),
}

/// View operation dispatched to whichever route is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewIntent {
    NextPage,
    PrevPage,
    SortNextColumn,
    ReverseSort,
    LargerPageSize,
    SmallerPageSize,
    Retry,
}
