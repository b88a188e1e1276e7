//! Main application state.

use tracing::info;

use crate::api::{Customer, CustomerOrder, Order};
use crate::error::ApiError;
use crate::route::Route;
use crate::theme::{Theme, ThemeMode};
use crate::view::{
    Completion, DETAIL_PAGE_SIZE, DetailOrdersSubview, FetchTicket, Page, RemoteCollectionView,
    customers_spec, orders_spec,
};

use crate::tui::navigable::{NavigableTable, TableCursor};
use super::{FetchCommand, InputMode, PopupState, ViewIntent};

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Route currently on screen.
    pub route: Route,
    pub customers: RemoteCollectionView<Customer>,
    pub orders: RemoteCollectionView<Order>,
    pub customers_cursor: TableCursor,
    pub orders_cursor: TableCursor,
    /// Customer detail subview while its popup is open.
    pub detail: Option<DetailOrdersSubview>,
    /// Active popup state. Only one popup can be open at a time.
    pub popup: PopupState,
    pub input_mode: InputMode,
    /// Filter input buffer.
    pub filter_input: String,
    /// Temporary status message shown in the header (e.g., why an action was blocked).
    pub status_message: Option<String>,
    pub theme: Theme,
}

impl AppState {
    pub fn new(route: Route, page_size: usize, theme: Theme) -> Self {
        Self {
            route,
            customers: RemoteCollectionView::new(customers_spec(page_size)),
            orders: RemoteCollectionView::new(orders_spec(page_size)),
            customers_cursor: TableCursor::default(),
            orders_cursor: TableCursor::default(),
            detail: None,
            popup: PopupState::None,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            status_message: None,
            theme,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Issues the first fetch of the initial route.
    pub fn start(&mut self) -> Option<FetchCommand> {
        self.start_route(self.route)
    }

    /// Shows `route`. Its view fetches the first time it is shown and keeps
    /// its state afterwards.
    pub fn switch_route(&mut self, route: Route) -> Option<FetchCommand> {
        if self.route == route {
            return None;
        }
        info!(from = self.route.path(), to = route.path(), "route changed");
        self.route = route;
        self.filter_input = self.customers.query().filter_text.clone();
        self.start_route(route)
    }

    fn start_route(&mut self, route: Route) -> Option<FetchCommand> {
        match route {
            Route::Customers => self.customers.start().map(FetchCommand::Customers),
            Route::Orders => self.orders.start().map(FetchCommand::Orders),
        }
    }

    /// Runs `intent` against the active route's view.
    pub fn apply_intent(&mut self, intent: ViewIntent) -> Option<FetchCommand> {
        let command = match self.route {
            Route::Customers => run_intent(&mut self.customers, intent).map(FetchCommand::Customers),
            Route::Orders => run_intent(&mut self.orders, intent).map(FetchCommand::Orders),
        };
        if command.is_some() && intent != ViewIntent::Retry {
            self.active_cursor_mut().home();
        }
        command
    }

    /// Commits `filter_input` as the Customers country filter.
    pub fn commit_filter(&mut self) -> Option<FetchCommand> {
        let command = self
            .customers
            .set_filter_text(&self.filter_input)
            .map(FetchCommand::Customers);
        self.filter_input = self.customers.query().filter_text.clone();
        if command.is_some() {
            self.customers_cursor.home();
        }
        command
    }

    /// Opens the detail popup for the customer under the cursor.
    pub fn open_customer_detail(&mut self) -> Option<FetchCommand> {
        if self.route != Route::Customers {
            return None;
        }
        let index = self.customers_cursor.clamped(self.customers.rows().len())?;
        let customer = self.customers.select_row(index)?.clone();
        info!(customer_id = %customer.id, "opening customer detail");
        let (detail, request) = DetailOrdersSubview::open(customer, DETAIL_PAGE_SIZE);
        self.detail = Some(detail);
        self.popup = PopupState::CustomerDetail;
        Some(FetchCommand::CustomerOrders(request))
    }

    pub fn close_popup(&mut self) {
        if self.popup.is_detail_open() {
            self.detail = None;
        }
        self.popup = PopupState::None;
    }

    pub fn active_cursor_mut(&mut self) -> &mut TableCursor {
        match self.route {
            Route::Customers => &mut self.customers_cursor,
            Route::Orders => &mut self.orders_cursor,
        }
    }

    /// Whether the active route's view has a fetch in flight.
    pub fn active_is_fetching(&self) -> bool {
        match self.route {
            Route::Customers => self.customers.is_fetching(),
            Route::Orders => self.orders.is_fetching(),
        }
    }

    // ---------------------------------------------------------------------
    // Fetch completions
    // ---------------------------------------------------------------------

    pub fn apply_customers(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Page<Customer>, ApiError>,
    ) -> Completion {
        self.customers.complete(ticket, outcome)
    }

    pub fn apply_orders(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Page<Order>, ApiError>,
    ) -> Completion {
        self.orders.complete(ticket, outcome)
    }

    /// Applies a per-customer order list. Dropped when the popup was closed
    /// or now shows another customer.
    pub fn apply_customer_orders(
        &mut self,
        customer_id: &str,
        outcome: Result<Vec<CustomerOrder>, ApiError>,
    ) -> bool {
        match self.detail.as_mut() {
            Some(detail) => detail.complete(customer_id, outcome),
            None => false,
        }
    }
}

fn run_intent<T>(view: &mut RemoteCollectionView<T>, intent: ViewIntent) -> Option<FetchTicket> {
    match intent {
        ViewIntent::NextPage => view.next_page(),
        ViewIntent::PrevPage => view.prev_page(),
        ViewIntent::SortNextColumn => view.sort_next_column(),
        ViewIntent::ReverseSort => view.reverse_sort(),
        ViewIntent::LargerPageSize => view.cycle_page_size(true),
        ViewIntent::SmallerPageSize => view.cycle_page_size(false),
        ViewIntent::Retry => Some(view.retry()),
    }
}
