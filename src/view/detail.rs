//! Customer → orders drill-down with client-side pagination.
//!
//! All orders of the customer are fetched once through the per-customer
//! endpoint; paging afterwards is local slicing and never hits the backend.

use tracing::{debug, warn};

use crate::api::{Customer, CustomerOrder};
use crate::error::ApiError;

/// Load state of the detail order list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    Ready,
    Error(String),
}

/// Request for the orders of one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersRequest {
    pub customer_id: String,
}

/// Detail popup state for one selected customer.
#[derive(Debug)]
pub struct DetailOrdersSubview {
    customer: Customer,
    orders: Vec<CustomerOrder>,
    status: DetailStatus,
    page_index: usize,
    page_size: usize,
}

impl DetailOrdersSubview {
    /// Opens the subview for `customer` on its first page and returns the
    /// request for the customer's orders.
    pub fn open(customer: Customer, page_size: usize) -> (Self, OrdersRequest) {
        let request = OrdersRequest {
            customer_id: customer.id.clone(),
        };
        let view = Self {
            customer,
            orders: Vec::new(),
            status: DetailStatus::Loading,
            page_index: 0,
            page_size: page_size.max(1),
        };
        (view, request)
    }

    /// Applies a fetch outcome. Results for another customer are discarded.
    /// Returns whether the outcome was applied.
    pub fn complete(
        &mut self,
        customer_id: &str,
        outcome: Result<Vec<CustomerOrder>, ApiError>,
    ) -> bool {
        if customer_id != self.customer.id {
            debug!(customer_id, current = %self.customer.id, "discarding orders of another customer");
            return false;
        }
        match outcome {
            Ok(orders) => {
                debug!(customer_id, orders = orders.len(), "customer orders loaded");
                self.orders = orders;
                self.status = DetailStatus::Ready;
            }
            Err(e) => {
                warn!(customer_id, error = %e, "failed to load customer orders");
                self.status = DetailStatus::Error(e.to_string());
            }
        }
        self.page_index = 0;
        true
    }

    /// Re-requests the orders of the current customer.
    pub fn retry(&mut self) -> OrdersRequest {
        self.status = DetailStatus::Loading;
        OrdersRequest {
            customer_id: self.customer.id.clone(),
        }
    }

    /// Same acceptance rule as the remote views: back always, forward one
    /// page while more rows exist. Returns whether the page changed.
    pub fn set_page(&mut self, next: usize) -> bool {
        let current = self.page_index;
        let accepted = next < current || (next == current + 1 && self.has_more());
        if accepted {
            self.page_index = next;
        }
        accepted
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page_index + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.page_index.checked_sub(1) {
            Some(prev) => self.set_page(prev),
            None => false,
        }
    }

    pub fn has_more(&self) -> bool {
        (self.page_index + 1) * self.page_size < self.orders.len()
    }

    /// Orders on the current page.
    pub fn visible(&self) -> &[CustomerOrder] {
        let start = (self.page_index * self.page_size).min(self.orders.len());
        let end = (start + self.page_size).min(self.orders.len());
        &self.orders[start..end]
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn total(&self) -> usize {
        self.orders.len()
    }

    /// `"11–20 of 23"`.
    pub fn range_label(&self) -> String {
        let shown = self.visible().len();
        if shown == 0 {
            return format!("0 of {}", self.total());
        }
        let from = self.page_index * self.page_size + 1;
        format!("{}–{} of {}", from, from + shown - 1, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Order;

    fn customer(id: &str) -> Customer {
        Customer {
            id: id.to_string(),
            company_name: format!("{} Ltd", id),
            contact_name: "Maria Anders".to_string(),
            contact_title: None,
            address: None,
            city: Some("Berlin".to_string()),
            region: None,
            postal_code: None,
            country: Some("Germany".to_string()),
            phone: Some("030-0074321".to_string()),
            fax: None,
        }
    }

    fn orders(n: i64) -> Vec<CustomerOrder> {
        (0..n)
            .map(|id| CustomerOrder {
                order: Order {
                    id,
                    customer_id: "ALFKI".to_string(),
                    employee_id: None,
                    order_date: None,
                    required_date: None,
                    shipped_date: None,
                    ship_via: None,
                    freight: None,
                    ship_name: None,
                    ship_address: None,
                    ship_city: None,
                    ship_region: None,
                    ship_postal_code: None,
                    ship_country: None,
                },
                order_details: vec![],
            })
            .collect()
    }

    #[test]
    fn open_starts_loading_on_first_page() {
        let (view, request) = DetailOrdersSubview::open(customer("ALFKI"), 10);
        assert_eq!(request.customer_id, "ALFKI");
        assert_eq!(view.status(), &DetailStatus::Loading);
        assert_eq!(view.page_index(), 0);
        assert!(view.visible().is_empty());
    }

    #[test]
    fn paginates_locally() {
        let (mut view, _) = DetailOrdersSubview::open(customer("ALFKI"), 10);
        assert!(view.complete("ALFKI", Ok(orders(23))));

        assert_eq!(view.visible().len(), 10);
        assert!(view.has_more());
        assert!(view.next_page());
        assert_eq!(view.visible()[0].order.id, 10);
        assert!(view.next_page());
        assert_eq!(view.visible().len(), 3);
        assert!(!view.has_more());
        assert!(!view.next_page());
        assert_eq!(view.range_label(), "21–23 of 23");

        assert!(view.set_page(0));
        assert_eq!(view.page_index(), 0);
        assert!(!view.prev_page());
    }

    #[test]
    fn exact_multiple_has_no_extra_page() {
        let (mut view, _) = DetailOrdersSubview::open(customer("ALFKI"), 10);
        view.complete("ALFKI", Ok(orders(20)));
        assert!(view.next_page());
        assert!(!view.has_more());
    }

    #[test]
    fn result_for_other_customer_is_discarded() {
        let (mut view, _) = DetailOrdersSubview::open(customer("ALFKI"), 10);
        assert!(!view.complete("ANATR", Ok(orders(5))));
        assert_eq!(view.status(), &DetailStatus::Loading);
        assert_eq!(view.total(), 0);
    }

    #[test]
    fn failure_then_retry() {
        let (mut view, _) = DetailOrdersSubview::open(customer("ALFKI"), 10);
        view.complete(
            "ALFKI",
            Err(ApiError::Status {
                status: 404,
                body: "not found".to_string(),
            }),
        );
        assert!(matches!(view.status(), DetailStatus::Error(_)));
        let request = view.retry();
        assert_eq!(request.customer_id, "ALFKI");
        assert_eq!(view.status(), &DetailStatus::Loading);
    }

    #[test]
    fn empty_result_is_ready() {
        let (mut view, _) = DetailOrdersSubview::open(customer("ALFKI"), 10);
        view.complete("ALFKI", Ok(vec![]));
        assert_eq!(view.status(), &DetailStatus::Ready);
        assert_eq!(view.range_label(), "0 of 0");
    }
}
