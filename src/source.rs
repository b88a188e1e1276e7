//! Remote fetch abstraction behind the collection views.
//!
//! A [`PageSource`] turns a [`QueryState`] into a [`Page`]; a
//! [`CustomerOrdersSource`] returns every order of one customer. The HTTP
//! implementations wrap [`ApiClient`]; tests substitute in-memory sources.

use async_trait::async_trait;

use crate::api::{ApiClient, Customer, CustomerOrder, CustomerQuery, Order, OrderQuery};
use crate::error::ApiError;
use crate::view::{Page, QueryState};

/// Source of pages for a remote collection view.
#[async_trait]
pub trait PageSource: Send + Sync {
    type Row: Send;

    async fn fetch_page(&self, query: &QueryState) -> Result<Page<Self::Row>, ApiError>;
}

/// Source of a customer's complete order list.
#[async_trait]
pub trait CustomerOrdersSource: Send + Sync {
    async fn customer_orders(&self, customer_id: &str) -> Result<Vec<CustomerOrder>, ApiError>;
}

/// Customers through `POST /query/customers`.
#[derive(Debug, Clone)]
pub struct CustomerPages {
    client: ApiClient,
}

impl CustomerPages {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for CustomerPages {
    type Row = Customer;

    async fn fetch_page(&self, query: &QueryState) -> Result<Page<Customer>, ApiError> {
        let response = self
            .client
            .query_customers(&CustomerQuery::from(query))
            .await?;
        Ok(Page::from_response(response, query.page_size))
    }
}

/// Orders through `POST /query/orders`.
#[derive(Debug, Clone)]
pub struct OrderPages {
    client: ApiClient,
}

impl OrderPages {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for OrderPages {
    type Row = Order;

    async fn fetch_page(&self, query: &QueryState) -> Result<Page<Order>, ApiError> {
        let response = self.client.query_orders(&OrderQuery::from(query)).await?;
        Ok(Page::from_response(response, query.page_size))
    }
}

#[async_trait]
impl CustomerOrdersSource for ApiClient {
    async fn customer_orders(&self, customer_id: &str) -> Result<Vec<CustomerOrder>, ApiError> {
        ApiClient::customer_orders(self, customer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::api::ApiResponse;
    use crate::view::{Completion, RemoteCollectionView, customers_spec};

    /// Serves a fixed number of customers per request, recording the bodies
    /// it was asked for. Never reports a total.
    struct FakeCustomers {
        rows_per_page: usize,
        requests: Mutex<Vec<CustomerQuery>>,
    }

    impl FakeCustomers {
        fn new(rows_per_page: usize) -> Self {
            Self {
                rows_per_page,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageSource for FakeCustomers {
        type Row = Customer;

        async fn fetch_page(&self, query: &QueryState) -> Result<Page<Customer>, ApiError> {
            let body = CustomerQuery::from(query);
            self.requests.lock().unwrap().push(body.clone());
            let results = (0..self.rows_per_page)
                .map(|i| Customer {
                    id: format!("C{:03}", body.skip + i),
                    company_name: format!("Company {}", i),
                    contact_name: String::new(),
                    contact_title: None,
                    address: None,
                    city: None,
                    region: None,
                    postal_code: None,
                    country: None,
                    phone: None,
                    fax: None,
                })
                .collect();
            let response = ApiResponse {
                offset: body.skip as u64,
                total: None,
                results,
            };
            Ok(Page::from_response(response, query.page_size))
        }
    }

    async fn first_page(rows: usize) -> (RemoteCollectionView<Customer>, FakeCustomers) {
        let source = FakeCustomers::new(rows);
        let mut view = RemoteCollectionView::new(customers_spec(10));
        let ticket = view.start().unwrap();
        let outcome = source.fetch_page(ticket.query()).await;
        assert_eq!(view.complete(ticket, outcome), Completion::Applied);
        (view, source)
    }

    #[tokio::test]
    async fn full_customer_page_signals_more() {
        let (view, source) = first_page(10).await;
        assert!(view.has_more());

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].skip, 0);
        assert_eq!(requests[0].take, 10);
        assert_eq!(
            requests[0].sort,
            crate::api::SortParams::Asc("companyName".to_string())
        );
    }

    #[tokio::test]
    async fn short_customer_page_signals_end() {
        let (mut view, _source) = first_page(7).await;
        assert!(!view.has_more());
        assert!(view.next_page().is_none());
    }

    #[tokio::test]
    async fn paging_forward_requests_next_offset() {
        let (mut view, source) = first_page(10).await;
        let ticket = view.next_page().unwrap();
        let outcome = source.fetch_page(ticket.query()).await;
        view.complete(ticket, outcome);

        assert_eq!(view.rows()[0].id, "C010");
        assert_eq!(source.requests.lock().unwrap()[1].skip, 10);
    }
}
