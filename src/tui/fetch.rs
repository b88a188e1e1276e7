//! Runs fetch commands on the tokio runtime and posts the outcomes back to
//! the UI event channel.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tracing::debug;

use crate::api::{ApiClient, Customer, Order};
use crate::source::{CustomerOrdersSource, CustomerPages, OrderPages, PageSource};

use super::event::Event;
use super::state::FetchCommand;

/// The remote sources behind the two routes and the detail popup.
#[derive(Clone)]
pub struct Sources {
    pub customers: Arc<dyn PageSource<Row = Customer>>,
    pub orders: Arc<dyn PageSource<Row = Order>>,
    pub customer_orders: Arc<dyn CustomerOrdersSource>,
}

impl Sources {
    /// HTTP-backed sources sharing one client.
    pub fn http(client: ApiClient) -> Self {
        Self {
            customers: Arc::new(CustomerPages::new(client.clone())),
            orders: Arc::new(OrderPages::new(client.clone())),
            customer_orders: Arc::new(client),
        }
    }
}

/// Spawns one task per fetch command. Results are never awaited here; they
/// arrive as [`Event`]s.
pub struct Fetcher {
    handle: Handle,
    sources: Sources,
    tx: Sender<Event>,
}

impl Fetcher {
    pub fn new(handle: Handle, sources: Sources, tx: Sender<Event>) -> Self {
        Self {
            handle,
            sources,
            tx,
        }
    }

    pub fn dispatch(&self, command: FetchCommand) {
        let tx = self.tx.clone();
        match command {
            FetchCommand::Customers(ticket) => {
                let source = self.sources.customers.clone();
                self.handle.spawn(async move {
                    let outcome = source.fetch_page(ticket.query()).await;
                    if tx.send(Event::Customers(ticket, outcome)).is_err() {
                        debug!("event channel closed, dropping customers page");
                    }
                });
            }
            FetchCommand::Orders(ticket) => {
                let source = self.sources.orders.clone();
                self.handle.spawn(async move {
                    let outcome = source.fetch_page(ticket.query()).await;
                    if tx.send(Event::Orders(ticket, outcome)).is_err() {
                        debug!("event channel closed, dropping orders page");
                    }
                });
            }
            FetchCommand::CustomerOrders(request) => {
                let source = self.sources.customer_orders.clone();
                self.handle.spawn(async move {
                    let outcome = source.customer_orders(&request.customer_id).await;
                    if tx
                        .send(Event::CustomerOrders(request.customer_id, outcome))
                        .is_err()
                    {
                        debug!("event channel closed, dropping customer orders");
                    }
                });
            }
        }
    }
}
