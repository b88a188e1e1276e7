//! Wire types returned by the backend API.

use serde::{Deserialize, Serialize};

/// Envelope returned by the paginated query endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Offset of the first returned row (echo of `skip`).
    #[serde(default)]
    pub offset: u64,
    /// Total row count, when the backend reports one.
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub contact_name: String,
    pub contact_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub customer_id: String,
    pub employee_id: Option<i64>,
    pub order_date: Option<String>,
    pub required_date: Option<String>,
    pub shipped_date: Option<String>,
    pub ship_via: Option<i64>,
    pub freight: Option<f64>,
    pub ship_name: Option<String>,
    pub ship_address: Option<String>,
    pub ship_city: Option<String>,
    pub ship_region: Option<String>,
    pub ship_postal_code: Option<String>,
    pub ship_country: Option<String>,
}

/// One line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub order_id: i64,
    pub product_id: i64,
    pub unit_price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub discount: f64,
}

impl OrderLine {
    /// Line amount after discount.
    pub fn amount(&self) -> f64 {
        self.unit_price * self.quantity as f64 * (1.0 - self.discount)
    }
}

/// An order with its line items, as returned by the per-customer endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrder {
    pub order: Order,
    #[serde(default)]
    pub order_details: Vec<OrderLine>,
}

impl CustomerOrder {
    /// Sum of all line amounts.
    pub fn amount(&self) -> f64 {
        self.order_details
            .iter()
            .fold(0.0, |acc, line| acc + line.amount())
    }
}

/// Response of `GET /customers/{id}/orders`. Full result, no paging.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerOrdersResponse {
    #[serde(default, alias = "orders")]
    pub results: Vec<CustomerOrder>,
}
