//! Column configurations for the Customers and Orders tables and the
//! customer detail popup.

use crate::api::{Customer, CustomerOrder, Order};
use crate::fmt::{format_currency, format_date, format_opt};

use super::query::Sort;

/// Page sizes offered by the page-size control.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Fixed page size of the customer detail order list.
pub const DETAIL_PAGE_SIZE: usize = 10;

/// One table column: backend sort key, header, width and cell formatter.
pub struct Column<T> {
    /// Field name sent to the backend as the sort field.
    pub key: &'static str,
    pub header: &'static str,
    /// Preferred width in terminal cells.
    pub width: u16,
    pub render: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .finish()
    }
}

impl<T> Column<T> {
    pub const fn new(
        key: &'static str,
        header: &'static str,
        width: u16,
        render: fn(&T) -> String,
    ) -> Self {
        Self {
            key,
            header,
            width,
            render,
        }
    }

    pub fn cell(&self, row: &T) -> String {
        (self.render)(row)
    }
}

/// Construction-time configuration of a remote collection view.
#[derive(Debug, Clone)]
pub struct CollectionSpec<T> {
    pub title: &'static str,
    pub columns: Vec<Column<T>>,
    pub initial_sort: Sort,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Whether the view accepts filter text.
    pub filterable: bool,
    /// Label of the filter input, shown in the header.
    pub filter_label: &'static str,
    /// Whether rows can be selected to open a detail view.
    pub row_select: bool,
    pub empty_message: &'static str,
}

/// Customers table: filter by country prefix, rows open the detail popup.
pub fn customers_spec(page_size: usize) -> CollectionSpec<Customer> {
    CollectionSpec {
        title: "Customers",
        columns: vec![
            Column::new("id", "Customer ID", 12, |c: &Customer| c.id.clone()),
            Column::new("companyName", "Company Name", 36, |c: &Customer| {
                c.company_name.clone()
            }),
            Column::new("contactName", "Contact Name", 26, |c: &Customer| {
                c.contact_name.clone()
            }),
            Column::new("country", "Country", 14, |c: &Customer| {
                format_opt(c.country.as_deref())
            }),
            Column::new("city", "City", 16, |c: &Customer| format_opt(c.city.as_deref())),
        ],
        initial_sort: Sort::asc("companyName"),
        page_size,
        page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        filterable: true,
        filter_label: "Country",
        row_select: true,
        empty_message: "No customers found",
    }
}

/// Orders table.
pub fn orders_spec(page_size: usize) -> CollectionSpec<Order> {
    CollectionSpec {
        title: "Orders",
        columns: vec![
            Column::new("id", "Order ID", 10, |o: &Order| o.id.to_string()),
            Column::new("customerId", "Customer ID", 12, |o: &Order| {
                o.customer_id.clone()
            }),
            Column::new("orderDate", "Order Date", 12, |o: &Order| {
                format_date(o.order_date.as_deref())
            }),
            Column::new("shipCountry", "Ship Country", 14, |o: &Order| {
                format_opt(o.ship_country.as_deref())
            }),
            Column::new("freight", "Freight", 10, |o: &Order| format_currency(o.freight)),
        ],
        initial_sort: Sort::asc("orderDate"),
        page_size,
        page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        filterable: false,
        filter_label: "",
        row_select: false,
        empty_message: "No orders found",
    }
}

/// Columns of the order list inside the customer detail popup.
pub fn detail_order_columns() -> Vec<Column<CustomerOrder>> {
    vec![
        Column::new("id", "Order ID", 9, |o: &CustomerOrder| o.order.id.to_string()),
        Column::new("orderDate", "Order Date", 11, |o: &CustomerOrder| {
            format_date(o.order.order_date.as_deref())
        }),
        Column::new("requiredDate", "Required", 11, |o: &CustomerOrder| {
            format_date(o.order.required_date.as_deref())
        }),
        Column::new("shippedDate", "Shipped", 11, |o: &CustomerOrder| {
            format_date(o.order.shipped_date.as_deref())
        }),
        Column::new("shipName", "Ship Name", 24, |o: &CustomerOrder| {
            format_opt(o.order.ship_name.as_deref())
        }),
        Column::new("shipAddress", "Ship Address", 24, |o: &CustomerOrder| {
            format_opt(o.order.ship_address.as_deref())
        }),
        Column::new("shipCity", "Ship City", 14, |o: &CustomerOrder| {
            format_opt(o.order.ship_city.as_deref())
        }),
        Column::new("shipCountry", "Ship Country", 12, |o: &CustomerOrder| {
            format_opt(o.order.ship_country.as_deref())
        }),
        Column::new("shipPostalCode", "Postal Code", 11, |o: &CustomerOrder| {
            format_opt(o.order.ship_postal_code.as_deref())
        }),
        Column::new("freight", "Freight", 9, |o: &CustomerOrder| {
            format_currency(o.order.freight)
        }),
        Column::new("amount", "Amount", 11, |o: &CustomerOrder| {
            format_currency(Some(o.amount()))
        }),
    ]
}
