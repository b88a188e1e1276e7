//! Request bodies for the query endpoints.
//!
//! Both endpoints take `skip`/`take` paging and exactly one of
//! `orderBy`/`orderByDesc`. [`SortParams`] encodes that constraint.

use serde::Serialize;

use crate::view::{QueryState, SortDirection};

/// Sort field serialized as either `orderBy` or `orderByDesc`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SortParams {
    #[serde(rename = "orderBy")]
    Asc(String),
    #[serde(rename = "orderByDesc")]
    Desc(String),
}

impl SortParams {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc(field.to_string()),
            SortDirection::Desc => Self::Desc(field.to_string()),
        }
    }
}

/// Body of `POST /query/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    pub skip: usize,
    pub take: usize,
    #[serde(flatten)]
    pub sort: SortParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_starts_with: Option<String>,
}

impl From<&QueryState> for CustomerQuery {
    fn from(query: &QueryState) -> Self {
        let filter = query.filter_text.trim();
        Self {
            skip: query.skip(),
            take: query.take(),
            sort: SortParams::new(&query.sort.field, query.sort.direction),
            country_starts_with: (!filter.is_empty()).then(|| filter.to_string()),
        }
    }
}

/// Body of `POST /query/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    pub skip: usize,
    pub take: usize,
    #[serde(flatten)]
    pub sort: SortParams,
}

impl From<&QueryState> for OrderQuery {
    fn from(query: &QueryState) -> Self {
        Self {
            skip: query.skip(),
            take: query.take(),
            sort: SortParams::new(&query.sort.field, query.sort.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Sort;
    use serde_json::json;

    #[test]
    fn customer_query_serializes_order_by_and_omits_empty_filter() {
        let query = QueryState::new(Sort::asc("companyName"), 10);
        let body = serde_json::to_value(CustomerQuery::from(&query)).unwrap();
        assert_eq!(
            body,
            json!({"skip": 0, "take": 10, "orderBy": "companyName"})
        );
    }

    #[test]
    fn customer_query_descending_with_filter() {
        let sort = Sort {
            field: "country".to_string(),
            direction: SortDirection::Desc,
        };
        let mut query = QueryState::new(sort, 25);
        query.page_index = 2;
        query.filter_text = " Ger ".to_string();
        let body = serde_json::to_value(CustomerQuery::from(&query)).unwrap();
        assert_eq!(
            body,
            json!({"skip": 50, "take": 25, "orderByDesc": "country", "countryStartsWith": "Ger"})
        );
        assert!(body.get("orderBy").is_none());
    }

    #[test]
    fn order_query_ignores_filter_text() {
        let mut query = QueryState::new(Sort::asc("orderDate"), 10);
        query.filter_text = "ignored".to_string();
        let body = serde_json::to_value(OrderQuery::from(&query)).unwrap();
        assert_eq!(body, json!({"skip": 0, "take": 10, "orderBy": "orderDate"}));
    }
}
