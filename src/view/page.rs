//! One fetched batch of rows plus a more-data signal.

use crate::api::ApiResponse;

/// A page of rows as displayed by a collection view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// More rows exist past this page. Inferred, see [`Page::from_response`].
    pub has_more: bool,
    /// Authoritative row count, when the backend reported a usable one.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    /// Builds a page whose `has_more` comes from the row-count heuristic:
    /// a full page means there is probably another one.
    pub fn from_heuristic(items: Vec<T>, requested_page_size: usize) -> Self {
        let has_more = requested_page_size > 0 && items.len() == requested_page_size;
        Self {
            items,
            has_more,
            total: None,
        }
    }

    /// Builds a page from a query response.
    ///
    /// Uses `total` when present and consistent with the returned rows
    /// (`offset + rows <= total`); falls back to the heuristic otherwise.
    pub fn from_response(response: ApiResponse<T>, requested_page_size: usize) -> Self {
        let end = response.offset + response.results.len() as u64;
        match response.total {
            Some(total) if total >= end => Self {
                has_more: end < total,
                items: response.results,
                total: Some(total),
            },
            _ => Self::from_heuristic(response.results, requested_page_size),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(offset: u64, total: Option<u64>, rows: usize) -> ApiResponse<u32> {
        ApiResponse {
            offset,
            total,
            results: (0..rows as u32).collect(),
        }
    }

    #[test]
    fn heuristic_full_page_means_more() {
        assert!(Page::from_heuristic(vec![1; 10], 10).has_more);
        assert!(!Page::from_heuristic(vec![1; 7], 10).has_more);
        assert!(!Page::<u8>::from_heuristic(vec![], 10).has_more);
    }

    #[test]
    fn authoritative_total_wins_over_heuristic() {
        // Full page but nothing left.
        let page = Page::from_response(response(80, Some(90), 10), 10);
        assert!(!page.has_more);
        assert_eq!(page.total, Some(90));

        // Short page but total says there is more (backend capped `take`).
        let page = Page::from_response(response(0, Some(91), 7), 10);
        assert!(page.has_more);
    }

    #[test]
    fn missing_or_inconsistent_total_falls_back() {
        let page = Page::from_response(response(0, None, 10), 10);
        assert!(page.has_more);
        assert_eq!(page.total, None);

        // total smaller than what was returned: not trustworthy.
        let page = Page::from_response(response(20, Some(0), 10), 10);
        assert!(page.has_more);
        assert_eq!(page.total, None);
    }
}
