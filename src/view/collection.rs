//! Generic paginated, sortable view over a remote collection.
//!
//! The view owns paging/sorting/filter state ([`QueryState`]) and the page
//! currently on screen. It does no I/O: every accepted intent returns a
//! [`FetchTicket`] that the caller executes against a
//! [`PageSource`](crate::source::PageSource), handing the outcome back to
//! [`RemoteCollectionView::complete`]. Outcomes whose ticket no longer matches
//! the latest `QueryState` are discarded, so responses arriving out of order
//! never replace newer data.

use tracing::{debug, warn};

use crate::error::ApiError;

use super::columns::{CollectionSpec, Column};
use super::page::Page;
use super::query::{QueryState, Sort};

/// Lifecycle of a collection view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// First fetch in flight, no rows to show.
    Loading,
    /// Refetch in flight, previous page still displayed.
    Refreshing,
    /// Page is current (possibly empty).
    Ready,
    /// Last fetch failed. Any previous page is still displayed.
    Error(String),
}

/// A fetch the caller must execute. Carries the `QueryState` it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    query: QueryState,
}

impl FetchTicket {
    pub fn query(&self) -> &QueryState {
        &self.query
    }
}

/// What [`RemoteCollectionView::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// New page is displayed.
    Applied,
    /// Fetch failed; previous page (if any) kept.
    Failed,
    /// Outcome belonged to a superseded `QueryState`.
    Discarded,
}

/// Paginated, sortable table state backed by a remote source.
#[derive(Debug)]
pub struct RemoteCollectionView<T> {
    spec: CollectionSpec<T>,
    query: QueryState,
    page: Option<Page<T>>,
    /// Query the displayed page was fetched for. Lags `query` while a fetch
    /// is in flight or after it failed.
    shown: Option<QueryState>,
    status: ViewStatus,
    /// Number of fetches issued (diagnostics and tests).
    issued: usize,
}

impl<T> RemoteCollectionView<T> {
    pub fn new(spec: CollectionSpec<T>) -> Self {
        let query = QueryState::new(spec.initial_sort.clone(), spec.page_size);
        Self {
            spec,
            query,
            page: None,
            shown: None,
            status: ViewStatus::Idle,
            issued: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Intents
    // ---------------------------------------------------------------------

    /// Issues the initial fetch. Only valid from `Idle`.
    pub fn start(&mut self) -> Option<FetchTicket> {
        if self.status != ViewStatus::Idle {
            return None;
        }
        Some(self.issue())
    }

    /// Sorts by `field`. The current field flips direction; a new field
    /// starts ascending. Always returns to the first page.
    pub fn set_sort(&mut self, field: &str) -> Option<FetchTicket> {
        if !self.spec.columns.iter().any(|c| c.key == field) {
            return None;
        }
        let sort = if self.query.sort.field == field {
            Sort {
                field: field.to_string(),
                direction: self.query.sort.direction.flipped(),
            }
        } else {
            Sort::asc(field)
        };
        self.query.sort = sort;
        self.query.page_index = 0;
        Some(self.issue())
    }

    /// Sorts by the column after the current sort column (wrapping).
    pub fn sort_next_column(&mut self) -> Option<FetchTicket> {
        let count = self.spec.columns.len();
        if count == 0 {
            return None;
        }
        let next = self
            .sort_column()
            .map(|i| (i + 1) % count)
            .unwrap_or(0);
        let field = self.spec.columns[next].key;
        self.set_sort(field)
    }

    /// Re-applies the current sort field, which flips its direction.
    pub fn reverse_sort(&mut self) -> Option<FetchTicket> {
        let field = self.query.sort.field.clone();
        self.set_sort(&field)
    }

    /// Moves to page `next`.
    ///
    /// Going back is always allowed; going forward only by one page and only
    /// while the displayed page signals more data. Anything else is a no-op.
    pub fn set_page(&mut self, next: usize) -> Option<FetchTicket> {
        let current = self.query.page_index;
        let accepted = next < current || (next == current + 1 && self.can_go_forward());
        if !accepted {
            return None;
        }
        self.query.page_index = next;
        Some(self.issue())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.query.page_index + 1)
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        let prev = self.query.page_index.checked_sub(1)?;
        self.set_page(prev)
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Option<FetchTicket> {
        if page_size == 0 {
            return None;
        }
        self.change(|q| {
            q.page_size = page_size;
            q.page_index = 0;
        })
    }

    /// Steps through the configured page size options.
    /// `forward = false` steps to the next smaller option.
    pub fn cycle_page_size(&mut self, forward: bool) -> Option<FetchTicket> {
        let options = &self.spec.page_size_options;
        if options.is_empty() {
            return None;
        }
        let current = self.query.page_size;
        let next = if forward {
            options.iter().copied().find(|&n| n > current)
        } else {
            options.iter().rev().copied().find(|&n| n < current)
        }?;
        self.set_page_size(next)
    }

    /// Sets the filter text and returns to the first page.
    /// Ignored by views that are not filterable.
    pub fn set_filter_text(&mut self, text: &str) -> Option<FetchTicket> {
        if !self.spec.filterable {
            return None;
        }
        let text = text.trim().to_string();
        self.change(|q| {
            q.filter_text = text;
            q.page_index = 0;
        })
    }

    /// Re-issues the fetch for the current `QueryState`.
    pub fn retry(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Applies a fetch outcome if it belongs to the latest `QueryState`.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<Page<T>, ApiError>) -> Completion {
        if ticket.query != self.query {
            debug!(
                view = self.spec.title,
                page = ticket.query.page_index,
                "discarding stale result"
            );
            return Completion::Discarded;
        }

        match outcome {
            Ok(page) => {
                debug!(
                    view = self.spec.title,
                    rows = page.len(),
                    has_more = page.has_more,
                    "page loaded"
                );
                self.page = Some(page);
                self.shown = Some(ticket.query);
                self.status = ViewStatus::Ready;
                Completion::Applied
            }
            Err(e) => {
                warn!(view = self.spec.title, error = %e, "fetch failed");
                self.status = ViewStatus::Error(e.to_string());
                Completion::Failed
            }
        }
    }

    /// Returns the row at `index` for a row-selecting view.
    /// The view keeps no selection; the caller owns it.
    pub fn select_row(&self, index: usize) -> Option<&T> {
        if !self.spec.row_select {
            return None;
        }
        self.rows().get(index)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn spec(&self) -> &CollectionSpec<T> {
        &self.spec
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.spec.columns
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn page(&self) -> Option<&Page<T>> {
        self.page.as_ref()
    }

    /// Rows in the order the backend returned them.
    pub fn rows(&self) -> &[T] {
        self.page.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    pub fn has_more(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.has_more)
    }

    pub fn can_go_back(&self) -> bool {
        self.query.page_index > 0
    }

    /// Forward paging is enabled only when the displayed page is current
    /// and signals more data.
    pub fn can_go_forward(&self) -> bool {
        self.has_more() && !self.is_fetching() && self.shown.as_ref() == Some(&self.query)
    }

    /// Zero-based index of the page on screen. Falls back to the requested
    /// page before anything was loaded.
    pub fn displayed_page_index(&self) -> usize {
        self.shown
            .as_ref()
            .map(|q| q.page_index)
            .unwrap_or(self.query.page_index)
    }

    /// First fetch of the view's lifetime is in flight.
    pub fn is_first_load(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.status, ViewStatus::Loading | ViewStatus::Refreshing)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Index of the column currently sorted on.
    pub fn sort_column(&self) -> Option<usize> {
        self.spec
            .columns
            .iter()
            .position(|c| c.key == self.query.sort.field)
    }

    pub fn issued_fetches(&self) -> usize {
        self.issued
    }

    /// Row range label: `"11–20 of 91"`, `"11–20 of more than 20"`, `"11–17 of 17"`.
    pub fn range_label(&self) -> String {
        let shown = self.rows().len();
        let skip = self.shown.as_ref().unwrap_or(&self.query).skip();
        if shown == 0 {
            return format!("0 of {}", skip);
        }
        let from = skip + 1;
        let to = skip + shown;
        match self.page.as_ref().and_then(|p| p.total) {
            Some(total) => format!("{}–{} of {}", from, to, total),
            None if self.has_more() => format!("{}–{} of more than {}", from, to, to),
            None => format!("{}–{} of {}", from, to, to),
        }
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Applies `f` to the query; issues a fetch only if the query changed.
    fn change(&mut self, f: impl FnOnce(&mut QueryState)) -> Option<FetchTicket> {
        let before = self.query.clone();
        f(&mut self.query);
        if self.query == before && self.status != ViewStatus::Idle {
            return None;
        }
        Some(self.issue())
    }

    fn issue(&mut self) -> FetchTicket {
        self.status = if self.page.is_some() {
            ViewStatus::Refreshing
        } else {
            ViewStatus::Loading
        };
        self.issued += 1;
        debug!(
            view = self.spec.title,
            page = self.query.page_index,
            page_size = self.query.page_size,
            sort = %self.query.sort.field,
            "fetch issued"
        );
        FetchTicket {
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::columns::{Column, customers_spec};
    use crate::view::query::SortDirection;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    fn spec() -> CollectionSpec<Row> {
        CollectionSpec {
            title: "Rows",
            columns: vec![
                Column::new("id", "ID", 6, |r: &Row| r.0.to_string()),
                Column::new("name", "Name", 10, |r: &Row| format!("row{}", r.0)),
            ],
            initial_sort: Sort::asc("id"),
            page_size: 10,
            page_size_options: vec![10, 25, 50],
            filterable: true,
            filter_label: "Name",
            row_select: true,
            empty_message: "No rows",
        }
    }

    fn rows(n: u32) -> Vec<Row> {
        (0..n).map(Row).collect()
    }

    fn full_page(n: u32) -> Result<Page<Row>, ApiError> {
        Ok(Page::from_heuristic(rows(n), 10))
    }

    fn failure() -> Result<Page<Row>, ApiError> {
        Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        })
    }

    /// View with its first page loaded.
    fn loaded(n: u32) -> RemoteCollectionView<Row> {
        let mut view = RemoteCollectionView::new(spec());
        let ticket = view.start().unwrap();
        assert_eq!(view.complete(ticket, full_page(n)), Completion::Applied);
        view
    }

    #[test]
    fn first_fetch_shows_loading_then_ready() {
        let mut view = RemoteCollectionView::new(spec());
        assert_eq!(view.status(), &ViewStatus::Idle);

        let ticket = view.start().unwrap();
        assert!(view.is_first_load());
        assert!(view.rows().is_empty());
        assert!(view.start().is_none(), "start only fires once");

        view.complete(ticket, full_page(10));
        assert_eq!(view.status(), &ViewStatus::Ready);
        assert_eq!(view.rows().len(), 10);
    }

    #[test]
    fn refetch_keeps_stale_rows_visible() {
        let mut view = loaded(10);
        let ticket = view.next_page().unwrap();
        assert_eq!(view.status(), &ViewStatus::Refreshing);
        assert!(!view.is_first_load());
        assert_eq!(view.rows().len(), 10);

        view.complete(ticket, Ok(Page::from_heuristic(vec![Row(42)], 10)));
        assert_eq!(view.rows(), &[Row(42)]);
    }

    #[test]
    fn set_sort_toggles_direction_on_same_field() {
        let mut view = loaded(10);
        let dirs: Vec<SortDirection> = (0..4)
            .map(|_| {
                view.set_sort("id").unwrap();
                view.query().sort.direction
            })
            .collect();
        assert_eq!(
            dirs,
            vec![
                SortDirection::Desc,
                SortDirection::Asc,
                SortDirection::Desc,
                SortDirection::Asc
            ]
        );
    }

    #[test]
    fn set_sort_new_field_starts_ascending_on_first_page() {
        let mut view = loaded(10);
        let t = view.set_sort("id").unwrap(); // desc
        view.complete(t, full_page(10));
        let t = view.next_page().unwrap();
        view.complete(t, full_page(10));
        assert_eq!(view.query().page_index, 1);

        view.set_sort("name").unwrap();
        assert_eq!(view.query().sort, Sort::asc("name"));
        assert_eq!(view.query().page_index, 0);
    }

    #[test]
    fn set_sort_rejects_unknown_field() {
        let mut view = loaded(10);
        assert!(view.set_sort("nope").is_none());
        assert_eq!(view.query().sort, Sort::asc("id"));
    }

    #[test]
    fn sort_next_column_wraps() {
        let mut view = loaded(10);
        view.sort_next_column().unwrap();
        assert_eq!(view.query().sort, Sort::asc("name"));
        view.sort_next_column().unwrap();
        assert_eq!(view.query().sort, Sort::asc("id"));
    }

    #[test]
    fn forward_paging_requires_has_more() {
        let mut view = loaded(7);
        assert!(!view.has_more());
        assert!(view.next_page().is_none());
        assert!(view.set_page(1).is_none());
        assert_eq!(view.query().page_index, 0);
    }

    #[test]
    fn forward_paging_waits_for_current_page() {
        let mut view = loaded(10);
        view.set_sort("name").unwrap();
        assert!(view.has_more());
        assert!(!view.can_go_forward());
        assert!(view.next_page().is_none());
    }

    #[test]
    fn forward_paging_only_one_step() {
        let mut view = loaded(10);
        assert!(view.set_page(2).is_none());
        assert!(view.set_page(1).is_some());
    }

    #[test]
    fn backward_paging_always_accepted() {
        let mut view = loaded(10);
        let t = view.next_page().unwrap();
        view.complete(t, full_page(3));
        assert!(!view.has_more());
        assert!(view.can_go_back());

        assert!(view.prev_page().is_some());
        assert_eq!(view.query().page_index, 0);
        assert!(view.prev_page().is_none(), "no page before the first");
    }

    #[test]
    fn page_size_change_resets_page_index() {
        let mut view = loaded(10);
        let t = view.next_page().unwrap();
        view.complete(t, full_page(10));
        assert_eq!(view.query().page_index, 1);

        let ticket = view.set_page_size(25).unwrap();
        assert_eq!(ticket.query().page_index, 0);
        assert_eq!(ticket.query().page_size, 25);
        assert!(view.set_page_size(0).is_none());
    }

    #[test]
    fn cycle_page_size_steps_through_options() {
        let mut view = loaded(10);
        assert_eq!(view.cycle_page_size(true).unwrap().query().page_size, 25);
        assert_eq!(view.cycle_page_size(true).unwrap().query().page_size, 50);
        assert!(view.cycle_page_size(true).is_none());
        assert_eq!(view.cycle_page_size(false).unwrap().query().page_size, 25);
    }

    #[test]
    fn filter_change_resets_page_index() {
        let mut view = loaded(10);
        let t = view.next_page().unwrap();
        view.complete(t, full_page(10));

        let ticket = view.set_filter_text("Ger").unwrap();
        assert_eq!(ticket.query().page_index, 0);
        assert_eq!(ticket.query().filter_text, "Ger");
    }

    #[test]
    fn unchanged_query_issues_no_fetch() {
        let mut view = loaded(10);
        let before = view.issued_fetches();
        assert!(view.set_page_size(10).is_none());
        assert!(view.set_filter_text("").is_none());
        assert_eq!(view.issued_fetches(), before);
    }

    #[test]
    fn filter_ignored_when_not_filterable() {
        let mut s = spec();
        s.filterable = false;
        let mut view = RemoteCollectionView::new(s);
        assert!(view.set_filter_text("x").is_none());
    }

    #[test]
    fn one_fetch_per_change() {
        let mut view = loaded(10);
        let before = view.issued_fetches();
        view.set_sort("name");
        view.set_page_size(25);
        view.set_filter_text("a");
        assert_eq!(view.issued_fetches(), before + 3);
    }

    #[test]
    fn latest_query_wins_regardless_of_arrival_order() {
        let mut view = loaded(10);
        let first = view.set_sort("name").unwrap();
        let second = view.set_page_size(25).unwrap();

        // Later request resolves first.
        assert_eq!(
            view.complete(second, Ok(Page::from_heuristic(vec![Row(2)], 25))),
            Completion::Applied
        );
        // Earlier request resolves afterwards and must not replace it.
        assert_eq!(
            view.complete(first, Ok(Page::from_heuristic(vec![Row(1)], 10))),
            Completion::Discarded
        );
        assert_eq!(view.rows(), &[Row(2)]);
        assert_eq!(view.status(), &ViewStatus::Ready);
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut view = loaded(10);
        let first = view.set_sort("name").unwrap();
        let _second = view.set_sort("name").unwrap();
        assert_eq!(view.complete(first, failure()), Completion::Discarded);
        assert_eq!(view.status(), &ViewStatus::Refreshing);
    }

    #[test]
    fn failure_keeps_previous_page() {
        let mut view = loaded(10);
        let t = view.set_sort("name").unwrap();
        assert_eq!(view.complete(t, failure()), Completion::Failed);
        assert_eq!(view.rows().len(), 10);
        assert_eq!(view.error(), Some("API error (500): boom"));
        assert!(!view.is_fetching());
    }

    #[test]
    fn failed_forward_page_does_not_skip_a_page() {
        let mut view = loaded(10);
        let t = view.next_page().unwrap();
        assert_eq!(view.complete(t, failure()), Completion::Failed);

        // Page 0 is still on screen and labelled as such.
        assert_eq!(view.rows()[0], Row(0));
        assert_eq!(view.displayed_page_index(), 0);
        assert_eq!(view.range_label(), "1–10 of more than 10");
        assert!(!view.can_go_forward());
        assert!(view.next_page().is_none());

        // Retrying asks for page 1 again, and paging resumes from there.
        let retry = view.retry();
        assert_eq!(retry.query().page_index, 1);
        view.complete(retry, full_page(10));
        assert_eq!(view.displayed_page_index(), 1);
        let next = view.next_page().unwrap();
        assert_eq!(next.query().page_index, 2);
        assert_eq!(next.query().skip(), 20);
    }

    #[test]
    fn back_paging_after_failed_forward_page() {
        let mut view = loaded(10);
        let t = view.next_page().unwrap();
        view.complete(t, failure());

        let back = view.prev_page().unwrap();
        assert_eq!(back.query().page_index, 0);
        view.complete(back, full_page(10));
        assert!(view.can_go_forward());
        assert_eq!(view.next_page().unwrap().query().page_index, 1);
    }

    #[test]
    fn first_load_failure_then_retry() {
        let mut view = RemoteCollectionView::new(spec());
        let t = view.start().unwrap();
        view.complete(t, failure());
        assert!(view.rows().is_empty());
        assert!(view.error().is_some());

        let retry = view.retry();
        assert_eq!(view.status(), &ViewStatus::Loading);
        view.complete(retry, full_page(4));
        assert_eq!(view.rows().len(), 4);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn select_row_only_when_enabled() {
        let view = loaded(3);
        assert_eq!(view.select_row(1), Some(&Row(1)));
        assert_eq!(view.select_row(3), None);

        let mut s = spec();
        s.row_select = false;
        let mut view = RemoteCollectionView::new(s);
        let t = view.start().unwrap();
        view.complete(t, full_page(3));
        assert_eq!(view.select_row(0), None);
    }

    #[test]
    fn range_label_variants() {
        let mut view = loaded(10);
        assert_eq!(view.range_label(), "1–10 of more than 10");

        let t = view.next_page().unwrap();
        view.complete(t, full_page(7));
        assert_eq!(view.range_label(), "11–17 of 17");

        let t = view.prev_page().unwrap();
        view.complete(
            t,
            Ok(Page {
                items: rows(10),
                has_more: true,
                total: Some(91),
            }),
        );
        assert_eq!(view.range_label(), "1–10 of 91");
    }

    #[test]
    fn customers_spec_builds_a_view() {
        let view = RemoteCollectionView::new(customers_spec(10));
        assert_eq!(view.query().sort.field, "companyName");
        assert_eq!(view.query().page_size, 10);
        assert_eq!(view.sort_column(), Some(1));
    }
}
