//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a
//! specific rendering framework. The TUI maps them to ratatui widgets.

use crate::api::{Customer, CustomerOrder, Order};
use crate::fmt::truncate;

use super::collection::{RemoteCollectionView, ViewStatus};

/// Row entity with a stable identity.
pub trait RowEntity {
    fn row_id(&self) -> String;
}

impl RowEntity for Customer {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

impl RowEntity for Order {
    fn row_id(&self) -> String {
        self.id.to_string()
    }
}

impl RowEntity for CustomerOrder {
    fn row_id(&self) -> String {
        self.order.id.to_string()
    }
}

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Rows of a page that is being replaced (TUI: dimmed).
    Stale,
}

/// One table row.
#[derive(Debug, Clone)]
pub struct ViewRow {
    pub id: String,
    pub cells: Vec<String>,
    pub style: RowStyleClass,
}

/// What to show instead of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty(String),
    /// First load failed; nothing valid to show.
    Error(String),
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow>,
    pub placeholder: Option<Placeholder>,
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
}

/// Pagination footer data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerViewModel {
    pub page_number: usize,
    pub page_size: usize,
    pub range: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub fetching: bool,
    /// Error of the last refetch while an older page stays on screen.
    pub error: Option<String>,
}

/// Builds the table view model of a collection view.
pub fn build_table_view<T: RowEntity>(view: &RemoteCollectionView<T>) -> TableViewModel {
    let spec = view.spec();
    let row_style = if view.is_fetching() {
        RowStyleClass::Stale
    } else {
        RowStyleClass::Normal
    };

    let rows: Vec<ViewRow> = view
        .rows()
        .iter()
        .map(|row| ViewRow {
            id: row.row_id(),
            cells: view
                .columns()
                .iter()
                .map(|c| truncate(&c.cell(row), c.width as usize))
                .collect(),
            style: row_style,
        })
        .collect();

    let placeholder = match view.status() {
        ViewStatus::Idle | ViewStatus::Loading => Some(Placeholder::Loading),
        ViewStatus::Error(msg) if rows.is_empty() && view.page().is_none() => {
            Some(Placeholder::Error(msg.clone()))
        }
        _ if rows.is_empty() => Some(Placeholder::Empty(spec.empty_message.to_string())),
        _ => None,
    };

    let title = if view.query().filter_text.is_empty() {
        spec.title.to_string()
    } else {
        format!(
            "{} ({}: {})",
            spec.title,
            spec.filter_label,
            view.query().filter_text
        )
    };

    TableViewModel {
        title,
        headers: view.columns().iter().map(|c| c.header.to_string()).collect(),
        widths: view.columns().iter().map(|c| c.width).collect(),
        rows,
        placeholder,
        sort_column: view.sort_column(),
        sort_ascending: view.query().sort.direction.is_ascending(),
    }
}

/// Builds the pagination footer of a collection view.
pub fn build_pager_view<T>(view: &RemoteCollectionView<T>) -> PagerViewModel {
    let error = match view.status() {
        ViewStatus::Error(msg) if view.page().is_some() => Some(msg.clone()),
        _ => None,
    };
    PagerViewModel {
        page_number: view.displayed_page_index() + 1,
        page_size: view.query().page_size,
        range: view.range_label(),
        can_go_back: view.can_go_back(),
        can_go_forward: view.can_go_forward(),
        fetching: view.is_fetching() && !view.is_first_load(),
        error,
    }
}
