//! Row cursor shared by the route tables.

use ratatui::widgets::TableState as RatatuiTableState;

/// Navigation trait for tables that have a selectable row and an optional tracked entity.
///
/// All navigation methods clear the tracked entity (forcing position-based selection)
/// and adjust the `selected` index. Clamping to valid bounds happens later in
/// [`TableCursor::resolve_selection`].
pub trait NavigableTable {
    fn selected(&self) -> usize;
    fn selected_mut(&mut self) -> &mut usize;
    /// Clear the tracked row id so the next `resolve_selection` uses position-based lookup.
    fn clear_tracked(&mut self);

    fn select_up(&mut self) {
        *self.selected_mut() = self.selected().saturating_sub(1);
        self.clear_tracked();
    }

    fn select_down(&mut self) {
        *self.selected_mut() = self.selected().saturating_add(1);
        self.clear_tracked();
    }

    fn page_up(&mut self, n: usize) {
        *self.selected_mut() = self.selected().saturating_sub(n);
        self.clear_tracked();
    }

    fn page_down(&mut self, n: usize) {
        *self.selected_mut() = self.selected().saturating_add(n);
        self.clear_tracked();
    }

    fn home(&mut self) {
        *self.selected_mut() = 0;
        self.clear_tracked();
    }

    fn end(&mut self) {
        *self.selected_mut() = usize::MAX;
        self.clear_tracked();
    }
}

/// Cursor over the rows of one route's table.
///
/// While a page is replaced by a refetch of the same query the cursor
/// follows the tracked row id; after explicit navigation it follows the
/// position.
#[derive(Debug, Default)]
pub struct TableCursor {
    pub selected: usize,
    pub tracked_id: Option<String>,
    pub ratatui_state: RatatuiTableState,
}

impl NavigableTable for TableCursor {
    fn selected(&self) -> usize {
        self.selected
    }

    fn selected_mut(&mut self) -> &mut usize {
        &mut self.selected
    }

    fn clear_tracked(&mut self) {
        self.tracked_id = None;
    }
}

impl TableCursor {
    /// Applies the tracked id, clamps the index to `row_ids`, and syncs
    /// the ratatui state.
    pub fn resolve_selection(&mut self, row_ids: &[String]) {
        if let Some(tracked) = &self.tracked_id {
            match row_ids.iter().position(|id| id == tracked) {
                Some(idx) => self.selected = idx,
                None => self.tracked_id = None,
            }
        }

        if row_ids.is_empty() {
            self.selected = 0;
            self.tracked_id = None;
            self.ratatui_state.select(None);
            return;
        }

        self.selected = self.selected.min(row_ids.len() - 1);
        self.tracked_id = Some(row_ids[self.selected].clone());
        self.ratatui_state.select(Some(self.selected));
    }

    /// Index of the selected row among `len` rows.
    pub fn clamped(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }
}
