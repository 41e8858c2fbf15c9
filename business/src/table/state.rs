//! Interaction state of one mounted table.
//!
//! The UI owns a [`TableState`] per table and hands it to the widget every
//! frame. All transitions are plain methods so they can be tested without
//! drawing anything.

use super::column::ColumnDef;
use super::event::TableEvent;
use super::layout::TableLayout;
use super::sort::{SortDirection, SortOrder, SortState};

/// The single expanded row, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenRow(Option<usize>);

impl OpenRow {
    pub fn index(self) -> Option<usize> {
        self.0
    }

    pub fn is_open(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// Expands `index`, collapsing any other row, or collapses it if it was
    /// already expanded.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self(None)
        } else {
            Self(Some(index))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableState {
    pub sort: SortState,
    pub open_row: OpenRow,
}

impl TableState {
    /// Starts from the caller's default order, or idle.
    pub fn new(default_order: Option<&SortOrder>) -> Self {
        Self {
            sort: default_order.map(SortState::from_order).unwrap_or_default(),
            open_row: OpenRow::default(),
        }
    }

    /// Like [`TableState::new`], but without a default order the first column
    /// that declares a starting direction is used.
    pub fn for_layout(layout: &TableLayout, default_order: Option<&SortOrder>) -> Self {
        if default_order.is_some() {
            return Self::new(default_order);
        }

        let sort = layout
            .columns()
            .iter()
            .find(|c| c.def.order != SortDirection::None)
            .map(|c| SortState {
                key: Some(c.def.key),
                direction: c.def.order,
            })
            .unwrap_or_default();

        Self {
            sort,
            open_row: OpenRow::default(),
        }
    }

    /// Handles a header click. Returns the new order for sortable columns;
    /// other headers do nothing.
    pub fn click_header(&mut self, column: &ColumnDef) -> Option<SortOrder> {
        if !column.sortable {
            return None;
        }

        self.sort = self.sort.advance(column.key);
        let order = self.sort.order();
        log::debug!("Sort changed to {order:?}");
        Some(order)
    }

    /// Handles a click on a selectable cell of row `index`.
    pub fn select_row(&mut self, index: usize) -> TableEvent {
        self.open_row = self.open_row.toggle(index);
        TableEvent::RowSelected(index)
    }

    /// Direction arrow to show next to a header, if any.
    pub fn indicator(&self, column: &ColumnDef) -> Option<SortDirection> {
        if !column.sortable || !self.sort.is_active(column.key) {
            return None;
        }
        match self.sort.direction {
            SortDirection::None => None,
            direction => Some(direction),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort.order()
    }
}
