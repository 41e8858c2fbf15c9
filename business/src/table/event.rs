//! Events a table reports back to its owner.

use super::row::{Row, RowAction};
use super::sort::SortOrder;

/// Something the user did to a table during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A sortable header was clicked; sort rows by this order.
    SortChanged(SortOrder),
    /// A non-action cell of the row at this index was clicked.
    RowSelected(usize),
    /// The edit action of the row at this index was clicked.
    Edit(usize),
    /// The delete action of the row at this index was clicked.
    Delete(usize),
}

impl TableEvent {
    pub fn action(index: usize, action: RowAction) -> Self {
        match action {
            RowAction::Edit => Self::Edit(index),
            RowAction::Delete => Self::Delete(index),
        }
    }

    /// Row index the event refers to, if any.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            Self::SortChanged(_) => None,
            Self::RowSelected(index) | Self::Edit(index) | Self::Delete(index) => Some(*index),
        }
    }
}

/// Receives table events with the rows they refer to.
///
/// `on_edit` and `on_delete` do nothing by default, for tables that switch
/// those actions off.
pub trait TableHandler {
    fn on_sort(&mut self, order: &SortOrder);

    fn on_row_selected(&mut self, row: &Row);

    fn on_edit(&mut self, _row: &Row) {}

    fn on_delete(&mut self, _row: &Row) {}
}

/// Sends `events` to `handler`, resolving row indices against `rows`.
///
/// Events pointing past the end of `rows` are dropped.
pub fn dispatch<'a>(
    events: impl IntoIterator<Item = &'a TableEvent>,
    rows: &[Row],
    handler: &mut impl TableHandler,
) {
    for event in events {
        if let TableEvent::SortChanged(order) = event {
            handler.on_sort(order);
            continue;
        }

        let Some(row) = event.row_index().and_then(|i| rows.get(i)) else {
            log::warn!("Dropping {event:?}: no such row");
            continue;
        };
        match event {
            TableEvent::RowSelected(_) => handler.on_row_selected(row),
            TableEvent::Edit(_) => handler.on_edit(row),
            TableEvent::Delete(_) => handler.on_delete(row),
            TableEvent::SortChanged(_) => {}
        }
    }
}
