//! Validated column layout of a table.

use std::collections::HashSet;

use ustr::Ustr;

use super::column::{CellKind, ColumnDef};
use super::format::format_cell;
use super::row::{CellContent, CellView, Row, RowActions, RowView};
use crate::error::TableConfigError;

/// Sum every table's width-shares must reach.
pub const TOTAL_WIDTH: i64 = 100;

/// A column whose width-share has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutColumn {
    pub def: ColumnDef,
    pub width: u8,
}

impl LayoutColumn {
    pub fn width_fraction(&self) -> f32 {
        f32::from(self.width) / 100.0
    }
}

/// Columns that passed mount-time validation.
///
/// Only a `TableLayout` can be drawn, so a table with a broken configuration
/// never renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    columns: Vec<LayoutColumn>,
    date_keys: HashSet<Ustr>,
    datetime_keys: HashSet<Ustr>,
}

impl TableLayout {
    /// Validates the columns.
    ///
    /// Every column needs a width-share in `(0, 100]`, keys must be unique and
    /// the shares must add up to exactly 100.
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self, TableConfigError> {
        let mut seen = HashSet::with_capacity(columns.len());
        let mut sum: i64 = 0;
        let mut checked = Vec::with_capacity(columns.len());

        for def in columns {
            let width = def
                .width
                .ok_or_else(|| TableConfigError::missing_width(def.key))?;
            let share = u8::try_from(width)
                .ok()
                .filter(|w| (1..=100).contains(w))
                .ok_or_else(|| TableConfigError::width_out_of_range(def.key, width))?;
            if !seen.insert(def.key) {
                return Err(TableConfigError::DuplicateKey { key: def.key });
            }
            sum += width;
            checked.push(LayoutColumn { def, width: share });
        }

        if sum != TOTAL_WIDTH {
            return Err(TableConfigError::WidthSumMismatch { sum });
        }

        let keys_of = |kind: CellKind| -> HashSet<Ustr> {
            checked
                .iter()
                .filter(|c| c.def.kind == kind)
                .map(|c| c.def.key)
                .collect()
        };
        let date_keys = keys_of(CellKind::Date);
        let datetime_keys = keys_of(CellKind::DateTime);

        log::debug!(
            "Mounted table layout with {} columns ({} date, {} datetime)",
            checked.len(),
            date_keys.len(),
            datetime_keys.len()
        );

        Ok(Self {
            columns: checked,
            date_keys,
            datetime_keys,
        })
    }

    pub fn columns(&self) -> &[LayoutColumn] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&LayoutColumn> {
        self.columns.iter().find(|c| c.def.key.as_str() == key)
    }

    pub fn is_date(&self, key: Ustr) -> bool {
        self.date_keys.contains(&key)
    }

    pub fn is_datetime(&self, key: Ustr) -> bool {
        self.datetime_keys.contains(&key)
    }

    /// How cells under `key` are formatted.
    fn kind_of(&self, key: Ustr) -> CellKind {
        if self.is_datetime(key) {
            CellKind::DateTime
        } else if self.is_date(key) {
            CellKind::Date
        } else {
            CellKind::Plain
        }
    }

    /// Row field keys that no column shows. Those fields are left out when
    /// rows are drawn.
    pub fn unmatched_keys<'r>(&self, rows: impl IntoIterator<Item = &'r Row>) -> Vec<Ustr> {
        let mut unmatched = Vec::new();
        for row in rows {
            for (key, _) in row.iter() {
                let key = Ustr::from(key);
                if self.column(&key).is_none() && !unmatched.contains(&key) {
                    unmatched.push(key);
                }
            }
        }
        unmatched
    }

    /// Builds the cells of one row.
    ///
    /// Cells follow the row's field order. Fields without a column are
    /// skipped. Enabled actions replace fields stored under their key, and
    /// are appended when the row lacks that key. An action only gets a cell
    /// when the layout has a column for it. The row itself is left untouched.
    pub fn present(&self, index: usize, row: &Row, actions: RowActions) -> RowView {
        let mut cells = Vec::with_capacity(self.columns.len());

        for (key, value) in row.iter() {
            let Some(column) = self.column(key) else {
                continue;
            };

            let content = match actions.for_key(key) {
                Some(action) => CellContent::Action(action),
                None => CellContent::Text(format_cell(self.kind_of(column.def.key), value)),
            };
            cells.push(cell(column, content, key));
        }

        for action in actions.enabled() {
            if row.contains_key(action.key()) {
                continue;
            }
            if let Some(column) = self.column(action.key()) {
                cells.push(cell(column, CellContent::Action(action), action.key()));
            }
        }

        RowView { index, cells }
    }
}

#[inline]
fn cell(column: &LayoutColumn, content: CellContent, key: &str) -> CellView {
    debug_assert_eq!(column.def.key.as_str(), key, "cell key must match its column");
    CellView {
        key: column.def.key,
        width: column.width,
        align: column.def.align,
        content,
        selectable: !is_action_key(key),
    }
}

/// Clicks on cells stored under an action key never select the row, even
/// when the action itself is switched off.
#[inline]
pub fn is_action_key(key: &str) -> bool {
    key == super::row::EDIT_KEY || key == super::row::DELETE_KEY
}
