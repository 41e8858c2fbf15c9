//! Rows and their per-frame presentation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ustr::Ustr;

use super::column::ColumnAlign;

/// Field key carrying the edit action.
pub const EDIT_KEY: &str = "edit";
/// Field key carrying the delete action.
pub const DELETE_KEY: &str = "delete";

/// A table row: field key to displayable value, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Per-row action that bypasses row selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn key(self) -> &'static str {
        match self {
            Self::Edit => EDIT_KEY,
            Self::Delete => DELETE_KEY,
        }
    }
}

/// Which row actions a table offers. Both are on unless switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
}

impl Default for RowActions {
    fn default() -> Self {
        Self {
            edit: true,
            delete: true,
        }
    }
}

impl RowActions {
    pub fn none() -> Self {
        Self {
            edit: false,
            delete: false,
        }
    }

    /// The enabled action stored under `key`, if any.
    pub fn for_key(self, key: &str) -> Option<RowAction> {
        match key {
            EDIT_KEY if self.edit => Some(RowAction::Edit),
            DELETE_KEY if self.delete => Some(RowAction::Delete),
            _ => None,
        }
    }

    pub fn enabled(self) -> impl Iterator<Item = RowAction> {
        [
            self.edit.then_some(RowAction::Edit),
            self.delete.then_some(RowAction::Delete),
        ]
        .into_iter()
        .flatten()
    }
}

/// What a cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Action(RowAction),
}

/// One rendered cell of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub key: Ustr,
    pub width: u8,
    pub align: ColumnAlign,
    pub content: CellContent,
    /// Clicking the cell selects the row. False for action cells.
    pub selectable: bool,
}

impl CellView {
    /// Fraction of the table width the cell takes.
    pub fn width_fraction(&self) -> f32 {
        f32::from(self.width) / 100.0
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            CellContent::Text(text) => Some(text),
            CellContent::Action(_) => None,
        }
    }
}

/// A row ready to draw: its cells in field order with actions resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub cells: Vec<CellView>,
}

impl RowView {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.key.as_str())
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(CellView::text)
    }

    pub fn action(&self, action: RowAction) -> Option<&CellView> {
        self.cells
            .iter()
            .find(|c| c.content == CellContent::Action(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_keeps_insertion_order() {
        let row = Row::new().with("zeta", 1).with("alpha", "a").with("mid", json!(null));
        let keys: Vec<_> = row.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_row_from_json_keeps_order() {
        let row: Row = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
        let keys: Vec<_> = row.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_actions_for_key() {
        let actions = RowActions::default();
        assert_eq!(actions.for_key("edit"), Some(RowAction::Edit));
        assert_eq!(actions.for_key("delete"), Some(RowAction::Delete));
        assert_eq!(actions.for_key("name"), None);

        let no_edit = RowActions {
            edit: false,
            delete: true,
        };
        assert_eq!(no_edit.for_key("edit"), None);
        assert_eq!(no_edit.enabled().collect::<Vec<_>>(), [RowAction::Delete]);
        assert_eq!(RowActions::none().enabled().count(), 0);
    }
}
