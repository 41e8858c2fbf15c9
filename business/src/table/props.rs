//! Table props in their JSON form.
//!
//! ```json
//! {
//!   "columns": [{ "key": "name", "value": "Name", "width": 100, "filter": true }],
//!   "rows": [{ "name": "Ada" }],
//!   "defaultOrder": { "key": "name", "order": "ASC" }
//! }
//! ```

use serde::Deserialize;

use super::column::ColumnDef;
use super::layout::TableLayout;
use super::row::Row;
use super::sort::SortOrder;
use super::state::TableState;
use crate::error::{PropsError, TableConfigError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    #[serde(default)]
    pub rows: Option<Vec<Row>>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnDef>>,
    #[serde(default)]
    pub default_order: Option<SortOrder>,
}

/// Everything a table needs once its props passed validation.
#[derive(Debug, Clone)]
pub struct MountedTable {
    pub layout: TableLayout,
    pub rows: Vec<Row>,
    pub state: TableState,
}

impl TableProps {
    pub fn from_json(json: &str) -> Result<Self, PropsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the props and builds the initial state.
    pub fn mount(self) -> Result<MountedTable, TableConfigError> {
        let rows = self.rows.ok_or(TableConfigError::MissingRows)?;
        let columns = self.columns.ok_or(TableConfigError::MissingColumns)?;
        let layout = TableLayout::new(columns)?;

        let unmatched = layout.unmatched_keys(&rows);
        if !unmatched.is_empty() {
            log::debug!("Row fields without a column are not shown: {unmatched:?}");
        }

        let state = TableState::for_layout(&layout, self.default_order.as_ref());
        Ok(MountedTable {
            layout,
            rows,
            state,
        })
    }
}

/// Parses and mounts table props in one go.
pub fn mount_json(json: &str) -> Result<MountedTable, PropsError> {
    Ok(TableProps::from_json(json)?.mount()?)
}
