//! Sortable table model.
//!
//! - `column`: column descriptors and their JSON form
//! - `layout`: mount-time validation and row presentation
//! - `sort`: the header click sort cycle
//! - `state`: per-table interaction state (sort, expanded row)
//! - `row`: rows, row actions and the per-frame row view
//! - `format`: cell text formatting
//! - `event`: events reported to the table owner
//! - `props`: JSON props and mounting

pub mod column;
pub mod event;
pub mod format;
pub mod layout;
pub mod props;
pub mod row;
pub mod sort;
pub mod state;

pub use column::{CellKind, ColumnAlign, ColumnDef};
pub use event::{TableEvent, TableHandler, dispatch};
pub use format::format_cell;
pub use layout::{LayoutColumn, TableLayout, is_action_key};
pub use props::{MountedTable, TableProps, mount_json};
pub use row::{CellContent, CellView, DELETE_KEY, EDIT_KEY, Row, RowAction, RowActions, RowView};
pub use sort::{SortDirection, SortOrder, SortState};
pub use state::{OpenRow, TableState};
