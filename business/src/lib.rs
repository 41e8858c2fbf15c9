//! State and rules behind the formkit widgets.
//!
//! Nothing here draws. The `formkit-ui` crate renders these types with egui
//! and feeds user input back through the transition methods.

pub mod error;
pub mod mask;
pub mod table;

pub use error::{MaskError, PropsError, TableConfigError};
pub use mask::{DEFAULT_MASK_PLACEHOLDER, Mask, MaskedValue};
pub use table::{
    CellContent, CellKind, CellView, ColumnAlign, ColumnDef, DELETE_KEY, EDIT_KEY, LayoutColumn,
    MountedTable, OpenRow, Row, RowAction, RowActions, RowView, SortDirection, SortOrder,
    SortState, TableEvent, TableHandler, TableLayout, TableProps, TableState, dispatch,
    format_cell, mount_json,
};
