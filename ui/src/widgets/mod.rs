pub mod masked_field;
pub mod table;

pub use masked_field::{MaskedField, masked_field};
pub use table::{SortableTable, TableResponse, sortable_table};
