//! Column sizing for the sortable table.

use egui_extras::{Size, StripBuilder};
use formkit_business::{CellView, ColumnAlign, LayoutColumn};

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 32.0;

/// Glyph shown next to a header sorted ascending.
pub const ASCENDING_ICON: &str = "⬆";
/// Glyph shown next to a header sorted descending.
pub const DESCENDING_ICON: &str = "⬇";

/// Strip size of one width-share.
#[inline]
pub fn share_size(fraction: f32) -> Size {
    Size::relative(fraction)
}

/// Adds one relative size per header column.
#[inline]
pub fn header_sizes<'a>(mut builder: StripBuilder<'a>, columns: &[LayoutColumn]) -> StripBuilder<'a> {
    for column in columns {
        builder = builder.size(share_size(column.width_fraction()));
    }
    builder
}

/// Adds one relative size per cell, in the row's own field order.
#[inline]
pub fn row_sizes<'a>(mut builder: StripBuilder<'a>, cells: &[CellView]) -> StripBuilder<'a> {
    for cell in cells {
        builder = builder.size(share_size(cell.width_fraction()));
    }
    builder
}

/// Layout placing a cell's content according to its column alignment.
#[inline]
pub fn cell_layout(align: ColumnAlign) -> egui::Layout {
    match align {
        ColumnAlign::Default | ColumnAlign::Left => egui::Layout::left_to_right(egui::Align::Center),
        ColumnAlign::Center => egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
        ColumnAlign::Right => egui::Layout::right_to_left(egui::Align::Center),
    }
}
