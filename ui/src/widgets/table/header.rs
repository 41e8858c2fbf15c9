//! Header row of the sortable table.

use egui::{Color32, Frame, Label, Margin, RichText, Sense, Ui};
use egui_extras::StripBuilder;
use formkit_business::{ColumnDef, SortDirection, SortOrder, TableLayout, TableState};

use super::columns::{ASCENDING_ICON, DESCENDING_ICON, HEADER_HEIGHT, cell_layout, header_sizes};

/// Header background color (light gray).
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
/// Header text color, dark enough for the light background in any theme.
const HEADER_TEXT_COLOR: Color32 = Color32::from_rgb(40, 40, 40);

/// Header text with the sort arrow, if the column shows one.
pub fn header_text(column: &ColumnDef, indicator: Option<SortDirection>) -> String {
    match indicator {
        Some(SortDirection::Ascending) => format!("{} {ASCENDING_ICON}", column.label),
        Some(SortDirection::Descending) => format!("{} {DESCENDING_ICON}", column.label),
        Some(SortDirection::None) | None => column.label.clone(),
    }
}

/// Renders the header and applies a click on a sortable column.
///
/// Returns the new sort order when it changed.
pub fn render_table_header(
    ui: &mut Ui,
    layout: &TableLayout,
    state: &mut TableState,
) -> Option<SortOrder> {
    let mut clicked: Option<usize> = None;
    let width = ui.available_width();

    ui.allocate_ui(egui::vec2(width, HEADER_HEIGHT), |ui| {
        Frame::NONE.fill(HEADER_BG_COLOR).show(ui, |ui| {
            header_sizes(StripBuilder::new(ui), layout.columns()).horizontal(|mut strip| {
                for (index, column) in layout.columns().iter().enumerate() {
                    let text = header_text(&column.def, state.indicator(&column.def));
                    strip.cell(|ui| {
                        if render_header_cell(ui, &column.def, text) {
                            clicked = Some(index);
                        }
                    });
                }
            });
        });
    });

    let column = clicked.and_then(|index| layout.columns().get(index))?;
    state.click_header(&column.def)
}

/// Renders a single header cell. Returns `true` when a sortable header was clicked.
#[inline]
fn render_header_cell(ui: &mut Ui, column: &ColumnDef, text: String) -> bool {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.with_layout(cell_layout(column.align), |ui| {
                let text = RichText::new(text).strong().color(HEADER_TEXT_COLOR);
                if column.sortable {
                    let response = ui
                        .add(Label::new(text).sense(Sense::click()).selectable(false))
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    response.clicked()
                } else {
                    ui.add(Label::new(text).selectable(false));
                    false
                }
            })
            .inner
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_text_with_indicator() {
        let column = ColumnDef::new("name", "Name", 100).sortable(true);
        assert_eq!(header_text(&column, None), "Name");
        assert_eq!(header_text(&column, Some(SortDirection::Ascending)), "Name ⬆");
        assert_eq!(header_text(&column, Some(SortDirection::Descending)), "Name ⬇");
    }
}
