//! Cell rendering functions for the sortable table.

use egui::{Button, Label, Sense, Stroke, Ui};
use formkit_business::{CellContent, CellView, RowAction};

use super::columns::cell_layout;

pub const EDIT_ICON: &str = "✏";
pub const DELETE_ICON: &str = "🗑";

/// What a click on a cell asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClick {
    Select,
    Action(RowAction),
}

/// Renders one cell and reports a click on it.
///
/// Text cells are clickable over their whole area when selectable. Action
/// cells only react to their icon.
#[inline]
pub fn render_cell(ui: &mut Ui, cell: &CellView, id: egui::Id) -> Option<CellClick> {
    let area = cell
        .selectable
        .then(|| ui.interact(ui.max_rect(), id, Sense::click()));

    let clicked = ui
        .with_layout(cell_layout(cell.align), |ui| match &cell.content {
            CellContent::Text(text) => {
                let sense = if cell.selectable {
                    Sense::click()
                } else {
                    Sense::hover()
                };
                let label = ui.add(Label::new(text.as_str()).sense(sense).selectable(false).truncate());
                (cell.selectable && label.clicked()).then_some(CellClick::Select)
            }
            CellContent::Action(action) => render_action_button(ui, *action).then_some(CellClick::Action(*action)),
        })
        .inner;

    draw_cell_bottom_border(ui);

    clicked.or_else(|| {
        area.filter(egui::Response::clicked)
            .map(|_| CellClick::Select)
    })
}

/// Renders an edit or delete icon. Returns `true` if it was clicked.
#[inline]
pub fn render_action_button(ui: &mut Ui, action: RowAction) -> bool {
    let (icon, hover) = match action {
        RowAction::Edit => (EDIT_ICON, "Edit"),
        RowAction::Delete => (DELETE_ICON, "Delete"),
    };
    ui.add(Button::new(icon).frame(false))
        .on_hover_text(hover)
        .clicked()
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
