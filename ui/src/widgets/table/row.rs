//! Row rendering for the sortable table.

use egui::{Frame, Margin, Stroke, Ui};
use egui_extras::StripBuilder;
use formkit_business::RowView;

use super::cells::{CellClick, render_cell};
use super::columns::{ROW_HEIGHT, row_sizes};

/// Renders a single row. Returns the click on one of its cells, if any.
#[inline]
pub fn render_row(ui: &mut Ui, view: &RowView, table_id: egui::Id) -> Option<CellClick> {
    let width = ui.available_width();
    if view.cells.is_empty() {
        ui.allocate_space(egui::vec2(width, ROW_HEIGHT));
        return None;
    }

    let mut click = None;
    ui.allocate_ui(egui::vec2(width, ROW_HEIGHT), |ui| {
        row_sizes(StripBuilder::new(ui), &view.cells).horizontal(|mut strip| {
            for (column, cell) in view.cells.iter().enumerate() {
                strip.cell(|ui| {
                    let id = table_id.with(("cell", view.index, column));
                    if let Some(clicked) = render_cell(ui, cell, id) {
                        click = Some(clicked);
                    }
                });
            }
        });
    });

    click
}

/// Renders the expanded panel below an open row.
#[inline]
pub fn render_dropdown(ui: &mut Ui, add_contents: &mut dyn FnMut(&mut Ui)) {
    Frame::NONE
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(Margin::same(12))
        .corner_radius(4.0)
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
