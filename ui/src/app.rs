use std::cmp::Ordering;

use formkit_business::{
    CellKind, DEFAULT_MASK_PLACEHOLDER, Mask, MountedTable, OpenRow, Row, SortDirection,
    SortOrder, TableHandler, format_cell,
};
use serde_json::Value;

use crate::utils::colors::COLOR_RED;
use crate::widgets::{MaskedField, SortableTable};

/// Demo application showing a masked field and a sortable table.
pub struct FormkitApp {
    birth_date: String,
    phone: String,
    date_mask: Option<Mask>,
    phone_mask: Option<Mask>,
    table: Result<DemoTable, String>,
}

struct DemoTable {
    mounted: MountedTable,
    /// Rows in load order, restored when sorting goes back to idle.
    original_rows: Vec<Row>,
    last_event: Option<String>,
}

/// Collects what the table reported during a frame.
#[derive(Default)]
struct DemoHandler {
    sort: Option<SortOrder>,
    message: Option<String>,
}

impl TableHandler for DemoHandler {
    fn on_sort(&mut self, order: &SortOrder) {
        log::info!("Sort by {order:?}");
        self.sort = Some(order.clone());
        self.message = Some(format!("Sort: {:?} {:?}", order.key, order.order));
    }

    fn on_row_selected(&mut self, row: &Row) {
        log::info!("Row selected: {row:?}");
        self.message = Some(format!("Selected: {}", row_title(row)));
    }

    fn on_edit(&mut self, row: &Row) {
        log::info!("Edit requested: {row:?}");
        self.message = Some(format!("Edit: {}", row_title(row)));
    }

    fn on_delete(&mut self, row: &Row) {
        log::info!("Delete requested: {row:?}");
        self.message = Some(format!("Delete: {}", row_title(row)));
    }
}

fn row_title(row: &Row) -> String {
    row.iter()
        .next()
        .map(|(_, value)| format_cell(CellKind::Plain, value))
        .unwrap_or_default()
}

impl FormkitApp {
    /// Called once before the first frame.
    pub fn new(table: anyhow::Result<MountedTable>) -> Self {
        let table = table
            .map(|mut mounted| {
                let original_rows = mounted.rows.clone();
                sort_rows(&mut mounted.rows, &mounted.state.sort_order());
                DemoTable {
                    mounted,
                    original_rows,
                    last_event: None,
                }
            })
            .map_err(|err| {
                log::error!("Table not mounted: {err:#}");
                format!("{err:#}")
            });

        Self {
            birth_date: String::new(),
            phone: String::new(),
            date_mask: demo_mask("99/99/9999", Some(DEFAULT_MASK_PLACEHOLDER)),
            phone_mask: demo_mask("(99) 99999-9999", None),
            table,
        }
    }

    /// Raw value of the birth date field.
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Formkit");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let mut field = MaskedField::new(&mut self.birth_date)
                .title("Birth date")
                .required(true)
                .desired_width(120.0)
                .id_salt("birth_date");
            if let Some(mask) = &self.date_mask {
                field = field.mask(mask);
            }
            ui.add(field);

            let mut field = MaskedField::new(&mut self.phone)
                .title("Phone")
                .desired_width(160.0)
                .id_salt("phone");
            if let Some(mask) = &self.phone_mask {
                field = field.mask(mask);
            }
            ui.add(field);
        });

        ui.add_space(16.0);

        match &mut self.table {
            Ok(table) => table.ui(ui),
            Err(err) => {
                ui.colored_label(COLOR_RED, format!("Error: {err}"));
            }
        }
    }
}

impl DemoTable {
    fn ui(&mut self, ui: &mut egui::Ui) {
        let MountedTable {
            layout,
            rows,
            state,
        } = &mut self.mounted;

        let response = SortableTable::new(layout, rows)
            .dropdown_text("Click the row again to close this panel.")
            .id_salt("people")
            .show(ui, state);

        let mut handler = DemoHandler::default();
        response.dispatch(rows, &mut handler);

        if let Some(order) = handler.sort {
            *rows = self.original_rows.clone();
            sort_rows(rows, &order);
            // Indices shifted, so the expanded row no longer matches.
            state.open_row = OpenRow::default();
        }
        if let Some(message) = handler.message {
            self.last_event = Some(message);
        }

        if let Some(event) = &self.last_event {
            ui.add_space(8.0);
            ui.label(event);
        }
    }
}

fn demo_mask(pattern: &str, placeholder: Option<char>) -> Option<Mask> {
    Mask::parse(pattern)
        .and_then(|mask| mask.with_placeholder(placeholder))
        .map_err(|err| log::error!("Demo mask rejected: {err}"))
        .ok()
}

/// Sorts rows by the field an order names. Idle orders leave rows as they are.
pub fn sort_rows(rows: &mut [Row], order: &SortOrder) {
    let direction = SortDirection::from_order(&order.order);
    if order.key.is_empty() || direction == SortDirection::None {
        return;
    }

    rows.sort_by(|a, b| {
        let ordering = compare_values(a.get(&order.key), b.get(&order.key));
        match direction {
            SortDirection::Descending => ordering.reverse(),
            SortDirection::Ascending | SortDirection::None => ordering,
        }
    });
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (a, b) => a.map(Value::to_string).cmp(&b.map(Value::to_string)),
    }
}

impl eframe::App for FormkitApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui(ui);
            });
            powered_by_egui_and_eframe(ui);
        });
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label("Powered by ");
        ui.hyperlink_to("egui", "https://github.com/emilk/egui");
        ui.label(" and ");
        ui.hyperlink_to(
            "eframe",
            "https://github.com/emilk/egui/tree/master/crates/eframe",
        );
        ui.label(".");
    });
}
