//! Sortable table widget.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: sizing, alignment and glyph constants
//! - `header`: header row with click-to-sort
//! - `row`: row strips and the expanded-row panel
//! - `cells`: cell rendering and click detection
//!
//! The table only draws. Sort order and the expanded row live in the
//! caller's [`TableState`], and clicks come back as [`TableEvent`]s.

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Color32, Frame, Id, Margin, Response, Stroke, Ui, WidgetText};
use formkit_business::{Row, RowActions, SortOrder, TableEvent, TableHandler, TableLayout, TableState};

pub use cells::{CellClick, DELETE_ICON, EDIT_ICON};

use self::header::render_table_header;
use self::row::{render_dropdown, render_row};

/// Border color around the whole table (subtle gray).
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Content shown in the expanded-row panel, the same for every row.
type DropDown<'a> = Box<dyn FnMut(&mut Ui) + 'a>;

/// Builder for a sortable table over a validated layout.
#[must_use = "call `show` to draw the table"]
pub struct SortableTable<'a> {
    layout: &'a TableLayout,
    rows: &'a [Row],
    actions: RowActions,
    dropdown: Option<DropDown<'a>>,
    id_salt: Id,
}

/// What happened to the table this frame.
pub struct TableResponse {
    pub response: Response,
    pub events: Vec<TableEvent>,
}

impl TableResponse {
    /// The new sort order, if a sortable header was clicked.
    pub fn sort_changed(&self) -> Option<&SortOrder> {
        self.events.iter().find_map(|e| match e {
            TableEvent::SortChanged(order) => Some(order),
            _ => None,
        })
    }

    /// Index of the row whose cell was clicked, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.events.iter().find_map(|e| match e {
            TableEvent::RowSelected(index) => Some(*index),
            _ => None,
        })
    }

    /// Sends the events to `handler` with the rows they refer to.
    pub fn dispatch(&self, rows: &[Row], handler: &mut impl TableHandler) {
        formkit_business::dispatch(&self.events, rows, handler);
    }
}

impl<'a> SortableTable<'a> {
    pub fn new(layout: &'a TableLayout, rows: &'a [Row]) -> Self {
        Self {
            layout,
            rows,
            actions: RowActions::default(),
            dropdown: None,
            id_salt: Id::new("sortable_table"),
        }
    }

    /// Which row actions to show. Both are on by default.
    pub fn actions(mut self, actions: RowActions) -> Self {
        self.actions = actions;
        self
    }

    pub fn edit_action(mut self, enabled: bool) -> Self {
        self.actions.edit = enabled;
        self
    }

    pub fn delete_action(mut self, enabled: bool) -> Self {
        self.actions.delete = enabled;
        self
    }

    /// Content of the panel under the expanded row.
    pub fn dropdown(mut self, add_contents: impl FnMut(&mut Ui) + 'a) -> Self {
        self.dropdown = Some(Box::new(add_contents));
        self
    }

    /// Static text for the panel under the expanded row.
    pub fn dropdown_text(self, text: impl Into<WidgetText>) -> Self {
        let text = text.into();
        self.dropdown(move |ui| {
            ui.label(text.clone());
        })
    }

    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Draws the table and applies this frame's clicks to `state`.
    pub fn show(mut self, ui: &mut Ui, state: &mut TableState) -> TableResponse {
        let mut events = Vec::new();
        let table_id = ui.make_persistent_id(self.id_salt);

        let response = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;

                if let Some(order) = render_table_header(ui, self.layout, state) {
                    events.push(TableEvent::SortChanged(order));
                }

                for (index, row) in self.rows.iter().enumerate() {
                    let view = self.layout.present(index, row, self.actions);

                    match render_row(ui, &view, table_id) {
                        Some(CellClick::Select) => events.push(state.select_row(index)),
                        Some(CellClick::Action(action)) => {
                            events.push(TableEvent::action(index, action));
                        }
                        None => {}
                    }

                    if state.open_row.is_open(index)
                        && let Some(dropdown) = self.dropdown.as_mut()
                    {
                        render_dropdown(ui, dropdown.as_mut());
                    }
                }
            })
            .response;

        if !events.is_empty() {
            log::debug!("Table {:?} events: {events:?}", self.id_salt);
        }

        TableResponse { response, events }
    }
}

/// Draws a table from a validated layout with both row actions and no dropdown.
pub fn sortable_table(
    ui: &mut Ui,
    layout: &TableLayout,
    rows: &[Row],
    state: &mut TableState,
) -> TableResponse {
    SortableTable::new(layout, rows).show(ui, state)
}

#[cfg(test)]
mod sortable_table_tests {
    use egui_kittest::Harness;
    use formkit_business::{CellKind, ColumnDef};
    use kittest::Queryable;

    use super::*;

    struct TableFixture {
        layout: TableLayout,
        rows: Vec<Row>,
        state: TableState,
        events: Vec<TableEvent>,
        sorts: Vec<SortOrder>,
        selected: Vec<usize>,
    }

    fn fixture() -> TableFixture {
        let layout = TableLayout::new(vec![
            ColumnDef::new("name", "Name", 40).sortable(true),
            ColumnDef::new("born", "Born", 30).kind(CellKind::Date),
            ColumnDef::new("edit", "", 15),
            ColumnDef::new("delete", "", 15),
        ])
        .unwrap();

        let rows = vec![
            Row::new().with("name", "alice").with("born", "2024-03-05T00:00:00Z"),
            Row::new().with("name", "bob").with("born", "1999-12-31").with("secret", "hidden"),
        ];

        TableFixture {
            layout,
            rows,
            state: TableState::new(None),
            events: Vec::new(),
            sorts: Vec::new(),
            selected: Vec::new(),
        }
    }

    fn harness(fixture: TableFixture) -> Harness<'static, TableFixture> {
        Harness::new_ui_state(
            |ui, fixture: &mut TableFixture| {
                let response = SortableTable::new(&fixture.layout, &fixture.rows)
                    .dropdown_text("Row details")
                    .show(ui, &mut fixture.state);
                if let Some(order) = response.sort_changed() {
                    fixture.sorts.push(order.clone());
                }
                if let Some(index) = response.selected_row() {
                    fixture.selected.push(index);
                }
                fixture.events.extend(response.events);
            },
            fixture,
        )
    }

    #[test]
    fn test_header_and_cells_exist() {
        let harness = harness(fixture());

        assert!(harness.query_by_label("Name").is_some(), "Name header should exist");
        assert!(harness.query_by_label("Born").is_some(), "Born header should exist");
        assert!(harness.query_by_label("alice").is_some(), "alice should be displayed");
        assert!(harness.query_by_label("bob").is_some(), "bob should be displayed");
    }

    #[test]
    fn test_date_cells_are_formatted() {
        let harness = harness(fixture());

        assert!(harness.query_by_label("05/03/2024").is_some());
        assert!(harness.query_by_label("31/12/1999").is_some());
    }

    #[test]
    fn test_fields_without_column_are_hidden() {
        let harness = harness(fixture());

        assert!(
            harness.query_by_label("hidden").is_none(),
            "Field without a column should not render"
        );
    }

    #[test]
    fn test_action_icons_per_row() {
        let harness = harness(fixture());

        assert_eq!(harness.query_all_by_label(EDIT_ICON).count(), 2);
        assert_eq!(harness.query_all_by_label(DELETE_ICON).count(), 2);
    }

    #[test]
    fn test_disabled_actions_are_not_drawn() {
        let harness = Harness::new_ui_state(
            |ui, fixture: &mut TableFixture| {
                SortableTable::new(&fixture.layout, &fixture.rows)
                    .edit_action(false)
                    .show(ui, &mut fixture.state);
            },
            fixture(),
        );

        assert_eq!(harness.query_all_by_label(EDIT_ICON).count(), 0);
        assert_eq!(harness.query_all_by_label(DELETE_ICON).count(), 2);
    }

    #[test]
    fn test_header_click_cycles_sort() {
        let mut harness = harness(fixture());
        harness.step();

        harness.get_by_label("Name").click();
        harness.step();
        assert_eq!(
            harness.state().state.sort_order(),
            SortOrder::new("name", "ASC")
        );

        harness.step();
        assert!(
            harness.query_by_label("Name ⬆").is_some(),
            "Ascending arrow should follow the header"
        );

        harness.get_by_label("Name ⬆").click();
        harness.step();
        assert_eq!(
            harness.state().state.sort_order(),
            SortOrder::new("name", "DESC")
        );

        harness.step();
        harness.get_by_label("Name ⬇").click();
        harness.step();
        assert!(harness.state().state.sort_order().is_idle());

        let sorts: Vec<_> = harness
            .state()
            .events
            .iter()
            .filter(|e| matches!(e, TableEvent::SortChanged(_)))
            .collect();
        assert_eq!(sorts.len(), 3);
        assert_eq!(
            harness.state().sorts,
            [
                SortOrder::new("name", "ASC"),
                SortOrder::new("name", "DESC"),
                SortOrder::default(),
            ]
        );
        assert!(harness.state().selected.is_empty());
    }

    #[test]
    fn test_non_sortable_header_click_is_ignored() {
        let mut harness = harness(fixture());
        harness.step();

        harness.get_by_label("Born").click();
        harness.step();

        assert!(harness.state().state.sort_order().is_idle());
        assert!(harness.state().events.is_empty());
    }

    #[test]
    fn test_cell_click_expands_row() {
        let mut harness = harness(fixture());
        harness.step();

        harness.get_by_label("alice").click();
        harness.step();

        assert_eq!(harness.state().state.open_row.index(), Some(0));
        assert_eq!(harness.state().events, [TableEvent::RowSelected(0)]);
        assert_eq!(harness.state().selected, [0]);
        assert!(harness.state().sorts.is_empty());

        harness.step();
        assert!(
            harness.query_by_label("Row details").is_some(),
            "Dropdown should show under the expanded row"
        );
    }

    #[test]
    fn test_action_click_does_not_expand() {
        let mut harness = harness(fixture());
        harness.step();

        if let Some(edit) = harness.query_all_by_label(EDIT_ICON).nth(1) {
            edit.click();
        }
        harness.step();

        assert_eq!(harness.state().state.open_row.index(), None);
        assert_eq!(harness.state().events, [TableEvent::Edit(1)]);
        assert!(harness.state().selected.is_empty(), "Actions should not select");
    }

    #[test]
    fn test_dropdown_hidden_when_collapsed() {
        let harness = harness(fixture());
        assert!(harness.query_by_label("Row details").is_none());
    }
}
