//! Integration tests for the demo app over the bundled sample table.

mod common;

use formkit_ui::widgets::table::{DELETE_ICON, EDIT_ICON};
use kittest::Queryable;

const DROPDOWN_TEXT: &str = "Click the row again to close this panel.";

#[test]
fn test_fields_and_table_render() {
    let harness = common::sample_app();

    assert!(
        harness.query_by_label("Birth date *").is_some(),
        "Required field should carry the marker"
    );
    assert!(
        harness.query_by_label("Phone").is_some(),
        "Optional field should show its plain title"
    );
    assert!(harness.query_by_label("Document").is_some());
    assert!(harness.query_by_label("Born").is_some());
    assert!(harness.query_by_label("Updated").is_some());
}

#[test]
fn test_default_order_shows_arrow() {
    let harness = common::sample_app();

    assert!(
        harness.query_by_label("Name ⬆").is_some(),
        "defaultOrder should mark the name column ascending"
    );
}

#[test]
fn test_sample_cells_are_formatted() {
    let harness = common::sample_app();

    assert!(harness.query_by_label("Ada Lovelace").is_some());
    assert!(harness.query_by_label("10/12/1815").is_some());
    assert!(harness.query_by_label("05/03/2024 10:15:00").is_some());
    assert!(
        harness.query_by_label("17").is_none(),
        "Fields without a column should not render"
    );
    assert_eq!(harness.query_all_by_label(EDIT_ICON).count(), 3);
    assert_eq!(harness.query_all_by_label(DELETE_ICON).count(), 3);
}

#[test]
fn test_header_click_reports_sort() {
    let mut harness = common::sample_app();

    harness.get_by_label("Name ⬆").click();
    harness.step();
    harness.step();

    assert!(
        harness.query_by_label("Name ⬇").is_some(),
        "Second click on the default column should sort descending"
    );
    assert!(harness.query_by_label(r#"Sort: "name" "DESC""#).is_some());

    harness.get_by_label("Name ⬇").click();
    harness.step();
    harness.step();

    assert!(
        harness.query_by_label("Name").is_some(),
        "Third click should clear the arrow"
    );
    assert!(harness.query_by_label(r#"Sort: "" """#).is_some());
}

#[test]
fn test_row_click_selects_and_expands() {
    let mut harness = common::sample_app();
    assert!(harness.query_by_label(DROPDOWN_TEXT).is_none());

    harness.get_by_label("Alan Turing").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("Selected: Alan Turing").is_some());
    assert!(
        harness.query_by_label(DROPDOWN_TEXT).is_some(),
        "Selected row should expand"
    );
    assert_eq!(harness.state().birth_date(), "");
}

#[test]
fn test_action_click_reports_row() {
    let mut harness = common::sample_app();

    if let Some(delete) = harness.query_all_by_label(DELETE_ICON).next() {
        delete.click();
    }
    harness.step();
    harness.step();

    assert!(harness.query_by_label("Delete: Ada Lovelace").is_some());
    assert!(
        harness.query_by_label(DROPDOWN_TEXT).is_none(),
        "Actions should not expand the row"
    );
}
