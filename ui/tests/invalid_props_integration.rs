mod common;

use formkit_business::mount_json;
use kittest::Queryable;

#[test]
fn test_width_mismatch_shows_error() {
    let table = mount_json(
        r#"{
            "rows": [],
            "columns": [
                { "key": "name", "value": "Name", "width": 60 },
                { "key": "age", "value": "Age", "width": 30 }
            ]
        }"#,
    )
    .map_err(anyhow::Error::from);
    let harness = common::app_with(table);

    assert!(
        harness.query_by_label_contains("Error:").is_some(),
        "Rejected props should be reported instead of a table"
    );
    assert!(harness.query_by_label("Name").is_none());
    assert!(
        harness.query_by_label("Birth date *").is_some(),
        "Fields still render without a table"
    );
}

#[test]
fn test_missing_file_shows_error() {
    let table = formkit_ui::config::load_table_file(std::path::Path::new("/no/such/table.json"));
    let harness = common::app_with(table);

    assert!(harness.query_by_label_contains("/no/such/table.json").is_some());
}
