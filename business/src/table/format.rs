//! Cell text formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::column::CellKind;

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Text shown for date cells whose value cannot be read as a date.
pub const INVALID_DATE: &str = "Invalid date";

/// Turns a row value into the text shown in a cell of the given kind.
pub fn format_cell(kind: CellKind, value: &Value) -> String {
    match kind {
        CellKind::Plain => format_plain(value),
        CellKind::Date => format_date(value, DATE_FORMAT),
        CellKind::DateTime => format_date(value, DATETIME_FORMAT),
    }
}

/// Plain values render as they would in a browser: strings and numbers as
/// is, `null` and booleans as nothing.
pub fn format_plain(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_date(value: &Value, format: &str) -> String {
    match parse_datetime(value) {
        Some(datetime) => datetime.format(format).to_string(),
        None => {
            log::warn!("Cannot read {value} as a date, showing {INVALID_DATE:?}");
            INVALID_DATE.to_owned()
        }
    }
}

/// Reads a date or timestamp.
///
/// Offsets are kept as written, so `2024-03-05T00:00:00Z` stays on the 5th.
/// Integers are epoch milliseconds in UTC.
pub fn parse_datetime(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_datetime_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn parse_datetime_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_from_rfc3339() {
        let value = json!("2024-03-05T00:00:00Z");
        assert_eq!(format_cell(CellKind::Date, &value), "05/03/2024");
        assert_eq!(format_cell(CellKind::DateTime, &value), "05/03/2024 00:00:00");
    }

    #[test]
    fn test_datetime_keeps_written_offset() {
        let value = json!("2024-12-31T23:05:09-03:00");
        assert_eq!(format_cell(CellKind::DateTime, &value), "31/12/2024 23:05:09");
    }

    #[test]
    fn test_naive_forms() {
        assert_eq!(format_cell(CellKind::Date, &json!("2023-01-09")), "09/01/2023");
        assert_eq!(
            format_cell(CellKind::DateTime, &json!("2023-01-09 07:08:09")),
            "09/01/2023 07:08:09"
        );
        assert_eq!(
            format_cell(CellKind::DateTime, &json!("2023-01-09T07:08:09")),
            "09/01/2023 07:08:09"
        );
    }

    #[test]
    fn test_epoch_millis() {
        // 2024-03-05T12:30:00Z
        let value = json!(1_709_641_800_000_i64);
        assert_eq!(format_cell(CellKind::DateTime, &value), "05/03/2024 12:30:00");
    }

    #[test]
    fn test_invalid_date() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(format_cell(CellKind::Date, &json!("soon")), INVALID_DATE);
        assert_eq!(format_cell(CellKind::DateTime, &Value::Null), INVALID_DATE);
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(format_cell(CellKind::Plain, &json!("2024-03-05T00:00:00Z")), "2024-03-05T00:00:00Z");
        assert_eq!(format_cell(CellKind::Plain, &json!(42)), "42");
        assert_eq!(format_cell(CellKind::Plain, &json!(1.5)), "1.5");
        assert_eq!(format_cell(CellKind::Plain, &Value::Null), "");
        assert_eq!(format_cell(CellKind::Plain, &json!(true)), "");
        assert_eq!(format_cell(CellKind::Plain, &json!(["a", 1])), r#"["a",1]"#);
    }
}
