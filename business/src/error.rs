use thiserror::Error;
use ustr::Ustr;

/// Fatal table configuration problems, raised once when a table is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableConfigError {
    #[error("Enter an array with the table rows")]
    MissingRows,
    #[error("Enter an array with the table columns")]
    MissingColumns,
    #[error("Column {key:?} has no width; every column needs a width-share")]
    MissingWidth { key: Ustr },
    #[error("Column {key:?} has width {width}; widths must be bigger than 0 and at most 100")]
    WidthOutOfRange { key: Ustr, width: i64 },
    #[error("Column widths sum to {sum}; the sum must be exactly 100")]
    WidthSumMismatch { sum: i64 },
    #[error("Column key {key:?} is used by more than one column")]
    DuplicateKey { key: Ustr },
}

impl TableConfigError {
    pub fn missing_width(key: impl AsRef<str>) -> Self {
        Self::MissingWidth {
            key: Ustr::from(key.as_ref()),
        }
    }

    pub fn width_out_of_range(key: impl AsRef<str>, width: i64) -> Self {
        Self::WidthOutOfRange {
            key: Ustr::from(key.as_ref()),
            width,
        }
    }
}

/// Problems loading table props from their JSON form.
#[derive(Debug, Error)]
pub enum PropsError {
    #[error("Invalid table props: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] TableConfigError),
}

/// Malformed mask patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("Mask pattern {pattern:?} ends with an unfinished escape")]
    DanglingEscape { pattern: String },
    #[error("Mask pattern {pattern:?} has no editable positions")]
    NoEditableSlots { pattern: String },
    #[error("Placeholder {placeholder:?} is accepted by an editable slot of {pattern:?}")]
    PlaceholderAccepted { pattern: String, placeholder: char },
}
