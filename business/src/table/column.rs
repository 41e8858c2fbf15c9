//! Column descriptors.

use serde::{Deserialize, Deserializer};
use ustr::Ustr;

use super::sort::SortDirection;

/// How cells of a column are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Rendered verbatim.
    #[default]
    Plain,
    /// Rendered as `DD/MM/YYYY`.
    Date,
    /// Rendered as `DD/MM/YYYY HH:MM:SS`.
    DateTime,
}

impl CellKind {
    /// Parses the column `type` tag. Unknown tags are plain.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            _ => Self::Plain,
        }
    }
}

/// Horizontal alignment of a column's header and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    /// No explicit alignment; renders like [`ColumnAlign::Left`].
    #[default]
    Default,
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::Default,
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Row field this column shows. Unique within a table.
    pub key: Ustr,
    /// Header text.
    pub label: String,
    /// Width-share in percent. `None` fails validation.
    pub width: Option<i64>,
    pub kind: CellKind,
    /// Whether clicking the header cycles the sort order.
    pub sortable: bool,
    pub align: ColumnAlign,
    /// Sort direction the column starts with when the table has no default order.
    pub order: SortDirection,
}

impl ColumnDef {
    pub fn new(key: &str, label: impl Into<String>, width: i64) -> Self {
        Self {
            key: Ustr::from(key),
            label: label.into(),
            width: Some(width),
            kind: CellKind::Plain,
            sortable: false,
            align: ColumnAlign::Default,
            order: SortDirection::None,
        }
    }

    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn order(mut self, order: SortDirection) -> Self {
        self.order = order;
        self
    }
}

/// JSON shape of a column, as the table props are written by hand.
#[derive(Deserialize)]
struct RawColumn {
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    width: Option<i64>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    filter: bool,
    #[serde(default)]
    align: Option<String>,
    #[serde(default)]
    order: Option<String>,
}

impl<'de> Deserialize<'de> for ColumnDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawColumn::deserialize(deserializer)?;
        Ok(Self {
            key: Ustr::from(raw.key.as_str()),
            label: raw.value,
            width: raw.width,
            kind: raw.kind.as_deref().map(CellKind::from_tag).unwrap_or_default(),
            sortable: raw.filter,
            align: raw
                .align
                .as_deref()
                .map(ColumnAlign::from_tag)
                .unwrap_or_default(),
            order: raw
                .order
                .as_deref()
                .map(SortDirection::from_order)
                .unwrap_or_default(),
        })
    }
}
