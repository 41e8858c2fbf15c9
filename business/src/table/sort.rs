//! Header click sort cycle.
//!
//! Each table tracks at most one active sort column. Clicking a sortable
//! header moves through a small state machine:
//!
//! - another column (or nothing) active: the clicked column becomes active, ascending
//! - same column: ascending, then descending, then back to idle
//!
//! Every transition yields the [`SortOrder`] the caller should sort by.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses `ASC` / `DESC` in any case. Anything else is [`SortDirection::None`].
    pub fn from_order(order: &str) -> Self {
        let order = order.trim();
        if order.eq_ignore_ascii_case("asc") {
            Self::Ascending
        } else if order.eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::None
        }
    }

    /// The wire form: `ASC`, `DESC` or an empty string.
    pub fn as_order(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Sort order as reported to the caller.
///
/// The idle order is `{ key: "", order: "" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: String,
    pub order: String,
}

impl SortOrder {
    pub fn new(key: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            order: order.into(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.key.is_empty() && self.order.is_empty()
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<Ustr>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Builds the state a caller-supplied default order describes.
    ///
    /// An unknown order string keeps the key with no direction, so the next
    /// click on that column starts at ascending.
    pub fn from_order(order: &SortOrder) -> Self {
        let direction = SortDirection::from_order(&order.order);
        if direction == SortDirection::None && !order.order.trim().is_empty() {
            log::warn!(
                "Unknown sort order {:?} for key {:?}, treating it as unsorted",
                order.order,
                order.key
            );
        }

        let key = if order.key.is_empty() {
            None
        } else {
            Some(Ustr::from(order.key.as_str()))
        };

        Self { key, direction }
    }

    /// State after a click on the header of `key`.
    pub fn advance(self, key: Ustr) -> Self {
        if self.key != Some(key) {
            return Self {
                key: Some(key),
                direction: SortDirection::Ascending,
            };
        }

        match self.direction {
            SortDirection::None => Self {
                key: Some(key),
                direction: SortDirection::Ascending,
            },
            SortDirection::Ascending => Self {
                key: Some(key),
                direction: SortDirection::Descending,
            },
            SortDirection::Descending => Self::idle(),
        }
    }

    /// Whether `key` is the active column.
    pub fn is_active(&self, key: Ustr) -> bool {
        self.key == Some(key)
    }

    pub fn order(&self) -> SortOrder {
        SortOrder {
            key: self.key.map(|k| k.as_str().to_owned()).unwrap_or_default(),
            order: self.direction.as_order().to_owned(),
        }
    }
}
