//! Character masks for constrained text input.
//!
//! A mask is a template string where every position is either a literal that
//! is always shown, or an editable slot accepting one class of characters:
//!
//! - `9`: `0-9`
//! - `a`: `A-Z, a-z`
//! - `*`: `A-Z, a-z, 0-9`
//!
//! A backslash turns the next character into a literal, so `\9` shows a `9`.
//! For example the mask `99/99/9999` with placeholder `_` shows `__/__/____`
//! until it is filled.

use crate::error::MaskError;

/// Glyph shown for unfilled editable slots when none is configured.
pub const DEFAULT_MASK_PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Literal(char),
    Digit,
    Letter,
    Alphanumeric,
}

impl Slot {
    #[inline]
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }
}

/// A parsed mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
    slots: Vec<Slot>,
    placeholder: Option<char>,
}

/// Result of running input through a [`Mask`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskedValue {
    /// Text shown in the input, literals and placeholders included.
    pub display: String,
    /// Only the characters typed into editable slots.
    pub raw: String,
    /// Position in `display` right after the last filled slot, or at the
    /// first editable slot when nothing is filled.
    pub cursor: usize,
}

impl Mask {
    /// Parses a pattern using [`DEFAULT_MASK_PLACEHOLDER`] for unfilled slots.
    pub fn parse(pattern: &str) -> Result<Self, MaskError> {
        let mut slots = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let slot = match c {
                '9' => Slot::Digit,
                'a' => Slot::Letter,
                '*' => Slot::Alphanumeric,
                '\\' => match chars.next() {
                    Some(escaped) => Slot::Literal(escaped),
                    None => {
                        return Err(MaskError::DanglingEscape {
                            pattern: pattern.to_owned(),
                        });
                    }
                },
                other => Slot::Literal(other),
            };
            slots.push(slot);
        }

        if !slots.iter().any(|s| !matches!(s, Slot::Literal(_))) {
            return Err(MaskError::NoEditableSlots {
                pattern: pattern.to_owned(),
            });
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            slots,
            placeholder: Some(DEFAULT_MASK_PLACEHOLDER),
        })
    }

    /// Sets the glyph for unfilled slots. `None` hides the unfilled tail.
    ///
    /// A glyph some editable slot accepts is rejected, since typed copies of
    /// it could not be told apart from unfilled slots.
    pub fn with_placeholder(mut self, placeholder: Option<char>) -> Result<Self, MaskError> {
        if let Some(glyph) = placeholder
            && self.slots.iter().any(|slot| slot.accepts(glyph))
        {
            return Err(MaskError::PlaceholderAccepted {
                pattern: self.pattern,
                placeholder: glyph,
            });
        }
        self.placeholder = placeholder;
        Ok(self)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn placeholder(&self) -> Option<char> {
        self.placeholder
    }

    /// Number of editable slots in the pattern.
    pub fn editable_len(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| !matches!(s, Slot::Literal(_)))
            .count()
    }

    /// Whether the raw value `raw` fills every editable slot.
    pub fn is_complete(&self, raw: &str) -> bool {
        self.apply_raw(raw).raw.chars().count() == self.editable_len()
    }

    /// Lays a raw value out in the mask.
    ///
    /// Raw characters only ever go into editable slots, so a raw value that
    /// happens to start with a literal of the pattern keeps that character.
    pub fn apply_raw(&self, raw: &str) -> MaskedValue {
        self.fill(raw, false)
    }

    /// Fits typed or pasted text into the mask.
    ///
    /// Literal slots consume a matching input character, editable slots take
    /// the next accepted one and skip anything they reject. Input left over
    /// once every slot is filled is dropped.
    pub fn apply(&self, input: &str) -> MaskedValue {
        self.fill(input, true)
    }

    /// Re-masks text edited in the input, dropping placeholder glyphs first.
    pub fn reapply(&self, edited: &str) -> MaskedValue {
        match self.placeholder {
            Some(placeholder) => {
                let cleaned: String = edited.chars().filter(|&c| c != placeholder).collect();
                self.apply(&cleaned)
            }
            None => self.apply(edited),
        }
    }

    /// Like [`Mask::reapply`], with the cursor placed after the slots filled
    /// from text left of `edit_cursor` (a char index into `edited`).
    pub fn reapply_at(&self, edited: &str, edit_cursor: usize) -> MaskedValue {
        let mut value = self.reapply(edited);
        let before: String = edited.chars().take(edit_cursor).collect();
        let filled = self
            .reapply(&before)
            .raw
            .chars()
            .count()
            .min(value.raw.chars().count());
        value.cursor = self
            .cursor_after(filled)
            .min(value.display.chars().count());
        value
    }

    /// Display position right after the `filled`-th editable slot. For zero
    /// it is the first editable slot, past any leading literals.
    pub fn cursor_after(&self, filled: usize) -> usize {
        let mut editable = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !matches!(slot, Slot::Literal(_)))
            .map(|(index, _)| index);

        match filled.checked_sub(1) {
            None => editable.next().unwrap_or_default(),
            Some(last) => editable.nth(last).map_or(self.slots.len(), |index| index + 1),
        }
    }

    fn fill(&self, input: &str, consume_literals: bool) -> MaskedValue {
        let mut input = input.chars().peekable();
        let mut value = MaskedValue::default();
        let mut pending_literals = String::new();
        let mut exhausted = false;

        for slot in &self.slots {
            if let Slot::Literal(literal) = *slot {
                if consume_literals && input.peek() == Some(&literal) {
                    input.next();
                }
                if exhausted {
                    if self.placeholder.is_some() {
                        value.display.push(literal);
                    }
                } else {
                    pending_literals.push(literal);
                }
                continue;
            }

            let accepted = if exhausted {
                None
            } else {
                input.by_ref().find(|&c| slot.accepts(c))
            };

            match accepted {
                Some(c) => {
                    value.display.push_str(&pending_literals);
                    pending_literals.clear();
                    value.display.push(c);
                    value.raw.push(c);
                }
                None => {
                    if !exhausted {
                        exhausted = true;
                        if let Some(placeholder) = self.placeholder {
                            value.display.push_str(&pending_literals);
                            value.display.push(placeholder);
                        }
                        pending_literals.clear();
                    } else if let Some(placeholder) = self.placeholder {
                        value.display.push(placeholder);
                    }
                }
            }
        }

        // Trailing literals after a completely filled mask are part of it.
        value.display.push_str(&pending_literals);
        value.cursor = self
            .cursor_after(value.raw.chars().count())
            .min(value.display.chars().count());
        value
    }
}
