//! Labeled text input with an optional character mask.
//!
//! With a mask the bound `String` holds the raw value (only the characters
//! typed into editable slots), while the input shows the masked text with
//! literals and placeholders. Without a mask it is a plain text input.

use egui::text::{CCursor, CCursorRange};
use egui::{Id, Response, TextEdit, Ui, Widget};
use formkit_business::Mask;

/// Glyph appended to the title of required fields.
pub const REQUIRED_MARKER: &str = "*";

/// Builder for a masked text field.
#[must_use = "add it with `ui.add(...)`"]
pub struct MaskedField<'a> {
    value: &'a mut String,
    title: Option<&'a str>,
    mask: Option<&'a Mask>,
    required: bool,
    hint_text: Option<&'a str>,
    desired_width: Option<f32>,
    id_salt: Option<Id>,
}

impl<'a> MaskedField<'a> {
    pub fn new(value: &'a mut String) -> Self {
        Self {
            value,
            title: None,
            mask: None,
            required: false,
            hint_text: None,
            desired_width: None,
            id_salt: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn mask(mut self, mask: &'a Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn hint_text(mut self, hint_text: &'a str) -> Self {
        self.hint_text = Some(hint_text);
        self
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(id_salt));
        self
    }
}

/// Label text above the input.
pub fn title_text(title: &str, required: bool) -> String {
    if required {
        format!("{title} {REQUIRED_MARKER}")
    } else {
        title.to_owned()
    }
}

impl Widget for MaskedField<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            value,
            title,
            mask,
            required,
            hint_text,
            desired_width,
            id_salt,
        } = self;

        ui.vertical(|ui| {
            if let Some(title) = title {
                ui.label(title_text(title, required));
            }

            match mask {
                Some(mask) => masked_input(ui, value, mask, hint_text, desired_width, id_salt),
                None => {
                    let mut edit = TextEdit::singleline(value);
                    if let Some(hint) = hint_text {
                        edit = edit.hint_text(hint);
                    }
                    if let Some(width) = desired_width {
                        edit = edit.desired_width(width);
                    }
                    if let Some(id_salt) = id_salt {
                        edit = edit.id_salt(id_salt);
                    }
                    ui.add(edit)
                }
            }
        })
        .inner
    }
}

fn masked_input(
    ui: &mut Ui,
    raw: &mut String,
    mask: &Mask,
    hint_text: Option<&str>,
    desired_width: Option<f32>,
    id_salt: Option<Id>,
) -> Response {
    let mut display = mask.apply_raw(raw).display;

    let mut edit = TextEdit::singleline(&mut display);
    if let Some(hint) = hint_text {
        edit = edit.hint_text(hint);
    }
    if let Some(width) = desired_width {
        edit = edit.desired_width(width);
    }
    if let Some(id_salt) = id_salt {
        edit = edit.id_salt(id_salt);
    }

    let mut output = edit.show(ui);
    if output.response.changed() {
        let edit_cursor = output
            .cursor_range
            .map_or_else(|| display.chars().count(), |range| range.primary.index);
        let masked = mask.reapply_at(&display, edit_cursor);
        log::debug!(
            "Mask {:?}: {:?} -> {:?}",
            mask.pattern(),
            display,
            masked.display
        );

        output
            .state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(masked.cursor))));
        output.state.store(ui.ctx(), output.response.id);

        *raw = masked.raw;
    }

    output.response
}

/// Shows a masked field bound to `value`.
pub fn masked_field(
    ui: &mut Ui,
    value: &mut String,
    title: Option<&str>,
    mask: Option<&Mask>,
    required: bool,
) -> Response {
    let mut field = MaskedField::new(value).required(required);
    if let Some(title) = title {
        field = field.title(title);
    }
    if let Some(mask) = mask {
        field = field.mask(mask);
    }
    ui.add(field)
}
