//! Identifier text field.

/// Contents of the member id input.
///
/// Invariant: `text` holds ASCII decimal digits only, and `cursor` is a
/// position in `0..=text.len()`. Edits go through `input_handler`, which
/// re-sanitises after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierField {
    text: String,
    cursor: usize,
}

impl IdentifierField {
    /// Build a field from arbitrary text; non-digits are stripped and the
    /// cursor is placed at the end.
    pub fn from_text(raw: &str) -> Self {
        let text = crate::model::sanitize_digits(raw);
        let cursor = text.len();
        Self { text, cursor }
    }

    pub(crate) fn from_parts(text: String, cursor: usize) -> Self {
        let cursor = cursor.min(text.len());
        Self { text, cursor }
    }

    /// Current digits.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// No digits entered.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, usize) {
        (self.text, self.cursor)
    }
}
