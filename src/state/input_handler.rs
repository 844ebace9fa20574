//! Identifier field editing (pure state transitions).
//!
//! Every function takes the field by value and returns the edited field.
//! Inserted text is stripped of anything that is not a decimal digit, so the
//! field can never hold a non-numeric value when it is submitted.

use crate::model::sanitize_digits;
use crate::state::IdentifierField;

/// Insert text at the cursor and advance the cursor past what was kept.
///
/// Handles both single keystrokes and pasted text.
pub fn handle_text_input(field: IdentifierField, input: &str) -> IdentifierField {
    let (text, cursor) = field.into_parts();
    let (before, after) = text.split_at(cursor);
    let inserted = sanitize_digits(input);

    let mut next = String::with_capacity(text.len() + inserted.len());
    next.push_str(before);
    next.push_str(&inserted);
    let next_cursor = next.len();
    next.push_str(after);

    IdentifierField::from_parts(next, next_cursor)
}

/// Insert a single typed character.
pub fn handle_char_input(field: IdentifierField, ch: char) -> IdentifierField {
    let mut buf = [0u8; 4];
    handle_text_input(field, ch.encode_utf8(&mut buf))
}

/// Delete the digit before the cursor. No-op at position 0.
pub fn handle_backspace(field: IdentifierField) -> IdentifierField {
    let (mut text, cursor) = field.into_parts();
    if cursor == 0 {
        return IdentifierField::from_parts(text, cursor);
    }
    text.remove(cursor - 1);
    IdentifierField::from_parts(text, cursor - 1)
}

/// Delete the digit under the cursor. No-op at the end.
pub fn handle_delete(field: IdentifierField) -> IdentifierField {
    let (mut text, cursor) = field.into_parts();
    if cursor < text.len() {
        text.remove(cursor);
    }
    IdentifierField::from_parts(text, cursor)
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(field: IdentifierField) -> IdentifierField {
    let (text, cursor) = field.into_parts();
    IdentifierField::from_parts(text, cursor.saturating_sub(1))
}

/// Move cursor right by one position. Saturates at the end.
pub fn handle_cursor_right(field: IdentifierField) -> IdentifierField {
    let (text, cursor) = field.into_parts();
    IdentifierField::from_parts(text, cursor + 1)
}

/// Move cursor to the start.
pub fn handle_cursor_home(field: IdentifierField) -> IdentifierField {
    let (text, _) = field.into_parts();
    IdentifierField::from_parts(text, 0)
}

/// Move cursor past the last digit.
pub fn handle_cursor_end(field: IdentifierField) -> IdentifierField {
    let (text, _) = field.into_parts();
    let end = text.len();
    IdentifierField::from_parts(text, end)
}

/// Empty the field.
pub fn clear_input(_field: IdentifierField) -> IdentifierField {
    IdentifierField::default()
}

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
