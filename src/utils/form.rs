//! Form field group handling.
//!
//! A `Form` is an ordered list of labeled text fields plus an implicit
//! submit slot at focus index `N` (one past the last field). Tab and
//! shift-tab cycle through fields and the submit slot with wraparound, the
//! way the login screen drives it.

use crate::utils::text_input::TextInput;
use crossterm::event::KeyCode;

/// A single labeled form field.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Label displayed next to the field.
    pub label: String,
    /// Placeholder text shown while the field is empty.
    pub placeholder: String,
    /// Whether the field's text is masked when rendered (passwords).
    pub masked: bool,
    /// Text and cursor state.
    pub input: TextInput,
}

impl FormField {
    /// Create a new field with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            placeholder: label.to_string(),
            masked: false,
            input: TextInput::new(),
        }
    }

    /// Mask the rendered text.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Limit the number of characters accepted.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.input = std::mem::take(&mut self.input).with_char_limit(limit);
        self
    }
}

/// A group of form fields with a focus index in `[0, N]`.
///
/// Index `N` (== number of fields) is the submit slot.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Create a new empty form focused on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the form.
    pub fn add_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Current focus index, in `[0, fields.len()]`.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// True when the submit slot is focused.
    pub fn submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    /// Advance focus, wrapping from the submit slot back to field 0.
    pub fn focus_next(&mut self) {
        if self.focus >= self.fields.len() {
            self.focus = 0;
        } else {
            self.focus += 1;
        }
    }

    /// Move focus back, wrapping from field 0 to the submit slot.
    pub fn focus_prev(&mut self) {
        if self.focus == 0 {
            self.focus = self.fields.len();
        } else {
            self.focus -= 1;
        }
    }

    /// Route an editing key to the focused field.
    ///
    /// Returns true if a field had focus and handled the key.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.input.handle_key(key_code)
        } else {
            false
        }
    }

    /// Raw value of the field at `index`, exactly as typed.
    ///
    /// Submitted as-is; passwords may legitimately carry edge whitespace.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.input.text())
            .unwrap_or("")
    }

    /// Value of the field at `index` with edge whitespace removed.
    ///
    /// For emptiness checks and identifier fields, never for credentials.
    pub fn trimmed(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.input.text_trimmed())
            .unwrap_or("")
    }

    /// Clear every field and refocus the first one.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.input.clear();
        }
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_field_form() -> Form {
        Form::new()
            .add_field(FormField::new("Email"))
            .add_field(FormField::new("Password").masked())
    }

    #[test]
    fn focus_cycles_through_fields_and_submit() {
        let mut form = two_field_form();
        assert_eq!(form.focus(), 0);

        form.focus_next();
        assert_eq!(form.focus(), 1);
        form.focus_next();
        assert_eq!(form.focus(), 2);
        assert!(form.submit_focused());
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_cycles_backwards_with_wraparound() {
        let mut form = two_field_form();
        form.focus_prev();
        assert!(form.submit_focused());
        form.focus_prev();
        assert_eq!(form.focus(), 1);
    }

    #[test]
    fn keys_edit_only_the_focused_field() {
        let mut form = two_field_form();
        assert!(form.handle_key(KeyCode::Char('a')));
        form.focus_next();
        assert!(form.handle_key(KeyCode::Char('b')));
        assert_eq!(form.value(0), "a");
        assert_eq!(form.value(1), "b");
    }

    #[test]
    fn keys_are_ignored_on_the_submit_slot() {
        let mut form = two_field_form();
        form.focus_next();
        form.focus_next();
        assert!(form.submit_focused());
        assert!(!form.handle_key(KeyCode::Char('x')));
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn value_preserves_edge_whitespace() {
        let mut form = two_field_form();
        form.focus_next();
        for c in " pw ".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        // The password goes out exactly as typed.
        assert_eq!(form.value(1), " pw ");
        assert_eq!(form.trimmed(1), "pw");
    }

    #[test]
    fn whitespace_only_input_is_empty_when_trimmed() {
        let mut form = two_field_form();
        form.handle_key(KeyCode::Char(' '));
        form.handle_key(KeyCode::Char(' '));
        assert_eq!(form.value(0), "  ");
        assert_eq!(form.trimmed(0), "");
    }

    #[test]
    fn reset_clears_values_and_focus() {
        let mut form = two_field_form();
        form.handle_key(KeyCode::Char('a'));
        form.focus_next();
        form.handle_key(KeyCode::Char('b'));
        form.reset();
        assert_eq!(form.focus(), 0);
        assert_eq!(form.value(0), "");
        assert_eq!(form.value(1), "");
    }
}
