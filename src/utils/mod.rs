pub mod form;
pub mod select_cursor;
pub mod text_input;

// Export utilities that are used
pub use form::{Form, FormField};
pub use select_cursor::SelectCursor;
pub use text_input::TextInput;
