pub mod choice_list;
pub mod text_input;

pub use choice_list::ChoiceList;
pub use text_input::{TextInputWidget, TextInputWidgetExt};
