//! Chat-specific UI components.
//!
//! The three leaf components composed by the home page: the transcript
//! panel, the message input, and the model selector. All three are
//! parameterless and purely presentational.

mod chat_input;
mod message_field;
mod model_dropdown;

pub use chat_input::ChatInput;
pub use message_field::MessageField;
pub use model_dropdown::ModelDropdown;
