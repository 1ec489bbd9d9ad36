//! Reusable UI primitives.
//!
//! A small set of composable components rendered via Leptos SSR:
//!
//! - [`Button`]: Clickable button with variants
//! - [`Textarea`]: Multi-line text input
//! - [`Select`]: Dropdown wrapping `<option>` children

mod button;
mod input;
mod select;

pub use button::{Button, ButtonVariant};
pub use input::Textarea;
pub use select::Select;
