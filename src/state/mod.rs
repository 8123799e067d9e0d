//! Input and focus state.

pub mod focus;
pub mod input;
pub mod keyboard;

pub use focus::{FocusRing, FocusTarget};
pub use input::{poll_event, read_event, InputEvent};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
