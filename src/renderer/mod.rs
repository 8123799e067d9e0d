//! Terminal renderer.
//!
//! The widgets draw into a [`FrameBuffer`] of cells; the [`DiffRenderer`]
//! compares it with the previous frame and emits only the changed cells as
//! ANSI sequences through a batched [`OutputBuffer`].

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
