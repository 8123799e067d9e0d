//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed. This dramatically reduces terminal I/O
//! and provides smooth, flicker-free updates.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized block (beginSync/endSync)
//! 2. For each cell in the new frame:
//!    - If a previous frame exists and the cell is unchanged: skip
//!    - Otherwise: render the cell with StatefulCellRenderer
//! 3. Flush the output buffer (single syscall)
//! 4. Store the current frame as previous for the next comparison

use std::io;

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Differential renderer for fullscreen mode.
///
/// Keeps track of the previous frame to enable diff-based rendering.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    /// Create a new diff renderer.
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };

                let changed = match &self.previous {
                    Some(prev) if prev.width() == width && prev.height() == height => {
                        prev.get(x, y) != Some(cell)
                    }
                    // No previous frame or size changed: redraw everything
                    _ => true,
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                }
            }
        }

        ansi::reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_stdout()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Forget the previous frame, forcing a full redraw next time.
    ///
    /// Needed after a terminal resize or anything else that may have
    /// clobbered the screen behind our back.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
