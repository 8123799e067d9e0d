//! ANSI escape sequences for terminal rendering.
//!
//! Cursor movement, screen control, colors (ANSI 256 and TrueColor),
//! text attributes and synchronized output for flicker-free updates.

use crate::types::{Attr, Rgba};
use std::io::Write;

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to absolute position (input 0-indexed, sequence 1-indexed).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen
// =============================================================================

/// Clear the whole screen.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J")
}

/// Begin synchronized output (DEC 2026).
///
/// The terminal buffers everything until end_sync, avoiding tearing.
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End synchronized output.
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors and attributes
// =============================================================================

/// Reset all attributes and colors (SGR 0).
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set foreground color.
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else if color.is_ansi() {
        write!(w, "\x1b[38;5;{}m", color.ansi_index())
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set background color.
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else if color.is_ansi() {
        write!(w, "\x1b[48;5;{}m", color.ansi_index())
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Apply text attributes (assumes a clean slate, call reset first).
pub fn attrs<W: Write>(w: &mut W, attrs: Attr) -> std::io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        write!(w, "\x1b[1m")?;
    }
    if attrs.contains(Attr::DIM) {
        write!(w, "\x1b[2m")?;
    }
    if attrs.contains(Attr::ITALIC) {
        write!(w, "\x1b[3m")?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        write!(w, "\x1b[4m")?;
    }
    if attrs.contains(Attr::INVERSE) {
        write!(w, "\x1b[7m")?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
