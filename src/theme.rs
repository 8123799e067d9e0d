//! Theme system for registro-tui.
//!
//! Provides semantic color definitions with support for ANSI and RGB colors.
//! ANSI colors respect the user's terminal color scheme, which is why the
//! `terminal` preset is the default.

use crate::types::Rgba;

// =============================================================================
// ThemeColor - A color that can be terminal default, ANSI or RGB
// =============================================================================

/// Theme color can be:
/// - `Default`: Terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: Explicit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    /// Use terminal's default color.
    #[default]
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to Rgba.
    pub const fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Semantic colors used by the widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    // Main palette
    pub primary: ThemeColor,
    pub accent: ThemeColor,
    // Semantic
    pub success: ThemeColor,
    pub warning: ThemeColor,
    pub error: ThemeColor,
    // Text
    pub text: ThemeColor,
    pub text_muted: ThemeColor,
    pub text_bright: ThemeColor,
    // Background
    pub background: ThemeColor,
    pub surface: ThemeColor,
    // Border
    pub border: ThemeColor,
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        terminal()
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Terminal theme - uses ANSI colors to respect the user's terminal scheme.
/// This is the default.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",
        primary: ThemeColor::Ansi(12),  // bright blue
        accent: ThemeColor::Ansi(11),   // bright yellow
        success: ThemeColor::Ansi(2),   // green
        warning: ThemeColor::Ansi(3),   // yellow
        error: ThemeColor::Ansi(1),     // red
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        text_bright: ThemeColor::Ansi(15),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(12),
    }
}

/// Dracula - dark theme with vivid colors.
pub fn dracula() -> Theme {
    Theme {
        name: "dracula",
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0xbd93f9)), // purple
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0xf1fa8c)),  // yellow
        success: ThemeColor::Rgb(Rgba::from_rgb_int(0x50fa7b)), // green
        warning: ThemeColor::Rgb(Rgba::from_rgb_int(0xffb86c)), // orange
        error: ThemeColor::Rgb(Rgba::from_rgb_int(0xff5555)),   // red
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xf8f8f2)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x6272a4)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x282a36)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0x343746)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x6272a4)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0xbd93f9)),
    }
}

/// Look up a preset theme by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        _ => None,
    }
}

/// Names of all available presets.
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula"]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(12).resolve(), Rgba::ansi(12));

        let rgb = Rgba::rgb(40, 42, 54);
        assert_eq!(ThemeColor::Rgb(rgb).resolve(), rgb);
    }

    #[test]
    fn test_get_preset() {
        assert_eq!(get_preset("terminal").unwrap().name, "terminal");
        assert_eq!(get_preset("dracula").unwrap().name, "dracula");
        assert!(get_preset("nope").is_none());
    }

    #[test]
    fn test_all_preset_names_resolve() {
        for name in preset_names() {
            assert!(get_preset(name).is_some(), "missing preset {name}");
        }
    }

    #[test]
    fn test_default_theme_is_terminal() {
        assert_eq!(Theme::default().name, "terminal");
    }
}
