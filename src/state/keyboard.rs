//! Keyboard event types.
//!
//! Terminal-agnostic key events. The input module converts crossterm
//! events into these; the app routes them to the focused widget.

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// The printable character this event inserts, if any.
    ///
    /// Single character, no ctrl/alt chords.
    pub fn printable(&self) -> Option<char> {
        if self.modifiers.ctrl || self.modifiers.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_event() {
        let event = KeyboardEvent::new("a");
        assert_eq!(event.key, "a");
        assert!(event.is_press());
        assert_eq!(event.modifiers, Modifiers::none());
    }

    #[test]
    fn test_printable() {
        assert_eq!(KeyboardEvent::new("a").printable(), Some('a'));
        assert_eq!(KeyboardEvent::new("ñ").printable(), Some('ñ'));
        assert_eq!(KeyboardEvent::new("Enter").printable(), None);
        assert_eq!(
            KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).printable(),
            None
        );
    }

    #[test]
    fn test_release_is_not_press() {
        let event = KeyboardEvent {
            key: "a".to_string(),
            modifiers: Modifiers::none(),
            state: KeyState::Release,
        };
        assert!(!event.is_press());
    }
}
