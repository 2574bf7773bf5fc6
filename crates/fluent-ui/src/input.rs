//! Backend-agnostic input state tracking for mouse and keyboard events
//!
//! Windowing backends translate their events into [`InputState`] calls;
//! popups read pointer presses for outside-dismissal and key events for
//! their key handlers.

use crate::Point;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Additional mouse buttons (back, forward, etc.)
    Other(u8),
}

/// Keys with a meaning of their own (not producing a character)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Escape,
    Tab,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Shift,
    Control,
    Alt,
    /// Super/Meta/Windows/Command key
    Super,
    /// Context menu key
    ContextMenu,
    /// Function keys F1-F12
    F(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Named(NamedKey),
    /// A character key (letters, numbers, symbols)
    Character(String),
    Unknown,
}

/// Modifier keys held when a key event happened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
}

/// A single key press, as delivered to key handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn named(key: NamedKey) -> Self {
        Self::new(Key::Named(key))
    }

    pub fn is_named(&self, named: NamedKey) -> bool {
        self.key == Key::Named(named)
    }
}

/// Tracks the current state of mouse and keyboard input
///
/// Keeps both the held state and the frame-specific events
/// (just pressed/just released).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current cursor position in window coordinates, if known
    pub cursor_position: Option<Point>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_just_pressed: HashSet<MouseButton>,
    pub buttons_just_released: HashSet<MouseButton>,

    /// Key presses of this frame, in arrival order
    pub key_events: Vec<KeyEvent>,
    pub keys_just_released: Vec<Key>,

    pub modifiers: Modifiers,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to clear frame-specific state
    pub fn begin_frame(&mut self) {
        self.buttons_just_pressed.clear();
        self.buttons_just_released.clear();
        self.key_events.clear();
        self.keys_just_released.clear();
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons_pressed.insert(button);
        self.buttons_just_pressed.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_pressed.remove(&button);
        self.buttons_just_released.insert(button);
    }

    /// Record a key press
    ///
    /// Repeat events are only recorded when `allow_repeat` is set.
    pub fn press_key(&mut self, key: Key, is_repeat: bool, allow_repeat: bool) {
        if let Key::Named(named) = &key {
            self.set_modifier(named, true);
        }

        if !is_repeat || allow_repeat {
            self.key_events.push(KeyEvent {
                key,
                modifiers: self.modifiers,
            });
        }
    }

    pub fn release_key(&mut self, key: Key) {
        if let Key::Named(named) = &key {
            self.set_modifier(named, false);
        }
        self.keys_just_released.push(key);
    }

    fn set_modifier(&mut self, named: &NamedKey, held: bool) {
        match named {
            NamedKey::Shift => self.modifiers.shift = held,
            NamedKey::Control => self.modifiers.ctrl = held,
            NamedKey::Alt => self.modifiers.alt = held,
            NamedKey::Super => self.modifiers.super_key = held,
            _ => {}
        }
    }

    pub fn set_cursor_position(&mut self, position: Option<Point>) {
        self.cursor_position = position;
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }

    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.buttons_just_released.contains(&button)
    }

    /// Whether any pointer button went down this frame
    pub fn any_button_just_pressed(&self) -> bool {
        !self.buttons_just_pressed.is_empty()
    }

    pub fn is_named_key_just_pressed(&self, named: NamedKey) -> bool {
        self.key_events.iter().any(|event| event.is_named(named.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_state_and_frame_reset() {
        let mut input = InputState::new();
        input.press_button(MouseButton::Left);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(input.any_button_just_pressed());

        input.begin_frame();
        assert!(input.is_button_down(MouseButton::Left));
        assert!(!input.any_button_just_pressed());

        input.release_button(MouseButton::Left);
        assert!(!input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_released(MouseButton::Left));
    }

    #[test]
    fn test_key_events_carry_modifiers() {
        let mut input = InputState::new();
        input.press_key(Key::Named(NamedKey::Shift), false, false);
        input.press_key(Key::Named(NamedKey::Tab), false, false);

        let tab = input.key_events.last().cloned();
        assert_eq!(tab.map(|e| e.modifiers.shift), Some(true));

        input.release_key(Key::Named(NamedKey::Shift));
        assert!(!input.modifiers.shift);
    }

    #[test]
    fn test_repeats_are_filtered() {
        let mut input = InputState::new();
        input.press_key(Key::Named(NamedKey::Escape), true, false);
        assert!(!input.is_named_key_just_pressed(NamedKey::Escape));

        input.press_key(Key::Named(NamedKey::Escape), true, true);
        assert!(input.is_named_key_just_pressed(NamedKey::Escape));
    }
}
