//! Device input
//!
//! Platform layers translate raw key and mouse callbacks into [`InputEvent`]s.
//! Held movement keys are tracked here and resolved into an [`Intent`] once
//! per tick.

use crate::sim::Intent;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Start or restart a round
    Restart,
    Other,
}

impl Key {
    /// Map a typed character (keyboard callbacks deliver lowercase movement keys)
    pub fn from_char(c: char) -> Self {
        match c {
            'w' => Key::W,
            'a' => Key::A,
            's' => Key::S,
            'd' => Key::D,
            'r' | 'R' => Key::Restart,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Input event types the game understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// A button press at window pixel coordinates (origin top-left, y down)
    Click { x: f32, y: f32, button: MouseButton },
}

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a press or release; returns false for keys that are not movement keys
    pub fn set(&mut self, key: Key, held: bool) -> bool {
        let slot = match key {
            Key::W => &mut self.w,
            Key::A => &mut self.a,
            Key::S => &mut self.s,
            Key::D => &mut self.d,
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Restart | Key::Other => return false,
        };
        *slot = held;
        true
    }

    /// WASD and arrows drive the same directions
    pub fn intent(&self) -> Intent {
        Intent {
            up: self.w || self.up,
            down: self.s || self.down,
            left: self.a || self.left,
            right: self.d || self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_combine() {
        let mut keys = HeldKeys::default();
        keys.set(Key::W, true);
        keys.set(Key::Right, true);
        let intent = keys.intent();
        assert!(intent.up && intent.right);
        assert!(!intent.down && !intent.left);

        // Releasing the arrow leaves the other source in place
        keys.set(Key::Up, true);
        keys.set(Key::Up, false);
        assert!(keys.intent().up);
    }

    #[test]
    fn test_non_movement_keys_ignored() {
        let mut keys = HeldKeys::default();
        assert!(!keys.set(Key::Restart, true));
        assert!(!keys.set(Key::Other, true));
        assert_eq!(keys.intent(), Intent::default());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('w'), Key::W);
        assert_eq!(Key::from_char('R'), Key::Restart);
        assert_eq!(Key::from_char('W'), Key::Other);
    }
}
