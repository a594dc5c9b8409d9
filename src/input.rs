//! Raw input to activate gestures
//!
//! Spacebar and pointer presses both mean "activate". A held key's
//! auto-repeat and a pointer that stays down do not fire again.

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

/// Platform input events as delivered by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown,
    PointerUp,
    /// Window lost focus; releases everything held
    Blur,
}

/// Turns raw events into discrete activate gestures
#[derive(Debug, Clone, Default)]
pub struct ActivateDetector {
    space_held: bool,
    pointer_held: bool,
    /// Gestures not yet handed to the simulation
    pending: u32,
}

impl ActivateDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event; returns true if it started a new gesture
    pub fn handle(&mut self, event: RawInput) -> bool {
        let fired = match event {
            RawInput::KeyDown(Key::Space) => !std::mem::replace(&mut self.space_held, true),
            RawInput::KeyUp(Key::Space) => {
                self.space_held = false;
                false
            }
            RawInput::PointerDown => !std::mem::replace(&mut self.pointer_held, true),
            RawInput::PointerUp => {
                self.pointer_held = false;
                false
            }
            RawInput::Blur => {
                self.space_held = false;
                self.pointer_held = false;
                false
            }
            RawInput::KeyDown(Key::Other) | RawInput::KeyUp(Key::Other) => false,
        };
        if fired {
            self.pending += 1;
        }
        fired
    }

    /// Take one pending gesture as this tick's input.
    ///
    /// Gestures queue up so two quick taps between frames land on two
    /// consecutive ticks instead of merging.
    pub fn next_input(&mut self) -> TickInput {
        let activate = self.pending > 0;
        if activate {
            self.pending -= 1;
        }
        TickInput { activate }
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut input = ActivateDetector::new();
        assert!(input.handle(RawInput::KeyDown(Key::Space)));
        assert!(!input.handle(RawInput::KeyDown(Key::Space)));
        assert!(!input.handle(RawInput::KeyDown(Key::Space)));
        input.handle(RawInput::KeyUp(Key::Space));
        assert!(input.handle(RawInput::KeyDown(Key::Space)));
        assert_eq!(input.pending(), 2);
    }

    #[test]
    fn test_pointer_and_key_are_independent() {
        let mut input = ActivateDetector::new();
        assert!(input.handle(RawInput::KeyDown(Key::Space)));
        assert!(input.handle(RawInput::PointerDown));
        assert!(!input.handle(RawInput::PointerDown));
        assert!(!input.handle(RawInput::KeyDown(Key::Other)));
        assert_eq!(input.pending(), 2);
    }

    #[test]
    fn test_blur_releases_held() {
        let mut input = ActivateDetector::new();
        input.handle(RawInput::PointerDown);
        input.handle(RawInput::Blur);
        assert!(input.handle(RawInput::PointerDown));
    }

    #[test]
    fn test_gestures_drain_one_per_tick() {
        let mut input = ActivateDetector::new();
        input.handle(RawInput::PointerDown);
        input.handle(RawInput::PointerUp);
        input.handle(RawInput::PointerDown);
        assert!(input.next_input().activate);
        assert!(input.next_input().activate);
        assert!(!input.next_input().activate);
    }
}
