// minifb only tells us whether a mouse button is down *right now*.
// The terrain needs press/hold/release edges, so we remember last frame.

use crate::types::ButtonState;

#[derive(Debug, Default)]
pub struct ButtonTracker {
    was_down: bool,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the raw "is down" reading for this frame, get the edges back.
    /// Must be called exactly once per frame.
    pub fn step(&mut self, down: bool) -> ButtonState {
        let state = ButtonState {
            pressed: down && !self.was_down,
            held: down,
            released: !down && self.was_down,
        };
        self.was_down = down;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release_each_reported_once() {
        let mut t = ButtonTracker::new();

        let s = t.step(true);
        assert!(s.pressed && s.held && !s.released);

        let s = t.step(true);
        assert!(!s.pressed && s.held && !s.released);

        let s = t.step(false);
        assert!(!s.pressed && !s.held && s.released);

        let s = t.step(false);
        assert_eq!(s, ButtonState::default());
    }

    #[test]
    fn quick_tap_gives_press_then_release() {
        let mut t = ButtonTracker::new();
        assert!(t.step(true).pressed);
        assert!(t.step(false).released);
        assert!(t.step(true).pressed);
    }
}
