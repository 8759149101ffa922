//! Slide-index state and the circular transition rules.
//!
//! `SlideState` is the pure core of the controller: a current index that is
//! always valid modulo the slide count, mutated only through `advance` and
//! `jump_to`. Rendering and timer concerns live elsewhere; this module has no
//! host dependencies so the wrap-around arithmetic is trivially testable.

use crate::error::{Result, SlidewheelError};

/// Navigation direction along the slide track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the next slide (higher index, wrapping to 0 past the end).
    Forward,
    /// Toward the previous slide (lower index, wrapping to the last slide).
    Backward,
}

/// Current slide position within a fixed-length deck.
///
/// Invariant: `current < count` whenever `count > 0`. A zero-slide deck is a
/// degenerate configuration in which every transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    current: usize,
    count: usize,
}

impl SlideState {
    /// Create state for a deck of `count` slides, positioned at slide 0.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Zero-based index of the slide currently shown.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total number of slides in the deck.
    pub fn count(&self) -> usize {
        self.count
    }

    /// True when the deck has no slides and no valid index exists.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Step one slide in `direction`, wrapping circularly at both ends.
    ///
    /// No-op on an empty deck (the modulus would be zero).
    pub fn advance(&mut self, direction: Direction) {
        if self.count == 0 {
            return;
        }
        self.current = match direction {
            Direction::Forward => (self.current + 1) % self.count,
            Direction::Backward => (self.current + self.count - 1) % self.count,
        };
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range targets are a caller error and are rejected rather than
    /// clamped, so a miswired indicator surfaces immediately.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(SlidewheelError::index_out_of_range(index, self.count));
        }
        self.current = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn forward_wraps_past_last_slide() {
        let mut state = SlideState::new(3);
        state.advance(Direction::Forward);
        state.advance(Direction::Forward);
        assert_eq!(state.current(), 2);
        state.advance(Direction::Forward);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn backward_from_zero_wraps_to_last_slide() {
        let mut state = SlideState::new(5);
        state.advance(Direction::Backward);
        assert_eq!(state.current(), 4);
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut state = SlideState::new(1);
        state.advance(Direction::Forward);
        state.advance(Direction::Backward);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn empty_deck_transitions_are_noops() {
        let mut state = SlideState::new(0);
        state.advance(Direction::Forward);
        state.advance(Direction::Backward);
        assert_eq!(state.current(), 0);
        assert!(state.is_empty());
    }

    #[test]
    fn jump_to_valid_index() {
        let mut state = SlideState::new(4);
        state.jump_to(3).unwrap();
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn jump_to_out_of_range_is_rejected() {
        let mut state = SlideState::new(4);
        let err = state.jump_to(4).unwrap_err();
        match err {
            crate::error::SlidewheelError::IndexOutOfRange { index, count } => {
                assert_eq!(index, 4);
                assert_eq!(count, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Rejection leaves the state untouched.
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn jump_on_empty_deck_is_rejected() {
        let mut state = SlideState::new(0);
        assert!(state.jump_to(0).is_err());
    }

    proptest! {
        #[test]
        fn forward_advances_follow_modular_arithmetic(
            count in 1usize..32,
            steps in 0usize..200,
        ) {
            let mut state = SlideState::new(count);
            for _ in 0..steps {
                state.advance(Direction::Forward);
            }
            prop_assert_eq!(state.current(), steps % count);
        }

        #[test]
        fn backward_from_zero_lands_on_last(count in 1usize..32) {
            let mut state = SlideState::new(count);
            state.advance(Direction::Backward);
            prop_assert_eq!(state.current(), count - 1);
        }

        #[test]
        fn forward_then_backward_is_identity(
            count in 1usize..32,
            start in 0usize..32,
        ) {
            let mut state = SlideState::new(count);
            let start = start % count;
            state.jump_to(start).unwrap();
            state.advance(Direction::Forward);
            state.advance(Direction::Backward);
            prop_assert_eq!(state.current(), start);
        }
    }
}
