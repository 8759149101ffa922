//! Event-to-action mapping for the carousel controller.
//!
//! `InputStateMachine` turns raw [`HostEvent`]s into domain-level
//! [`CarouselAction`]s. The mapping is the single auditable table of what each
//! input source does, including which interactions reset the auto-scroll
//! countdown: control and indicator clicks do, keyboard and swipe navigation
//! deliberately do not.
//!
//! The only state the machine carries is the in-flight swipe origin, recorded
//! at touch-start and consumed at touch-end.

use crate::input::events::{HostEvent, NavKey};
use crate::state::Direction;

/// Minimum horizontal travel, in screen units, for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// What kind of navigation an action requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Step one slide forward or backward.
    Advance(Direction),
    /// Jump straight to a slide index.
    JumpTo(usize),
}

/// High-level controller actions emitted by the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselAction {
    /// Navigate, optionally restarting the auto-scroll countdown afterward.
    Navigate {
        request: NavRequest,
        reset_timer: bool,
    },
    /// Pointer is hovering; stop the auto-scroll timer.
    PauseAutoScroll,
    /// Pointer left; re-arm the auto-scroll timer.
    ResumeAutoScroll,
    /// Host detached; shut the event loop down.
    Shutdown,
    /// Event carried no controller-visible meaning (e.g. sub-threshold swipe).
    NoAction,
}

/// Maps host events to controller actions, tracking swipe gestures.
pub struct InputStateMachine {
    swipe_origin: Option<f64>,
    swipe_threshold: f64,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_threshold(swipe_threshold: f64) -> Self {
        Self {
            swipe_origin: None,
            swipe_threshold,
        }
    }

    pub fn handle_event(&mut self, event: HostEvent) -> CarouselAction {
        match event {
            HostEvent::NextClick => CarouselAction::Navigate {
                request: NavRequest::Advance(Direction::Forward),
                reset_timer: true,
            },
            HostEvent::PrevClick => CarouselAction::Navigate {
                request: NavRequest::Advance(Direction::Backward),
                reset_timer: true,
            },
            HostEvent::IndicatorClick(index) => CarouselAction::Navigate {
                request: NavRequest::JumpTo(index),
                reset_timer: true,
            },
            HostEvent::Key(NavKey::ArrowRight) => CarouselAction::Navigate {
                request: NavRequest::Advance(Direction::Forward),
                reset_timer: false,
            },
            HostEvent::Key(NavKey::ArrowLeft) => CarouselAction::Navigate {
                request: NavRequest::Advance(Direction::Backward),
                reset_timer: false,
            },
            HostEvent::TouchStart { x } => {
                self.swipe_origin = Some(x);
                CarouselAction::NoAction
            }
            HostEvent::TouchEnd { x } => {
                // A touch-end without a matching start carries no gesture.
                let Some(start_x) = self.swipe_origin.take() else {
                    return CarouselAction::NoAction;
                };
                match self.resolve_swipe(start_x, x) {
                    Some(direction) => CarouselAction::Navigate {
                        request: NavRequest::Advance(direction),
                        reset_timer: false,
                    },
                    None => CarouselAction::NoAction,
                }
            }
            HostEvent::PointerEnter => CarouselAction::PauseAutoScroll,
            HostEvent::PointerLeave => CarouselAction::ResumeAutoScroll,
            HostEvent::AutoTick => CarouselAction::Navigate {
                request: NavRequest::Advance(Direction::Forward),
                reset_timer: false,
            },
            HostEvent::Detach => CarouselAction::Shutdown,
        }
    }

    /// Decide the swipe direction, if the travel distance exceeds the threshold.
    ///
    /// Dragging the finger leftward (`start_x > end_x`) pulls the next slide in,
    /// so it advances forward; dragging rightward retreats.
    fn resolve_swipe(&self, start_x: f64, end_x: f64) -> Option<Direction> {
        if start_x - end_x > self.swipe_threshold {
            Some(Direction::Forward)
        } else if end_x - start_x > self.swipe_threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(direction: Direction, reset_timer: bool) -> CarouselAction {
        CarouselAction::Navigate {
            request: NavRequest::Advance(direction),
            reset_timer,
        }
    }

    #[test]
    fn control_clicks_navigate_and_reset_timer() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::NextClick),
            advance(Direction::Forward, true)
        );
        assert_eq!(
            sm.handle_event(HostEvent::PrevClick),
            advance(Direction::Backward, true)
        );
    }

    #[test]
    fn indicator_click_jumps_and_resets_timer() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::IndicatorClick(2)),
            CarouselAction::Navigate {
                request: NavRequest::JumpTo(2),
                reset_timer: true,
            }
        );
    }

    #[test]
    fn arrow_keys_navigate_without_timer_reset() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::Key(NavKey::ArrowRight)),
            advance(Direction::Forward, false)
        );
        assert_eq!(
            sm.handle_event(HostEvent::Key(NavKey::ArrowLeft)),
            advance(Direction::Backward, false)
        );
    }

    #[test]
    fn leftward_swipe_advances_forward() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::TouchStart { x: 200.0 }),
            CarouselAction::NoAction
        );
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 100.0 }),
            advance(Direction::Forward, false)
        );
    }

    #[test]
    fn rightward_swipe_advances_backward() {
        let mut sm = InputStateMachine::new();
        sm.handle_event(HostEvent::TouchStart { x: 100.0 });
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 200.0 }),
            advance(Direction::Backward, false)
        );
    }

    #[test]
    fn sub_threshold_swipe_is_ignored() {
        let mut sm = InputStateMachine::new();
        sm.handle_event(HostEvent::TouchStart { x: 100.0 });
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 130.0 }),
            CarouselAction::NoAction
        );
    }

    #[test]
    fn travel_exactly_at_threshold_is_ignored() {
        let mut sm = InputStateMachine::new();
        sm.handle_event(HostEvent::TouchStart { x: 150.0 });
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 100.0 }),
            CarouselAction::NoAction
        );
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 10.0 }),
            CarouselAction::NoAction
        );
    }

    #[test]
    fn swipe_origin_is_consumed_per_gesture() {
        let mut sm = InputStateMachine::new();
        sm.handle_event(HostEvent::TouchStart { x: 300.0 });
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 100.0 }),
            advance(Direction::Forward, false)
        );
        // Second touch-end with no new start must not reuse the old origin.
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 100.0 }),
            CarouselAction::NoAction
        );
    }

    #[test]
    fn hover_events_pause_and_resume() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::PointerEnter),
            CarouselAction::PauseAutoScroll
        );
        assert_eq!(
            sm.handle_event(HostEvent::PointerLeave),
            CarouselAction::ResumeAutoScroll
        );
    }

    #[test]
    fn auto_tick_advances_without_timer_reset() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::AutoTick),
            advance(Direction::Forward, false)
        );
    }

    #[test]
    fn detach_requests_shutdown() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_event(HostEvent::Detach),
            CarouselAction::Shutdown
        );
    }

    #[test]
    fn custom_threshold_is_honored() {
        let mut sm = InputStateMachine::with_threshold(10.0);
        sm.handle_event(HostEvent::TouchStart { x: 100.0 });
        assert_eq!(
            sm.handle_event(HostEvent::TouchEnd { x: 85.0 }),
            advance(Direction::Forward, false)
        );
    }
}
