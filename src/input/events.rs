//! Raw events delivered by the hosting viewport.
//!
//! These are the inputs of the controller's event loop: user interactions as
//! the host observed them, plus the auto-scroll tick and a detach signal for
//! hosts that can end (tests, the terminal demo). The mapping from events to
//! controller actions lives in [`crate::input::service`].

/// Navigation keys the controller reacts to. Other keys never reach the
/// controller; the host filters them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// A single host-delivered input event.
///
/// Touch coordinates are horizontal screen positions; the host observes
/// gestures passively and reports the raw positions without consuming them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Click on the "next" control.
    NextClick,
    /// Click on the "previous" control.
    PrevClick,
    /// Click on the indicator for the given slide index.
    IndicatorClick(usize),
    /// Arrow-key press.
    Key(NavKey),
    /// Finger down on the slide track.
    TouchStart { x: f64 },
    /// Finger lifted off the slide track.
    TouchEnd { x: f64 },
    /// Pointer moved over the carousel container.
    PointerEnter,
    /// Pointer left the carousel container.
    PointerLeave,
    /// Recurring auto-scroll timer fired.
    AutoTick,
    /// The host is going away; the controller should stop cleanly.
    Detach,
}
