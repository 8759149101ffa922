//! Viewport trait and render frame protocol.
//!
//! The controller never touches a concrete host directly; it is handed a
//! `Viewport` at construction. This keeps the transition logic independent of
//! the environment and lets tests substitute a scripted double.

use crate::error::Result;
use crate::input::HostEvent;
use std::time::Duration;

/// One rendered position, emitted after every state mutation.
///
/// The offset is the horizontal translation of the slide track in percent of
/// one slide width (`-100 * current`); the active indicator is the single
/// indicator to mark, matching the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFrame {
    pub track_offset_pct: i64,
    pub active_indicator: usize,
}

impl RenderFrame {
    /// Frame showing the slide at `index`.
    pub fn for_slide(index: usize) -> Self {
        Self {
            track_offset_pct: -(index as i64) * 100,
            active_indicator: index,
        }
    }
}

/// Core trait for the hosting environment of a carousel.
///
/// Implementations resolve their elements up front: `slide_count` and
/// `indicator_count` must be stable for the lifetime of the viewport. The
/// controller validates their agreement once at construction and treats a
/// mismatch as a fatal configuration error.
pub trait Viewport {
    /// Number of slides the host resolved.
    fn slide_count(&self) -> usize;

    /// Number of indicator elements the host resolved.
    fn indicator_count(&self) -> usize;

    /// Apply one frame: position the track and mark the active indicator.
    ///
    /// Side effect only; called exactly once per state mutation and once at
    /// initialization.
    fn render(&mut self, frame: &RenderFrame) -> Result<()>;

    /// Yield the next input event, or `None` if nothing arrived within the
    /// timeout. Events must be delivered in the order the host observed them.
    fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<HostEvent>>;

    /// Prepare the host for rendering (raw mode, alternate screen, ...).
    fn initialize(&mut self) -> Result<()>;

    /// Restore the host to its pre-initialize state.
    fn cleanup(&mut self) -> Result<()>;
}
