//! Input subsystem: host event definitions and the event-to-action mapping.

pub mod events;
pub mod service;

pub use events::{HostEvent, NavKey};
pub use service::{CarouselAction, InputStateMachine, NavRequest, DEFAULT_SWIPE_THRESHOLD};
