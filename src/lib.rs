//! # slidewheel - Event-Driven Carousel Controller
//!
//! A carousel controller that owns slide-index state, auto-advances on a
//! recurring timer, and handles manual navigation from next/prev controls,
//! indicator clicks, keyboard arrows, and touch swipes. Rendering and event
//! delivery are delegated to an injected [`Viewport`] host, so the same
//! controller drives the bundled terminal demo and any embedding that can
//! supply the trait.
//!
//! ## Behavior
//!
//! - **Circular navigation**: advancing past the last slide wraps to the
//!   first, and retreating past the first wraps to the last
//! - **Auto-scroll**: advances every five seconds by default; pauses while
//!   the pointer hovers the carousel and resumes on leave
//! - **Countdown reset**: control and indicator clicks restart the
//!   auto-advance countdown; keyboard and swipe navigation leave it running
//! - **Swipe detection**: horizontal touch travel past a threshold advances
//!   in the dragged direction
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`state`] - Slide-index state and circular transition rules
//! - [`input`] - Host events and the event-to-action mapping
//! - [`viewport`] - The injected host abstraction and the terminal demo host
//! - [`autoscroll`] - Auto-scroll timer lifecycle
//! - [`app`] - The controller and its event loop

// Core modules
pub mod error;
pub mod state;

// Host-facing subsystems
pub mod input;
pub mod viewport;

// Timer and coordination
pub mod app;
pub mod autoscroll;
pub mod config;

// Re-export commonly used types for convenience
pub use error::{Result, SlidewheelError};

// Public API surface for external usage
pub use app::Carousel;
pub use config::CarouselConfig;
pub use input::HostEvent;
pub use state::Direction;
pub use viewport::{RenderFrame, TerminalViewport, Viewport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
