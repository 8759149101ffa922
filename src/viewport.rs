//! Viewport abstraction: the injected host the controller renders to and
//! receives events from.

pub mod host;
pub mod terminal;

pub use host::{RenderFrame, Viewport};
pub use terminal::TerminalViewport;
