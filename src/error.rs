//! Error types and handling infrastructure for slidewheel.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **Fail fast on configuration**: a host that cannot supply the elements the
//!   controller needs is rejected at construction, never at event time
//! - **Context preservation**: include relevant information for debugging
//! - **Consistency**: standardized Result type across all modules

use thiserror::Error;

/// The main error type for slidewheel operations.
///
/// This enum covers all possible error conditions that can occur during
/// controller construction, navigation, and host interaction.
#[derive(Error, Debug)]
pub enum SlidewheelError {
    /// Host/terminal related errors (raw mode, draw failures, event polling)
    #[error("Host operation failed: {message}")]
    HostError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The viewport is missing a required element or is internally inconsistent
    #[error("Viewport misconfigured: {message}")]
    ViewportError { message: String },

    /// A programmatic jump targeted a slide that does not exist
    #[error("Slide index {index} out of range (slide count: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Configuration related errors (bad delay, unreadable config file)
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for slidewheel operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the slidewheel codebase.
pub type Result<T> = std::result::Result<T, SlidewheelError>;

impl SlidewheelError {
    /// Create a HostError from an io::Error with additional context
    pub fn host(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::HostError {
            message: message.into(),
            source,
        }
    }

    /// Create a ViewportError with a descriptive message
    pub fn viewport(message: impl Into<String>) -> Self {
        Self::ViewportError {
            message: message.into(),
        }
    }

    /// Create an IndexOutOfRange error for a rejected jump target
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { index, count }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error for host-facing code paths
impl From<std::io::Error> for SlidewheelError {
    fn from(err: std::io::Error) -> Self {
        Self::HostError {
            message: "Host IO operation failed".to_string(),
            source: err,
        }
    }
}
