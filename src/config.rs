//! Carousel configuration.
//!
//! Defaults mirror the classic page carousel: advance every five seconds,
//! recognize swipes past 50 screen units of travel. The optional `config`
//! feature adds TOML loading for embeddings that want a config file.

use crate::autoscroll::DEFAULT_AUTO_SCROLL_DELAY;
use crate::input::DEFAULT_SWIPE_THRESHOLD;
use std::time::Duration;

/// Tunable behavior of a carousel controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Whether the auto-scroll timer is armed at all.
    pub auto_scroll: bool,
    /// Interval between automatic advances.
    pub auto_scroll_delay: Duration,
    /// Minimum horizontal travel for a touch to count as a swipe.
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            auto_scroll_delay: DEFAULT_AUTO_SCROLL_DELAY,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    /// Default configuration with auto-scroll disabled.
    pub fn without_auto_scroll() -> Self {
        Self {
            auto_scroll: false,
            ..Self::default()
        }
    }
}

#[cfg(feature = "config")]
mod file {
    use super::CarouselConfig;
    use crate::error::{Result, SlidewheelError};
    use serde::Deserialize;
    use std::time::Duration;

    /// On-disk shape of the configuration; durations are plain milliseconds.
    #[derive(Debug, Deserialize)]
    struct RawConfig {
        auto_scroll: Option<bool>,
        auto_scroll_delay_ms: Option<u64>,
        swipe_threshold: Option<f64>,
    }

    impl CarouselConfig {
        /// Parse a TOML document, filling unset fields with defaults.
        pub fn from_toml_str(contents: &str) -> Result<Self> {
            let raw: RawConfig = toml::from_str(contents)
                .map_err(|err| SlidewheelError::config(format!("invalid config: {err}")))?;

            let defaults = Self::default();
            Ok(Self {
                auto_scroll: raw.auto_scroll.unwrap_or(defaults.auto_scroll),
                auto_scroll_delay: raw
                    .auto_scroll_delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.auto_scroll_delay),
                swipe_threshold: raw.swipe_threshold.unwrap_or(defaults.swipe_threshold),
            })
        }
    }
}
