//! Carousel controller and event loop.
//!
//! `Carousel` owns the slide-index state, the injected viewport, the input
//! mapping, and the auto-scroll timer. Every state mutation flows through
//! [`Carousel::process_event`], which runs to completion before the next event
//! is handled, so the index and timer handle are only ever touched from one
//! task.

use crate::autoscroll::AutoScroll;
use crate::config::CarouselConfig;
use crate::error::{Result, SlidewheelError};
use crate::input::{CarouselAction, HostEvent, InputStateMachine, NavRequest};
use crate::state::SlideState;
use crate::viewport::{RenderFrame, Viewport};
use log::{debug, info};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// How long each loop iteration waits for a viewport event.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// The carousel controller.
///
/// Construction resolves and validates the host once; a viewport whose
/// indicators do not line up with its slides never produces a running
/// controller. A zero-slide deck produces a controller whose navigation and
/// auto-scroll are inert.
pub struct Carousel {
    state: SlideState,
    viewport: Box<dyn Viewport>,
    input: InputStateMachine,
    auto_scroll: AutoScroll,
    auto_scroll_enabled: bool,
    tick_rx: UnboundedReceiver<HostEvent>,
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("auto_scroll_enabled", &self.auto_scroll_enabled)
            .finish_non_exhaustive()
    }
}

impl Carousel {
    /// Create a controller for `viewport`, positioned at slide 0.
    pub fn new(viewport: Box<dyn Viewport>, config: CarouselConfig) -> Result<Self> {
        let slides = viewport.slide_count();
        let indicators = viewport.indicator_count();
        if indicators != slides {
            return Err(SlidewheelError::viewport(format!(
                "expected one indicator per slide, got {indicators} indicators for {slides} slides"
            )));
        }

        let (tick_tx, tick_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state: SlideState::new(slides),
            viewport,
            input: InputStateMachine::with_threshold(config.swipe_threshold),
            auto_scroll: AutoScroll::new(config.auto_scroll_delay, tick_tx),
            auto_scroll_enabled: config.auto_scroll,
            tick_rx,
        })
    }

    /// Zero-based index of the slide currently shown.
    pub fn current(&self) -> usize {
        self.state.current()
    }

    /// Total number of slides.
    pub fn slide_count(&self) -> usize {
        self.state.count()
    }

    /// True while the auto-scroll timer is live.
    pub fn auto_scroll_armed(&self) -> bool {
        self.auto_scroll.is_armed()
    }

    /// Arm the auto-scroll timer. No-op when already armed, when auto-scroll
    /// is disabled by configuration, or when the deck is empty.
    pub fn start_auto_scroll(&mut self) {
        if self.auto_scroll_enabled && !self.state.is_empty() {
            self.auto_scroll.start();
        }
    }

    /// Cancel the auto-scroll timer if it is live. Safe to call repeatedly.
    pub fn stop_auto_scroll(&mut self) {
        self.auto_scroll.stop();
    }

    /// Run the controller against its viewport until the host detaches.
    pub async fn run(&mut self) -> Result<()> {
        self.viewport.initialize()?;
        self.render()?;
        self.start_auto_scroll();
        info!(
            "carousel running: {} slides, auto-scroll {}",
            self.state.count(),
            if self.auto_scroll_armed() { "on" } else { "off" }
        );

        let mut running = true;
        while running {
            running = self.process_pending_ticks()?;

            if running {
                if let Some(event) = self.viewport.poll_event(Some(POLL_TIMEOUT))? {
                    running = self.process_event(event)?;
                }
            }

            // Yield so the timer task gets scheduled between iterations.
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        self.stop_auto_scroll();
        self.viewport.cleanup()?;
        Ok(())
    }

    /// Drain and handle any auto-scroll ticks queued since the last call.
    ///
    /// Exposed for embeddings that drive their own loop. Returns `false` once
    /// shutdown has been requested.
    pub fn process_pending_ticks(&mut self) -> Result<bool> {
        while let Ok(event) = self.tick_rx.try_recv() {
            if !self.process_event(event)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Handle one host event to completion. Returns `false` on shutdown.
    pub fn process_event(&mut self, event: HostEvent) -> Result<bool> {
        match self.input.handle_event(event) {
            CarouselAction::Navigate {
                request,
                reset_timer,
            } => {
                if self.state.is_empty() {
                    // No valid index exists; navigation is inert.
                    return Ok(true);
                }
                match request {
                    NavRequest::Advance(direction) => self.state.advance(direction),
                    NavRequest::JumpTo(index) => self.state.jump_to(index)?,
                }
                debug!("navigated to slide {}", self.state.current());
                self.render()?;

                if reset_timer {
                    // Manual click navigation restarts the countdown.
                    self.stop_auto_scroll();
                    self.start_auto_scroll();
                }
                Ok(true)
            }
            CarouselAction::PauseAutoScroll => {
                self.stop_auto_scroll();
                Ok(true)
            }
            CarouselAction::ResumeAutoScroll => {
                self.start_auto_scroll();
                Ok(true)
            }
            CarouselAction::Shutdown => {
                debug!("host detached");
                Ok(false)
            }
            CarouselAction::NoAction => Ok(true),
        }
    }

    /// Emit the frame for the current slide to the viewport.
    ///
    /// Inert on an empty deck: there is no slide to position and no indicator
    /// to mark.
    pub fn render(&mut self) -> Result<()> {
        if self.state.is_empty() {
            return Ok(());
        }
        self.viewport
            .render(&RenderFrame::for_slide(self.state.current()))
    }
}
