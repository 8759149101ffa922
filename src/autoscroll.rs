//! Auto-scroll timer management.
//!
//! The timer is a background tokio task that delivers [`HostEvent::AutoTick`]
//! into the controller's event channel every `delay`. It never touches
//! controller state itself, so all index mutation stays on the event loop.
//!
//! `start` is idempotent: arming an already-armed timer is a no-op, so rapid
//! hover enter/leave cycles or repeated manual-navigation resets can never
//! stack concurrent timers.

use crate::input::HostEvent;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Default interval between automatic advances.
pub const DEFAULT_AUTO_SCROLL_DELAY: Duration = Duration::from_millis(5000);

/// Handle to the at-most-one live recurring auto-scroll timer.
pub struct AutoScroll {
    delay: Duration,
    tx: UnboundedSender<HostEvent>,
    task: Option<JoinHandle<()>>,
}

impl AutoScroll {
    /// Create an unarmed timer that will deliver ticks through `tx`.
    pub fn new(delay: Duration, tx: UnboundedSender<HostEvent>) -> Self {
        Self {
            delay,
            tx,
            task: None,
        }
    }

    /// Arm the recurring timer. No-op if it is already armed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.is_armed() {
            return;
        }

        let delay = self.delay;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(delay).await;
                if tx.send(HostEvent::AutoTick).is_err() {
                    // Event loop is gone; nothing left to advance.
                    break;
                }
            }
        }));
        debug!("auto-scroll armed (every {:?})", delay);
    }

    /// Cancel the live timer, if any. Safe to call unconditionally.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("auto-scroll stopped");
        }
    }

    /// True while a recurring timer is live.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for AutoScroll {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn timer(delay_ms: u64) -> (AutoScroll, mpsc::UnboundedReceiver<HostEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AutoScroll::new(Duration::from_millis(delay_ms), tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn armed_timer_delivers_recurring_ticks() {
        let (mut auto, mut rx) = timer(5000);
        auto.start();
        assert!(auto.is_armed());

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(rx.try_recv().unwrap(), HostEvent::AutoTick);
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(rx.try_recv().unwrap(), HostEvent::AutoTick);
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent_while_armed() {
        let (mut auto, mut rx) = timer(5000);
        auto.start();
        auto.start();
        auto.start();

        tokio::time::sleep(Duration::from_millis(5001)).await;
        // A stacked timer would deliver one tick per duplicate.
        assert_eq!(rx.try_recv().unwrap(), HostEvent::AutoTick);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_pending_ticks() {
        let (mut auto, mut rx) = timer(5000);
        auto.start();
        auto.stop();
        assert!(!auto.is_armed());

        tokio::time::sleep(Duration::from_millis(10_001)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stop_twice_is_safe_and_leaves_timer_absent() {
        let (mut auto, _rx) = timer(5000);
        auto.stop();
        auto.stop();
        assert!(!auto.is_armed());

        auto.start();
        auto.stop();
        auto.stop();
        assert!(!auto.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop_rearms_the_countdown() {
        let (mut auto, mut rx) = timer(5000);
        auto.start();

        tokio::time::sleep(Duration::from_millis(3000)).await;
        auto.stop();
        auto.start();

        // The original countdown would have fired at t=5000; the reset one
        // fires at t=8000.
        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert!(rx.try_recv().is_err());
        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(rx.try_recv().unwrap(), HostEvent::AutoTick);
    }
}
