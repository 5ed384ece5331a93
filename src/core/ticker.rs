//! # Tick Sources
//!
//! A running engine is driven by a background tokio task that sends an
//! `Action::Tick` into the event loop once per period.
//!
//! ```text
//!   Tickers::start(src) ──▶ tokio task ──(every 1s)──▶ mpsc ──▶ event loop ──▶ update()
//!        │                                                        ▲
//!        └── TickHandle (abort on cancel / replace / drop)        │
//!                                               Tickers::accepts(tick) filters stale ticks
//! ```
//!
//! Each handle carries a generation number. A tick already sitting in the
//! channel when its handle was cancelled fails `Tickers::accepts` and is
//! dropped by the loop, so a restarted countdown never sees an extra tick.

use log::{debug, info};
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::action::Action;

/// One scheduler tick per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Which engine a tick source drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSource {
    Stopwatch,
    Countdown,
}

/// A running tick task. Cancelled exactly once: by `cancel()` or on drop.
#[derive(Debug)]
pub struct TickHandle {
    source: TickSource,
    generation: u64,
    abort: Option<AbortHandle>,
}

impl TickHandle {
    /// Spawn a task sending `Action::Tick` every `period`, starting one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        source: TickSource,
        generation: u64,
        period: Duration,
        tx: Sender<Action>,
    ) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Action::Tick { source, generation }).is_err() {
                    debug!("{:?} ticker exiting: receiver dropped", source);
                    return;
                }
            }
        });
        debug!("{:?} ticker #{} spawned", source, generation);
        Self {
            source,
            generation,
            abort: Some(task.abort_handle()),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.abort.is_some()
    }

    /// Abort the task. Later calls are no-ops.
    pub fn cancel(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
            debug!("{:?} ticker #{} cancelled", self.source, self.generation);
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owns at most one tick source per engine.
pub struct Tickers {
    period: Duration,
    tx: Sender<Action>,
    next_generation: u64,
    stopwatch: Option<TickHandle>,
    countdown: Option<TickHandle>,
}

impl Tickers {
    pub fn new(period: Duration, tx: Sender<Action>) -> Self {
        Self {
            period,
            tx,
            next_generation: 1,
            stopwatch: None,
            countdown: None,
        }
    }

    fn slot(&mut self, source: TickSource) -> &mut Option<TickHandle> {
        match source {
            TickSource::Stopwatch => &mut self.stopwatch,
            TickSource::Countdown => &mut self.countdown,
        }
    }

    /// Start ticking `source`, replacing (and cancelling) any existing handle.
    pub fn start(&mut self, source: TickSource) {
        let generation = self.next_generation;
        self.next_generation += 1;
        let handle = TickHandle::spawn(source, generation, self.period, self.tx.clone());
        // Assigning drops the old handle, which cancels it
        *self.slot(source) = Some(handle);
    }

    /// Stop ticking `source`. No-op if it wasn't ticking.
    pub fn stop(&mut self, source: TickSource) {
        if let Some(mut handle) = self.slot(source).take() {
            handle.cancel();
        }
    }

    pub fn is_ticking(&self, source: TickSource) -> bool {
        let slot = match source {
            TickSource::Stopwatch => &self.stopwatch,
            TickSource::Countdown => &self.countdown,
        };
        slot.as_ref().is_some_and(TickHandle::is_active)
    }

    /// Whether a tick with this source and generation came from a live handle.
    pub fn accepts(&self, source: TickSource, generation: u64) -> bool {
        let slot = match source {
            TickSource::Stopwatch => &self.stopwatch,
            TickSource::Countdown => &self.countdown,
        };
        slot.as_ref().is_some_and(|h| h.generation() == generation)
    }

    /// Cancel every tick source.
    pub fn shutdown(&mut self) {
        info!("Shutting down tickers");
        self.stop(TickSource::Stopwatch);
        self.stop(TickSource::Countdown);
    }
}
