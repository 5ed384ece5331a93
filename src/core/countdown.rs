//! # Countdown Engine
//!
//! Counts down from a configured duration and finishes exactly once per run.
//!
//! ```text
//!            start()              remaining hits 0
//!   Idle ───────────────▶ Running ─────────────────▶ Finished
//!    ▲                      │                          │
//!    └────── stop() ────────┘                          │
//!    Running ◀──────────────── start() ────────────────┘
//! ```
//!
//! `finished` is only ever set by natural expiry. A manual `stop()` returns
//! to Idle with the remaining time frozen.

use log::{debug, info};

use crate::core::duration::{format_hms, parse_field_lossy, total_seconds};

/// What a single `tick()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Ignored,
    /// One second was taken off the remaining time.
    Advanced,
    /// The countdown reached zero and is now finished.
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownEngine {
    total_seconds: u64,
    remaining_seconds: u64,
    running: bool,
    finished: bool,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Set the duration used by the next `start()`.
    pub fn configure(&mut self, hours: u64, minutes: u64, seconds: u64) {
        self.total_seconds = total_seconds(hours, minutes, seconds);
        debug!("Countdown configured: {}", format_hms(self.total_seconds));
    }

    /// Configure from three free-text fields. Unreadable fields count as 0.
    pub fn configure_from_text(&mut self, hours: &str, minutes: &str, seconds: &str) {
        self.configure(
            parse_field_lossy(hours),
            parse_field_lossy(minutes),
            parse_field_lossy(seconds),
        );
    }

    /// Begin a run from the configured duration, restarting if one is in progress.
    pub fn start(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.running = true;
        self.finished = false;
        info!("Countdown started from {}", self.format());
    }

    /// Abandon the current run. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("Countdown stopped with {} remaining", self.format());
        true
    }

    /// Apply the completion transition if the run has reached zero.
    ///
    /// Returns `true` only on the call that performs the transition.
    pub fn settle(&mut self) -> bool {
        if self.running && self.remaining_seconds == 0 {
            self.running = false;
            self.finished = true;
            info!("Countdown finished");
            return true;
        }
        false
    }

    /// Take one second off the remaining time, then check for completion.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            debug!("Countdown tick: {} remaining", self.remaining_seconds);
        }
        if self.settle() {
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced
        }
    }

    pub fn format(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}
