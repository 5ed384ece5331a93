//! # Stopwatch Engine
//!
//! Counts whole seconds upward while running.
//!
//! ```text
//!   Stopped ──start()──▶ Running
//!      ▲                    │
//!      └──────stop()────────┘      tick(): +1 while Running, no-op otherwise
//! ```
//!
//! The engine never looks at a clock. Something else (see `core::ticker`)
//! calls `tick()` once per second while the engine is running.

use log::{debug, info};

use crate::core::duration::format_hms;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwatchEngine {
    elapsed_seconds: u64,
    running: bool,
}

impl StopwatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        info!("Stopwatch started at {}", self.format());
        true
    }

    /// Stop counting. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("Stopwatch stopped at {}", self.format());
        true
    }

    /// Start if stopped, stop if running. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Stop and zero the stopwatch.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_seconds = 0;
        info!("Stopwatch reset");
    }

    /// Advance by one second. Returns `false` (and changes nothing) when stopped.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        debug!("Stopwatch tick: {}", self.elapsed_seconds);
        true
    }

    pub fn format(&self) -> String {
        format_hms(self.elapsed_seconds)
    }
}
