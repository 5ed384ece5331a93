//! # Core Application Logic
//!
//! This module contains Tempo's timekeeping logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Engines (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Tickers (1s clock)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`duration`]: `HH:MM:SS` formatting and free-text duration parsing
//! - [`stopwatch`]: The `StopwatchEngine` — counts up while running
//! - [`countdown`]: The `CountdownEngine` — counts down, finishes once
//! - [`ticker`]: Cancellable one-second tick sources
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`theme`]: Light/dark theme preference
//! - [`config`]: `~/.tempo/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod countdown;
pub mod duration;
pub mod state;
pub mod stopwatch;
pub mod theme;
pub mod ticker;
