//! # tickvisor
//!
//! **tickvisor** is a cancellable periodic ticker for tokio.
//!
//! A [`Ticker`] resolves [`Ticker::wait`] once per period until its lifetime
//! ends. Callers can force an immediate tick ([`Ticker::trigger`]), end the
//! sequence through the wait loop ([`Ticker::release`]), or end it at once
//! ([`Ticker::stop`]). It is a building block for polling loops, health checks
//! and retry schedulers; what happens on each tick is up to the caller.
//!
//! ## Architecture
//! ```text
//!   parent Lifetime ──child──► Ticker.lifetime (deadline = now + timeout, if any)
//!                                   │
//!   trigger() ─┐                    ▼
//!   release() ─┴─► control (cap 2) ─┐
//!                                   ├──► wait() ──► Tick::Proceed / Tick::Stopped
//!   Interval (every period) ────────┘
//!                                   │
//!                                   └──► Bus (optional) ──► listen() ──► Subscribe
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types                                |
//! |-------------------|----------------------------------------------------------|------------------------------------------|
//! | **Ticking**       | Periodic waits with deadline, trigger and release.       | [`Ticker`], [`Tick`]                     |
//! | **Scopes**        | Cancellable scopes with deadlines, per-tick work scopes. | [`Lifetime`]                             |
//! | **Configuration** | Timings and defaults.                                    | [`TickerConfig`], [`TickerBuilder`]      |
//! | **Events**        | Lifecycle events on a broadcast bus.                     | [`Event`], [`EventKind`], [`Bus`]        |
//! | **Subscribers**   | Async handlers driven from the bus.                      | [`Subscribe`], [`listen`]                |
//! | **Errors**        | Contract violations and end-of-sequence.                 | [`TickerError`]                          |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWriter` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tickvisor::{Lifetime, Ticker};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let root = Lifetime::new();
//!     let ticker = Ticker::new(&root, Duration::from_millis(50), Duration::from_millis(10), true)?;
//!
//!     let mut polls = 0;
//!     while ticker.wait().await.is_proceed() {
//!         let (scope, _guard) = ticker.tick_scope();
//!         if scope.is_ended() { break; }
//!         polls += 1;
//!     }
//!     assert!(polls >= 1);
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{Lifetime, Tick, Ticker, TickerBuilder, TickerConfig};
pub use error::TickerError;
pub use events::{Bus, Event, EventKind, StopReason, TickSource};
pub use subscribers::{listen, spawn_listener, Subscribe};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
