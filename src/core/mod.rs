//! Ticker core: scope, control channel and the ticker itself.
//!
//! Internal modules:
//! - [`lifetime`]: cancellable scope with optional deadline;
//! - [`signal`]: bounded, non-blocking control channel (trigger/release);
//! - [`ticker`]: the three-way race behind `wait()`;
//! - [`builder`]: construction with an optional event bus;
//! - [`config`]: timings and defaults.

mod builder;
mod config;
mod lifetime;
mod signal;
mod ticker;

pub use builder::TickerBuilder;
pub use config::TickerConfig;
pub use lifetime::Lifetime;
pub use ticker::{Tick, Ticker};
