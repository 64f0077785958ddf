//! Ticker events: types and broadcast bus.
//!
//! ## Contents
//! - [`EventKind`], [`Event`], [`TickSource`], [`StopReason`] event classification and metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! Tickers publish only when built with a bus
//! (see [`TickerBuilder::with_bus`](crate::TickerBuilder::with_bus)).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind, StopReason, TickSource};
