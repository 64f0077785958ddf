//! # Event subscribers.
//!
//! ## Contents
//! - [`Subscribe`] async handler trait
//! - [`listen`], [`spawn_listener`] drive one subscriber from a [`Bus`](crate::Bus)
//! - `LogWriter` stdout printer (feature `logging`)

mod listen;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use listen::{listen, spawn_listener};
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
