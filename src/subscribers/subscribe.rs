//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers into a
//! ticker's event bus. A subscriber is driven by [`listen`](crate::listen), which
//! feeds it every event published after it subscribed.
//!
//! ## Contract
//! - Implementations may be slow; the ticker never waits for them. A subscriber
//!   that falls more than the bus capacity behind skips the oldest events.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use tickvisor::{Event, EventKind, Subscribe};
//!
//! struct Stalls;
//!
//! #[async_trait]
//! impl Subscribe for Stalls {
//!     async fn on_event(&self, ev: &Event) {
//!         if ev.kind == EventKind::SignalDropped {
//!             // raise an alert...
//!         }
//!     }
//!     fn name(&self) -> &'static str { "stalls" }
//! }
//! ```

use crate::events::Event;
use async_trait::async_trait;

/// Contract for event subscribers.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
