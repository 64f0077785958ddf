//! # Events emitted by tickers.
//!
//! The [`EventKind`] enum classifies what happened to a ticker:
//! - **Lifecycle events**: started, stopped
//! - **Tick events**: a tick was delivered to a waiter
//! - **Control events**: trigger/release requests and dropped signals
//!
//! The [`Event`] struct carries metadata such as the ticker name, the tick
//! number, where the tick came from, and why the ticker stopped.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use tickvisor::{Event, EventKind, TickSource};
//!
//! let ev = Event::new(EventKind::TickDelivered)
//!     .with_ticker("poller")
//!     .with_source(TickSource::Timer)
//!     .with_tick(3);
//!
//! assert_eq!(ev.kind, EventKind::TickDelivered);
//! assert_eq!(ev.ticker.as_deref(), Some("poller"));
//! assert_eq!(ev.tick, Some(3));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of ticker events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Ticker was constructed.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `period_ms`: configured period
    /// - `timeout_ms`: configured timeout (absent when there is no deadline)
    TickerStarted,

    /// A wait resolved as proceed.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `tick`: running tick count (1-based)
    /// - `source`: `Timer` or `Signal`
    TickDelivered,

    /// A trigger signal was accepted into the control buffer.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    TriggerRequested,

    /// A release signal was accepted into the control buffer.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    ReleaseRequested,

    /// A trigger or release was dropped because the control buffer was full.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `source`: always `Signal`
    SignalDropped,

    /// Ticker reached its terminal state. Published at most once per ticker.
    ///
    /// Sets:
    /// - `ticker`: ticker name
    /// - `reason`: why it stopped
    /// - `tick`: ticks delivered before stopping
    TickerStopped,
}

/// Origin of a delivered tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSource {
    /// The periodic timer fired.
    Timer,
    /// A trigger (or the pre-seeded fast first tick) was consumed.
    Signal,
}

/// Why a ticker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// [`Ticker::stop`](crate::Ticker::stop) was called.
    Stopped,
    /// A release signal was consumed by a waiter.
    Released,
    /// The configured timeout elapsed.
    Expired,
    /// The parent lifetime was cancelled.
    Canceled,
}

impl StopReason {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            StopReason::Stopped => "stopped",
            StopReason::Released => "released",
            StopReason::Expired => "expired",
            StopReason::Canceled => "canceled",
        }
    }
}

/// Ticker event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the ticker.
    pub ticker: Option<Arc<str>>,
    /// Tick count.
    pub tick: Option<u64>,
    /// Tick origin.
    pub source: Option<TickSource>,
    /// Stop reason.
    pub reason: Option<StopReason>,
    /// Ticker period in milliseconds (compact).
    pub period_ms: Option<u32>,
    /// Ticker timeout in milliseconds (compact).
    pub timeout_ms: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            ticker: None,
            tick: None,
            source: None,
            reason: None,
            period_ms: None,
            timeout_ms: None,
        }
    }

    /// Attaches a ticker name.
    #[inline]
    pub fn with_ticker(mut self, name: impl Into<Arc<str>>) -> Self {
        self.ticker = Some(name.into());
        self
    }

    /// Attaches a tick count.
    #[inline]
    pub fn with_tick(mut self, n: u64) -> Self {
        self.tick = Some(n);
        self
    }

    /// Attaches the origin of a tick.
    #[inline]
    pub fn with_source(mut self, source: TickSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Attaches a stop reason.
    #[inline]
    pub fn with_reason(mut self, reason: StopReason) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Attaches the ticker period (stored as milliseconds).
    #[inline]
    pub fn with_period(mut self, d: Duration) -> Self {
        self.period_ms = Some(compact_ms(d));
        self
    }

    /// Attaches the ticker timeout (stored as milliseconds).
    #[inline]
    pub fn with_timeout(mut self, d: Duration) -> Self {
        self.timeout_ms = Some(compact_ms(d));
        self
    }
}

fn compact_ms(d: Duration) -> u32 {
    d.as_millis().min(u128::from(u32::MAX)) as u32
}
