//! # Ticker configuration.
//!
//! Provides [`TickerConfig`], the settings a [`Ticker`](crate::Ticker) is built from.
//!
//! ## Sentinel values
//! - `timeout = 0s` → no deadline (the ticker ends only through stop, release or parent cancellation)
//! - `bus_capacity = 0` → clamped to 1 by [`TickerConfig::bus_capacity_clamped`]

use std::borrow::Cow;
use std::time::Duration;

use crate::error::TickerError;

/// Configuration for a single ticker.
///
/// ## Field semantics
/// - `name`: Label carried by every published event
/// - `timeout`: Overall lifetime of the ticker (`0s` = no deadline)
/// - `period`: Interval between natural ticks (must be positive)
/// - `fast_first_tick`: Resolve the first wait immediately instead of after one period
/// - `bus_capacity`: Event bus ring buffer size when the builder creates a bus
#[derive(Clone, Debug)]
pub struct TickerConfig {
    /// Label carried by published events.
    pub name: Cow<'static, str>,

    /// Overall deadline measured from construction.
    ///
    /// - `Duration::ZERO` = no deadline
    /// - `> 0` = the ticker stops once this much time has elapsed
    pub timeout: Duration,

    /// Interval of the periodic timer.
    ///
    /// The first natural tick fires one `period` after construction.
    pub period: Duration,

    /// Pre-seeds one fast signal so the first wait resolves without delay.
    pub fast_first_tick: bool,

    /// Capacity of the broadcast ring buffer used for events.
    pub bus_capacity: usize,
}

impl TickerConfig {
    /// Creates a config with the given timings and defaults for everything else.
    pub fn new(timeout: Duration, period: Duration, fast_first_tick: bool) -> Self {
        Self {
            timeout,
            period,
            fast_first_tick,
            ..Self::default()
        }
    }

    /// Returns the deadline duration as an `Option`.
    ///
    /// - `None` → no deadline
    /// - `Some(d)` → ticker ends `d` after construction
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        if self.timeout == Duration::ZERO {
            None
        } else {
            Some(self.timeout)
        }
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }

    /// Rejects configurations that would produce a malformed timer.
    pub fn validate(&self) -> Result<(), TickerError> {
        if self.period.is_zero() {
            return Err(TickerError::InvalidPeriod {
                period: self.period,
            });
        }
        Ok(())
    }
}

impl Default for TickerConfig {
    /// Default configuration:
    ///
    /// - `name = "ticker"`
    /// - `timeout = 0s` (no deadline)
    /// - `period = 1s`
    /// - `fast_first_tick = false`
    /// - `bus_capacity = 64`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("ticker"),
            timeout: Duration::ZERO,
            period: Duration::from_secs(1),
            fast_first_tick: false,
            bus_capacity: 64,
        }
    }
}
