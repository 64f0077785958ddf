use crate::{core::TickerConfig, error::TickerError, events::Bus};

use super::{lifetime::Lifetime, ticker::Ticker};

/// Builder for constructing a [`Ticker`] with optional features.
pub struct TickerBuilder {
    cfg: TickerConfig,
    bus: Option<Bus>,
}

impl TickerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: TickerConfig) -> Self {
        Self { cfg, bus: None }
    }

    /// Publishes ticker events to an existing bus.
    ///
    /// Share one bus between several tickers to observe them through a single subscriber.
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Publishes ticker events to a new bus sized by [`TickerConfig::bus_capacity`].
    ///
    /// Reach it later through [`Ticker::bus`].
    pub fn with_events(mut self) -> Self {
        self.bus = Some(Bus::new(self.cfg.bus_capacity_clamped()));
        self
    }

    /// Builds the ticker as a child of `parent`.
    ///
    /// Fails with [`TickerError::InvalidPeriod`] if the configured period is zero.
    pub fn build(self, parent: &Lifetime) -> Result<Ticker, TickerError> {
        Ticker::new_internal(self.cfg, parent, self.bus)
    }
}
