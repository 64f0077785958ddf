//! # LogWriter: simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [started] ticker="poller" period_ms=Some(300) timeout_ms=None
//! [trigger] ticker="poller"
//! [tick] ticker="poller" n=Some(1) source=Some(Signal)
//! [release] ticker="poller"
//! [dropped] ticker="poller"
//! [stopped] ticker="poller" reason=released ticks=Some(1)
//! ```

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;
use async_trait::async_trait;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let ticker = e.ticker.as_deref().unwrap_or("unknown");
        match e.kind {
            EventKind::TickerStarted => {
                println!(
                    "[started] ticker={ticker:?} period_ms={:?} timeout_ms={:?}",
                    e.period_ms, e.timeout_ms
                );
            }
            EventKind::TickDelivered => {
                println!("[tick] ticker={ticker:?} n={:?} source={:?}", e.tick, e.source);
            }
            EventKind::TriggerRequested => println!("[trigger] ticker={ticker:?}"),
            EventKind::ReleaseRequested => println!("[release] ticker={ticker:?}"),
            EventKind::SignalDropped => println!("[dropped] ticker={ticker:?}"),
            EventKind::TickerStopped => {
                println!(
                    "[stopped] ticker={ticker:?} reason={} ticks={:?}",
                    e.reason.map(|r| r.as_label()).unwrap_or("unknown"),
                    e.tick
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
