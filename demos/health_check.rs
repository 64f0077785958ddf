//! # Example: health_check
//!
//! A bounded health-check loop: probe every period, give each probe at most one
//! period to finish, and give up after an overall timeout.
//!
//! Demonstrates how to:
//! - Observe a ticker through the event bus with [`LogWriter`].
//! - Bound each unit of work with [`Ticker::tick_scope`].
//! - Let the configured timeout end the loop.
//!
//! ## Run
//! ```bash
//! cargo run --example health_check --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use tickvisor::{spawn_listener, Lifetime, LogWriter, Ticker, TickerConfig, TickerError};

async fn probe(attempt: u64) -> bool {
    // Every third probe hangs longer than a period.
    let latency = if attempt % 3 == 0 { 400 } else { 50 };
    tokio::time::sleep(Duration::from_millis(latency)).await;
    true
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== health_check example ===\n");

    // 1. Configure: probe every 250ms, stop after 2s
    let cfg = TickerConfig {
        name: "health".into(),
        ..TickerConfig::new(Duration::from_secs(2), Duration::from_millis(250), true)
    };

    // 2. Build ticker with events, attach the log subscriber
    let root = Lifetime::new();
    let ticker = Ticker::builder(cfg).with_events().build(&root)?;
    let listener = ticker
        .bus()
        .map(|bus| spawn_listener(bus, Arc::new(LogWriter::new())));

    // 3. Probe loop, each probe bounded by one period
    loop {
        match ticker.tick().await {
            Ok(()) => {}
            Err(TickerError::Stopped) => break,
            Err(e) => return Err(e.into()),
        }
        let attempt = ticker.ticks_delivered();
        let (scope, _guard) = ticker.tick_scope();
        tokio::select! {
            healthy = probe(attempt) => println!("  probe #{attempt}: healthy={healthy}"),
            _ = scope.ended() => println!("  probe #{attempt}: timed out"),
        }
    }

    // 4. Dropping the ticker closes the bus and ends the listener
    drop(ticker);
    if let Some(listener) = listener {
        listener.await?;
    }
    Ok(())
}
