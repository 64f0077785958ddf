//! # Example: poller
//!
//! A polling loop that checks a queue every period, can be nudged early, and
//! is shut down from another task.
//!
//! Demonstrates how to:
//! - Build a [`Ticker`] with a fast first tick and no deadline.
//! - Call [`Ticker::trigger`] from a producer to poll without waiting a full period.
//! - End the loop with [`Ticker::release`].
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► Ticker::new(root, 0s, 500ms, fast_first_tick = true)
//!   ├─► spawn producer
//!   │     ├─► push job, trigger()   (x3, 200ms apart)
//!   │     └─► release()
//!   └─► while wait() == Proceed { drain queue }
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example poller
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tickvisor::{Lifetime, Tick, Ticker};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== poller example ===\n");

    // 1. Root scope and ticker (no deadline, poll every 500ms, first poll immediately)
    let root = Lifetime::new();
    let ticker = Arc::new(Ticker::new(&root, Duration::ZERO, Duration::from_millis(500), true)?);
    let queue: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));

    // 2. Producer pushes jobs and nudges the poller, then releases it
    let producer = {
        let ticker = Arc::clone(&ticker);
        let queue = Arc::clone(&queue);
        tokio::spawn(async move {
            for job in 1..=3 {
                tokio::time::sleep(Duration::from_millis(200)).await;
                if let Ok(mut q) = queue.lock() {
                    q.push(job);
                }
                ticker.trigger();
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
            ticker.release();
        })
    };

    // 3. Poll loop
    while ticker.wait().await == Tick::Proceed {
        let jobs: Vec<u32> = match queue.lock() {
            Ok(mut q) => q.drain(..).collect(),
            Err(_) => break,
        };
        println!("[poll #{}] jobs={jobs:?}", ticker.ticks_delivered());
    }

    producer.await?;
    println!("\nstopped after {} polls", ticker.ticks_delivered());
    Ok(())
}
