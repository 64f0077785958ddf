//! # Subscriber driver.
//!
//! Connects a [`Subscribe`] implementation to a bus receiver.
//!
//! ```text
//! Ticker ── publish(Event) ──► Bus ──► broadcast::Receiver ──► listen() ──► Subscribe::on_event
//! ```
//!
//! The loop ends when every bus sender is gone (all tickers built with the bus
//! and all `Bus` clones are dropped).

use std::sync::Arc;

use tokio::{sync::broadcast, task::JoinHandle};

use crate::{
    events::{Bus, Event},
    subscribers::Subscribe,
};

/// Feeds every received event to `subscriber` until the bus closes.
///
/// Lagged events are skipped.
pub async fn listen(mut rx: broadcast::Receiver<Event>, subscriber: Arc<dyn Subscribe>) {
    loop {
        match rx.recv().await {
            Ok(ev) => subscriber.on_event(&ev).await,
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Subscribes to `bus` now and drives `subscriber` on a new tokio task.
pub fn spawn_listener(bus: &Bus, subscriber: Arc<dyn Subscribe>) -> JoinHandle<()> {
    tokio::spawn(listen(bus.subscribe(), subscriber))
}
