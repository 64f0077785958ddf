//! # Control signals.
//!
//! Out-of-band requests delivered to waiters through a bounded channel.
//! Senders never block: [`Control::send`] uses `try_send` and a full buffer
//! drops the new signal.

use tokio::sync::mpsc;

/// Buffer size: one pre-seeded fast tick plus one caller-issued signal.
pub(crate) const CONTROL_CAPACITY: usize = 2;

/// Request carried by the control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    /// Resolve the next wait as proceed.
    Fast,
    /// Resolve the next wait as stopped and end the sequence.
    Release,
}

/// Sending half of the control channel.
#[derive(Debug)]
pub(crate) struct Control {
    tx: mpsc::Sender<Signal>,
}

impl Control {
    /// Creates the channel, returning the sender wrapper and the receiver.
    pub(crate) fn channel() -> (Self, mpsc::Receiver<Signal>) {
        let (tx, rx) = mpsc::channel(CONTROL_CAPACITY);
        (Self { tx }, rx)
    }

    /// Enqueues `signal` without waiting.
    ///
    /// Returns `false` if the signal was dropped.
    pub(crate) fn send(&self, signal: Signal) -> bool {
        self.tx.try_send(signal).is_ok()
    }
}
