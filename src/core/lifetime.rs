//! # Lifetime: a cancellable scope with an optional deadline.
//!
//! [`Lifetime`] pairs a [`CancellationToken`] with an optional absolute deadline.
//! It is the scope a [`Ticker`](crate::Ticker) lives in and the scope handed out
//! for a single unit of work by [`Ticker::tick_scope`](crate::Ticker::tick_scope).
//!
//! ## Rules
//! - Cancellation propagates **top-down**: cancelling a lifetime cancels every child.
//! - Children inherit the parent deadline; a child deadline is never later than its parent's.
//! - Ending is **monotonic**: once [`Lifetime::is_ended`] returns `true` it never returns `false`.
//!
//! ## Deadlines
//! A scope with a deadline cancels its token when the deadline passes, so work
//! waiting on [`Lifetime::token`] stops exactly as it would on an explicit cancel.
//! The cancellation is scheduled by a small watcher task on the current tokio
//! runtime ([`Lifetime::watch_deadline`]); scopes derived outside a runtime are
//! armed later, and until then an expired deadline is still noticed by
//! [`Lifetime::is_ended`] and [`Lifetime::ended`].
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tickvisor::Lifetime;
//!
//! let root = Lifetime::new();
//! let child = root.child_with_timeout(Duration::from_secs(5));
//! assert!(child.deadline().is_some());
//!
//! root.cancel();
//! assert!(child.is_ended());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::{runtime::Handle, select, time, time::Instant};
use tokio_util::sync::{CancellationToken, DropGuard};

/// Cancellable execution scope with an optional deadline.
///
/// Cheap to clone: clones share the same token and deadline.
#[derive(Clone, Debug, Default)]
pub struct Lifetime {
    token: CancellationToken,
    deadline: Option<Instant>,
    armed: Arc<AtomicBool>,
}

impl Lifetime {
    /// Creates a root lifetime without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a child scope that inherits this deadline.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
            armed: Arc::default(),
        }
    }

    /// Derives a child scope that ends at most `timeout` from now.
    ///
    /// The effective deadline is the earlier of the parent deadline and `now + timeout`.
    /// A timeout too large to represent leaves the parent deadline in place.
    /// Inside a tokio runtime the deadline is armed immediately.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let own = Instant::now().checked_add(timeout);
        let deadline = match (self.deadline, own) {
            (Some(parent), Some(own)) => Some(parent.min(own)),
            (parent, own) => parent.or(own),
        };
        let scope = Self {
            token: self.token.child_token(),
            deadline,
            armed: Arc::default(),
        };
        scope.watch_deadline();
        scope
    }

    /// Schedules cancellation of the token at the deadline.
    ///
    /// Spawns at most one watcher per scope (clones share it); the watcher exits
    /// early if the scope is cancelled first. Returns `false` when there is nothing
    /// to arm or no tokio runtime is available to arm it on.
    pub fn watch_deadline(&self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.token.is_cancelled() {
            return false;
        }
        let Ok(handle) = Handle::try_current() else {
            return false;
        };
        if self.armed.swap(true, Ordering::AcqRel) {
            return true;
        }
        let token = self.token.clone();
        handle.spawn(async move {
            select! {
                _ = token.cancelled() => {}
                _ = time::sleep_until(deadline) => token.cancel(),
            }
        });
        true
    }

    /// Cancels this scope and all of its children.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` if the scope was cancelled (explicitly or through a parent).
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns `true` if the scope is cancelled or its deadline has passed.
    ///
    /// Observing an expired deadline cancels the scope.
    pub fn is_ended(&self) -> bool {
        if self.token.is_cancelled() {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.token.cancel();
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the deadline (rather than a cancellation) ended this scope.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Resolves once the scope is cancelled or its deadline passes.
    ///
    /// Cancel-safe.
    pub async fn ended(&self) {
        match self.deadline {
            Some(deadline) => {
                select! {
                    _ = self.token.cancelled() => {}
                    _ = time::sleep_until(deadline) => { self.token.cancel(); }
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// Absolute deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline (`None` = no deadline, zero once passed).
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Underlying cancellation token, for cancellation-aware work outside this crate.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns a guard that cancels this scope when dropped.
    pub fn drop_guard(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }
}

impl From<CancellationToken> for Lifetime {
    fn from(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
            armed: Arc::default(),
        }
    }
}
