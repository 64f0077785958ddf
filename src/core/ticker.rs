//! # Ticker: cancellable periodic tick source.
//!
//! A [`Ticker`] resolves [`Ticker::wait`] once per tick until its lifetime ends.
//! Three sources race inside every wait:
//!
//! ```text
//!            ┌─────────────────────────────┐
//!  wait() ──►│ lifetime ended? ──► Stopped │  (checked first, always wins)
//!            └──────────────┬──────────────┘
//!                           ▼
//!        select! (no fixed priority between branches)
//!          ├─ lifetime ends ─────────────► Stopped
//!          ├─ control signal
//!          │    ├─ Fast    ──────────────► Proceed
//!          │    └─ Release ──► stop() ───► Stopped
//!          └─ timer fires ───────────────► Proceed
//! ```
//!
//! ## Rules
//! - The timer schedule is anchored at construction; the first natural tick fires one
//!   `period` later. A consumed fast signal never resets that schedule.
//! - Missed timer firings collapse into one ready tick (the schedule stays aligned).
//! - The control buffer holds at most two signals; further trigger/release calls are dropped.
//! - An ended ticker never returns [`Tick::Proceed`].
//! - Construction needs no runtime. With a timeout, the only task spawned is the
//!   lifetime's deadline watcher (on first wait if built outside a runtime).
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tickvisor::{Lifetime, Tick, Ticker};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), tickvisor::TickerError> {
//!     let root = Lifetime::new();
//!     let ticker = Ticker::new(&root, Duration::ZERO, Duration::from_millis(10), true)?;
//!
//!     assert_eq!(ticker.wait().await, Tick::Proceed);
//!     ticker.release();
//!     assert_eq!(ticker.wait().await, Tick::Stopped);
//!     Ok(())
//! }
//! ```

use std::future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tokio::select;
use tokio_util::sync::DropGuard;

use super::{
    builder::TickerBuilder,
    config::TickerConfig,
    lifetime::Lifetime,
    signal::{Control, Signal},
};
use crate::{
    error::TickerError,
    events::{Bus, Event, EventKind, StopReason, TickSource},
};

/// Outcome of a single [`Ticker::wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A tick occurred; do the next unit of work.
    Proceed,
    /// The sequence ended; stop waiting.
    Stopped,
}

impl Tick {
    /// Returns `true` for [`Tick::Proceed`].
    #[inline]
    pub fn is_proceed(self) -> bool {
        matches!(self, Tick::Proceed)
    }
}

/// Periodic timer, created on first poll but anchored at construction time.
#[derive(Debug)]
enum Timer {
    Pending { start: Instant, period: Duration },
    Running(Interval),
    Halted,
}

impl Timer {
    /// Resolves at the next scheduled firing. Never resolves once halted.
    ///
    /// Cancel-safe.
    async fn tick(&mut self) {
        if let Timer::Pending { start, period } = *self {
            let mut interval = time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            *self = Timer::Running(interval);
        }
        match self {
            Timer::Running(interval) => {
                interval.tick().await;
            }
            Timer::Pending { .. } | Timer::Halted => future::pending::<()>().await,
        }
    }
}

/// State only waiters touch.
#[derive(Debug)]
struct Sources {
    control: mpsc::Receiver<Signal>,
    timer: Timer,
}

/// What won the race between control channel and timer.
enum Fired {
    Signal(Option<Signal>),
    Timer,
}

/// Cancellable periodic ticker with trigger and release controls.
///
/// ### Responsibilities
/// - **Ticking**: resolves waits at `period` granularity
/// - **Deadline**: ends the sequence once `timeout` elapses (if non-zero)
/// - **Control**: [`trigger`](Ticker::trigger) forces a tick, [`release`](Ticker::release)
///   ends the sequence, [`stop`](Ticker::stop) ends it synchronously
///
/// ### Sharing
/// The ticker is `Send + Sync`; wrap it in an `Arc` to wait in one task while
/// controlling it from others. Dropping the ticker stops it.
#[derive(Debug)]
pub struct Ticker {
    name: Arc<str>,
    lifetime: Lifetime,
    timeout: Duration,
    period: Duration,
    control: Control,
    sources: Mutex<Sources>,
    delivered: AtomicU64,
    finished: AtomicBool,
    bus: Option<Bus>,
}

impl Ticker {
    /// Creates a ticker living in a child scope of `parent`.
    ///
    /// - `timeout = 0` → no deadline; otherwise the ticker ends `timeout` from now.
    /// - `period` must be positive.
    /// - `fast_first_tick` → the first wait resolves immediately.
    ///
    /// Does not require a running tokio runtime.
    pub fn new(
        parent: &Lifetime,
        timeout: Duration,
        period: Duration,
        fast_first_tick: bool,
    ) -> Result<Self, TickerError> {
        Self::from_config(parent, &TickerConfig::new(timeout, period, fast_first_tick))
    }

    /// Creates a ticker from a [`TickerConfig`] without an event bus.
    pub fn from_config(parent: &Lifetime, cfg: &TickerConfig) -> Result<Self, TickerError> {
        TickerBuilder::new(cfg.clone()).build(parent)
    }

    /// Returns a builder for tickers that publish events.
    pub fn builder(cfg: TickerConfig) -> TickerBuilder {
        TickerBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: TickerConfig,
        parent: &Lifetime,
        bus: Option<Bus>,
    ) -> Result<Self, TickerError> {
        cfg.validate()?;

        let lifetime = match cfg.deadline() {
            Some(timeout) => parent.child_with_timeout(timeout),
            None => parent.child(),
        };
        let (control, rx) = Control::channel();
        if cfg.fast_first_tick {
            control.send(Signal::Fast);
        }
        let timer = match Instant::now().checked_add(cfg.period) {
            Some(start) => Timer::Pending {
                start,
                period: cfg.period,
            },
            None => Timer::Halted,
        };

        let ticker = Self {
            name: Arc::from(cfg.name.as_ref()),
            lifetime,
            timeout: cfg.timeout,
            period: cfg.period,
            control,
            sources: Mutex::new(Sources { control: rx, timer }),
            delivered: AtomicU64::new(0),
            finished: AtomicBool::new(false),
            bus,
        };

        let mut started = Event::new(EventKind::TickerStarted).with_period(ticker.period);
        if let Some(timeout) = cfg.deadline() {
            started = started.with_timeout(timeout);
        }
        ticker.publish(started);
        Ok(ticker)
    }

    /// Waits for the next tick.
    ///
    /// Returns [`Tick::Stopped`] immediately if the lifetime already ended,
    /// otherwise whichever comes first of lifetime end, a control signal, or the timer.
    ///
    /// Cancel-safe: dropping the future never loses a tick or signal.
    pub async fn wait(&self) -> Tick {
        match self.next_tick().await {
            Some(_) => Tick::Proceed,
            None => Tick::Stopped,
        }
    }

    /// Like [`wait`](Ticker::wait), but reports the end of the sequence as
    /// [`TickerError::Stopped`] so loops can use `?`.
    pub async fn tick(&self) -> Result<(), TickerError> {
        match self.wait().await {
            Tick::Proceed => Ok(()),
            Tick::Stopped => Err(TickerError::Stopped),
        }
    }

    /// Streams the running tick count until the ticker stops.
    pub fn ticks(&self) -> impl Stream<Item = u64> + '_ {
        stream::unfold(self, |ticker| async move {
            ticker.next_tick().await.map(|n| (n, ticker))
        })
    }

    /// Derives a scope bounded by one period, for the work done between ticks.
    ///
    /// The scope also ends when the ticker ends. Dropping the returned guard
    /// cancels the scope.
    pub fn tick_scope(&self) -> (Lifetime, DropGuard) {
        let scope = self.lifetime.child_with_timeout(self.period);
        let guard = scope.drop_guard();
        (scope, guard)
    }

    /// Ends the sequence now: cancels the lifetime and halts the timer.
    ///
    /// Idempotent; never blocks.
    pub fn stop(&self) {
        let reason = if self.lifetime.is_expired() {
            StopReason::Expired
        } else {
            StopReason::Stopped
        };
        self.finish(reason);
        self.lifetime.cancel();
        if let Ok(mut sources) = self.sources.try_lock() {
            sources.timer = Timer::Halted;
        }
    }

    /// Requests that the next wait resolve as stopped and end the sequence.
    ///
    /// Non-blocking. Returns `false` if the control buffer was full and the
    /// request was dropped.
    pub fn release(&self) -> bool {
        self.send(Signal::Release, EventKind::ReleaseRequested)
    }

    /// Requests that the next wait resolve immediately as proceed.
    ///
    /// Non-blocking. Returns `false` if the control buffer was full and the
    /// request was dropped.
    pub fn trigger(&self) -> bool {
        self.send(Signal::Fast, EventKind::TriggerRequested)
    }

    /// Ticker name used in events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured timeout (`0s` = no deadline).
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Configured period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// The ticker's own scope, for attaching further cancellation-aware work.
    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    /// Returns `true` once the ticker reached its terminal state.
    pub fn is_stopped(&self) -> bool {
        self.lifetime.is_ended()
    }

    /// Number of waits resolved as proceed so far.
    pub fn ticks_delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Event bus this ticker publishes to, if any.
    pub fn bus(&self) -> Option<&Bus> {
        self.bus.as_ref()
    }

    /// Waits for the next tick, returning its 1-based count.
    async fn next_tick(&self) -> Option<u64> {
        // Tickers built outside a runtime arm their deadline on first wait.
        self.lifetime.watch_deadline();
        if self.lifetime.is_ended() {
            self.finish(self.end_reason());
            return None;
        }
        select! {
            _ = self.lifetime.ended() => {
                self.finish(self.end_reason());
                None
            }
            n = self.next_from_sources() => n,
        }
    }

    async fn next_from_sources(&self) -> Option<u64> {
        let mut sources = self.sources.lock().await;
        let Sources { control, timer } = &mut *sources;

        let fired = select! {
            signal = control.recv() => Fired::Signal(signal),
            _ = timer.tick() => Fired::Timer,
        };

        match fired {
            Fired::Timer => Some(self.deliver(TickSource::Timer)),
            Fired::Signal(Some(Signal::Fast)) => Some(self.deliver(TickSource::Signal)),
            Fired::Signal(Some(Signal::Release) | None) => {
                sources.timer = Timer::Halted;
                self.finish(StopReason::Released);
                self.lifetime.cancel();
                None
            }
        }
    }

    fn deliver(&self, source: TickSource) -> u64 {
        let n = self.delivered.fetch_add(1, Ordering::Relaxed) + 1;
        self.publish(
            Event::new(EventKind::TickDelivered)
                .with_source(source)
                .with_tick(n),
        );
        n
    }

    fn send(&self, signal: Signal, accepted: EventKind) -> bool {
        let sent = self.control.send(signal);
        if sent {
            self.publish(Event::new(accepted));
        } else {
            self.publish(Event::new(EventKind::SignalDropped).with_source(TickSource::Signal));
        }
        sent
    }

    /// Reason for a lifetime that ended without `stop()` or a release.
    fn end_reason(&self) -> StopReason {
        if self.lifetime.is_expired() {
            StopReason::Expired
        } else {
            StopReason::Canceled
        }
    }

    /// Publishes `TickerStopped` the first time the ticker ends.
    fn finish(&self, reason: StopReason) {
        if self.finished.swap(true, Ordering::AcqRel) {
            return;
        }
        self.publish(
            Event::new(EventKind::TickerStopped)
                .with_reason(reason)
                .with_tick(self.ticks_delivered()),
        );
    }

    fn publish(&self, ev: Event) {
        if let Some(bus) = &self.bus {
            bus.publish(ev.with_ticker(Arc::clone(&self.name)));
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use tokio::sync::broadcast::error::TryRecvError;

    const PERIOD: Duration = Duration::from_millis(300);
    const TIMEOUT: Duration = Duration::from_millis(500);

    /// Drives `wait()` until stopped; returns proceed offsets and the stop offset.
    async fn drain(ticker: &Ticker) -> (Vec<Duration>, Duration) {
        let start = Instant::now();
        let mut ticks = Vec::new();
        while ticker.wait().await.is_proceed() {
            ticks.push(start.elapsed());
        }
        (ticks, start.elapsed())
    }

    fn drain_events(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
        let mut out = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(ev) => out.push(ev),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return out,
                Err(TryRecvError::Lagged(_)) => continue,
            }
        }
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let err = Ticker::new(&Lifetime::new(), Duration::ZERO, Duration::ZERO, false).unwrap_err();
        assert_eq!(
            err,
            TickerError::InvalidPeriod {
                period: Duration::ZERO
            }
        );
    }

    #[test]
    fn test_construction_outside_runtime() {
        let ticker = Ticker::new(&Lifetime::new(), TIMEOUT, PERIOD, true).unwrap();
        assert_eq!(ticker.period(), PERIOD);
        assert_eq!(ticker.timeout(), TIMEOUT);
        assert!(ticker.lifetime().deadline().is_some());
        assert!(!ticker.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_ends_sequence_after_one_tick() {
        let ticker = Ticker::new(&Lifetime::new(), TIMEOUT, PERIOD, false).unwrap();
        let (ticks, stopped_at) = drain(&ticker).await;

        assert_eq!(ticks.len(), 1);
        assert!(ticks[0] >= PERIOD && ticks[0] < TIMEOUT);
        assert!(stopped_at >= TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_adds_immediate_tick() {
        let ticker = Ticker::new(&Lifetime::new(), TIMEOUT, PERIOD, false).unwrap();
        assert!(ticker.trigger());
        let (ticks, stopped_at) = drain(&ticker).await;

        assert_eq!(ticks.len(), 2);
        assert!(ticks[0] < PERIOD);
        assert!(ticks[1] - ticks[0] >= PERIOD);
        assert!(stopped_at >= TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_first_tick() {
        let ticker = Ticker::new(&Lifetime::new(), TIMEOUT, PERIOD, true).unwrap();
        let (ticks, _) = drain(&ticker).await;

        assert_eq!(ticks.len(), 2);
        assert!(ticks[0] < PERIOD);
        assert!(ticks[1] - ticks[0] >= PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_without_deadline_stops_immediately() {
        let ticker = Ticker::new(&Lifetime::new(), Duration::ZERO, Duration::from_secs(3600), false)
            .unwrap();
        assert!(ticker.release());

        let (ticks, stopped_at) = drain(&ticker).await;
        assert!(ticks.is_empty());
        assert!(stopped_at < Duration::from_millis(1));
        assert_eq!(ticker.wait().await, Tick::Stopped);
        assert!(ticker.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_after_fast_first_tick() {
        let ticker = Ticker::new(&Lifetime::new(), TIMEOUT, PERIOD, true).unwrap();
        ticker.release();

        let (ticks, stopped_at) = drain(&ticker).await;
        assert_eq!(ticks.len(), 1);
        assert!(stopped_at < PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_with_deadline_and_no_fast_tick() {
        let ticker = Ticker::new(&Lifetime::new(), TIMEOUT, PERIOD, false).unwrap();
        ticker.release();

        let (ticks, stopped_at) = drain(&ticker).await;
        assert!(ticks.is_empty());
        assert!(stopped_at < PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_parent_stops_before_fast_tick() {
        let parent = Lifetime::new();
        parent.cancel();
        let ticker = Ticker::new(&parent, TIMEOUT, PERIOD, true).unwrap();

        assert_eq!(ticker.wait().await, Tick::Stopped);
        assert_eq!(ticker.ticks_delivered(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_cancel_after_first_tick() {
        let parent = Lifetime::new();
        let ticker = Ticker::new(&parent, TIMEOUT, PERIOD, true).unwrap();

        assert_eq!(ticker.wait().await, Tick::Proceed);
        parent.cancel();
        assert_eq!(ticker.wait().await, Tick::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_deadline_keeps_ticking() {
        let ticker = Ticker::new(&Lifetime::new(), Duration::ZERO, Duration::from_millis(10), false)
            .unwrap();
        for _ in 0..50 {
            assert_eq!(ticker.wait().await, Tick::Proceed);
        }
        assert_eq!(ticker.ticks_delivered(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_during_pending_wait_keeps_schedule() {
        let ticker = Arc::new(Ticker::new(&Lifetime::new(), Duration::ZERO, PERIOD, false).unwrap());
        let start = Instant::now();

        let waiter = {
            let ticker = Arc::clone(&ticker);
            tokio::spawn(async move { (ticker.wait().await, start.elapsed()) })
        };
        time::sleep(Duration::from_millis(100)).await;
        ticker.trigger();

        let (tick, at) = waiter.await.unwrap();
        assert_eq!(tick, Tick::Proceed);
        assert!(at < PERIOD);

        assert_eq!(ticker.wait().await, Tick::Proceed);
        let natural = start.elapsed();
        assert!(natural >= PERIOD && natural < PERIOD + Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_wakes_pending_waiter() {
        let ticker = Arc::new(Ticker::new(&Lifetime::new(), Duration::ZERO, PERIOD, false).unwrap());
        let waiter = {
            let ticker = Arc::clone(&ticker);
            tokio::spawn(async move { ticker.wait().await })
        };
        time::sleep(Duration::from_millis(10)).await;
        ticker.stop();
        ticker.stop();

        assert_eq!(waiter.await.unwrap(), Tick::Stopped);
        assert_eq!(ticker.wait().await, Tick::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signals_beyond_capacity_are_dropped() {
        let ticker = Ticker::new(&Lifetime::new(), Duration::ZERO, PERIOD, true).unwrap();
        assert!(ticker.trigger());
        assert!(!ticker.trigger());
        assert!(!ticker.release());

        assert_eq!(ticker.wait().await, Tick::Proceed);
        assert_eq!(ticker.wait().await, Tick::Proceed);
        assert!(ticker.release());
        assert_eq!(ticker.wait().await, Tick::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_reports_stop_as_error() {
        let ticker = Ticker::new(&Lifetime::new(), Duration::ZERO, PERIOD, true).unwrap();
        assert!(ticker.tick().await.is_ok());
        ticker.stop();
        assert_eq!(ticker.tick().await, Err(TickerError::Stopped));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_stream_counts_until_deadline() {
        let ticker = Ticker::new(
            &Lifetime::new(),
            Duration::from_millis(35),
            Duration::from_millis(10),
            false,
        )
        .unwrap();
        let counts: Vec<u64> = ticker.ticks().collect().await;
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_scope_is_bounded_by_period_and_ticker() {
        let ticker = Ticker::new(&Lifetime::new(), Duration::ZERO, PERIOD, false).unwrap();
        let (scope, guard) = ticker.tick_scope();
        assert_eq!(scope.remaining(), Some(PERIOD));
        drop(guard);
        assert!(scope.is_ended());
        assert!(!ticker.is_stopped());

        let (scope, _guard) = ticker.tick_scope();
        ticker.stop();
        assert!(scope.is_ended());

        let short = Ticker::new(&Lifetime::new(), Duration::from_millis(50), PERIOD, false).unwrap();
        let (scope, _guard) = short.tick_scope();
        assert_eq!(scope.deadline(), short.lifetime().deadline());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifetime_token_cancelled_at_timeout() {
        let ticker = Ticker::new(
            &Lifetime::new(),
            Duration::from_millis(50),
            Duration::from_secs(10),
            false,
        )
        .unwrap();
        let start = Instant::now();

        let fired = time::timeout(Duration::from_secs(5), ticker.lifetime().token().cancelled()).await;

        assert!(fired.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert!(ticker.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_scope_ends_after_one_period() {
        let period = Duration::from_millis(20);
        let ticker = Ticker::new(&Lifetime::new(), Duration::ZERO, period, false).unwrap();
        let (scope, _guard) = ticker.tick_scope();
        assert!(!scope.token().is_cancelled());

        time::advance(period).await;

        let ended = time::timeout(Duration::from_millis(1), scope.ended()).await;
        assert!(ended.is_ok());
        let fired = time::timeout(Duration::from_secs(5), scope.token().cancelled()).await;
        assert!(fired.is_ok());
        assert!(scope.token().is_cancelled());
        assert!(!ticker.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_after_deadline_reports_expiry() {
        let bus = Bus::new(16);
        let mut rx = bus.subscribe();
        let ticker = Ticker::builder(TickerConfig::new(Duration::from_millis(50), PERIOD, false))
            .with_bus(bus)
            .build(&Lifetime::new())
            .unwrap();

        time::sleep(Duration::from_millis(60)).await;
        drop(ticker);

        let reasons: Vec<StopReason> = drain_events(&mut rx)
            .into_iter()
            .filter(|e| e.kind == EventKind::TickerStopped)
            .filter_map(|e| e.reason)
            .collect();
        assert_eq!(reasons, vec![StopReason::Expired]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_trace_lifecycle() {
        let bus = Bus::new(16);
        let mut rx = bus.subscribe();
        let cfg = TickerConfig {
            name: "probe".into(),
            ..TickerConfig::new(Duration::ZERO, PERIOD, false)
        };
        let ticker = Ticker::builder(cfg).with_bus(bus).build(&Lifetime::new()).unwrap();

        ticker.trigger();
        assert_eq!(ticker.wait().await, Tick::Proceed);
        ticker.stop();
        ticker.stop();
        drop(ticker);

        let events = drain_events(&mut rx);
        let got: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            got,
            vec![
                EventKind::TickerStarted,
                EventKind::TriggerRequested,
                EventKind::TickDelivered,
                EventKind::TickerStopped,
            ]
        );
        assert!(events.iter().all(|e| e.ticker.as_deref() == Some("probe")));
        assert_eq!(events[0].period_ms, Some(300));
        assert_eq!(events[0].timeout_ms, None);
        assert_eq!(events[2].source, Some(TickSource::Signal));
        assert_eq!(events[2].tick, Some(1));
        assert_eq!(events[3].reason, Some(StopReason::Stopped));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_reason_distinguishes_expiry_and_release() {
        let bus = Bus::new(16);
        let mut rx = bus.subscribe();

        let expiring = Ticker::builder(TickerConfig::new(Duration::from_millis(50), PERIOD, false))
            .with_bus(bus.clone())
            .build(&Lifetime::new())
            .unwrap();
        assert_eq!(expiring.wait().await, Tick::Stopped);

        let released = Ticker::builder(TickerConfig::new(Duration::ZERO, PERIOD, false))
            .with_bus(bus.clone())
            .build(&Lifetime::new())
            .unwrap();
        released.release();
        assert_eq!(released.wait().await, Tick::Stopped);

        let reasons: Vec<StopReason> = drain_events(&mut rx)
            .into_iter()
            .filter(|e| e.kind == EventKind::TickerStopped)
            .filter_map(|e| e.reason)
            .collect();
        assert_eq!(reasons, vec![StopReason::Expired, StopReason::Released]);
    }
}
