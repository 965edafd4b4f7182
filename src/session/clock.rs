//! Time sources for the session loop.
//!
//! The loop never reads the wall clock directly. It asks a [`Clock`] for
//! "now" and awaits its ticks, so tests can run hours of simulated time
//! instantly with [`ManualClock`].

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

/// Period between display ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A source of the current instant and of periodic ticks.
#[allow(async_fn_in_trait)]
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Waits until the next tick.
    async fn tick(&mut self);
}

// ============================================================================
// SystemClock
// ============================================================================

/// Real-time clock ticking once per [`TICK_PERIOD`].
///
/// Missed ticks are skipped rather than bursted, so a slow terminal write
/// delays the next update instead of queueing several.
#[derive(Debug)]
pub struct SystemClock {
    ticker: Interval,
}

impl SystemClock {
    /// Creates a clock whose first tick fires one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Creates a clock with a custom tick period.
    pub fn with_period(period: Duration) -> Self {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { ticker }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn tick(&mut self) {
        self.ticker.tick().await;
    }
}

// ============================================================================
// ManualClock
// ============================================================================

/// Simulated clock: every tick advances "now" by a fixed step and
/// completes immediately.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Duration,
    step: Duration,
    ticks: u64,
}

impl ManualClock {
    /// Creates a clock advancing by [`TICK_PERIOD`] per tick.
    pub fn new() -> Self {
        Self::with_step(TICK_PERIOD)
    }

    /// Creates a clock advancing by `step` per tick.
    pub fn with_step(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            step,
            ticks: 0,
        }
    }

    /// Moves "now" forward without producing a tick.
    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
    }

    /// Simulated time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    async fn tick(&mut self) {
        self.elapsed += self.step;
        self.ticks += 1;
        tokio::task::yield_now().await;
    }
}
