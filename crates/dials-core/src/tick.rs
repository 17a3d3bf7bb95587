//! Periodic tick sources
//!
//! A widget owns exactly one [`TickSource`] and starts or stops it in lockstep
//! with the mode that needs it (live clock, marquee animation). Ticks are
//! delivered by polling: the host calls the widget's `update(now)` from its
//! frame loop, the widget asks its tick source how many ticks fell due since
//! the last poll and runs its tick handler that many times.
//!
//! The core never reads a clock on its own; `now` always comes from the host.
//! This keeps the animation state machines testable with [`ManualTicker`].

use embassy_time::{Duration, Instant};

/// Tick interval of the clock widget, coarse enough for second granularity.
pub const CLOCK_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Tick interval of the marquee animation.
pub const MARQUEE_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// A stoppable, restartable source of periodic ticks with a fixed interval.
pub trait TickSource {
    /// Begin delivering ticks. Has no effect when already running.
    fn start(&mut self);

    /// Stop delivering ticks and drop any tick not yet polled.
    fn stop(&mut self);

    /// Restart the period from the next poll, running or not.
    fn restart(&mut self);

    fn is_running(&self) -> bool;

    fn interval(&self) -> Duration;

    /// Number of ticks that fell due since the previous poll.
    fn poll(&mut self, now: Instant) -> u32;
}

// ---------------------------------------------------------------------------
// IntervalTicker
// ---------------------------------------------------------------------------

/// Tick source driven by the host's monotonic clock.
///
/// The first poll after [`start`](TickSource::start) anchors the period; a
/// tick is due every `interval` after that. When the host stalls, the missed
/// ticks are reported together on the next poll.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    running: bool,
    next_due: Option<Instant>,
}

impl IntervalTicker {
    /// Create a stopped ticker. A zero interval is raised to one tick.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval.as_ticks() == 0 {
            Duration::from_ticks(1)
        } else {
            interval
        };

        Self {
            interval,
            running: false,
            next_due: None,
        }
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.next_due = None;
        }
    }

    fn stop(&mut self) {
        self.running = false;
        self.next_due = None;
    }

    fn restart(&mut self) {
        self.running = true;
        self.next_due = None;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn poll(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }

        let Some(due) = self.next_due else {
            self.next_due = Some(now + self.interval);
            return 0;
        };

        let Some(late) = now.checked_duration_since(due) else {
            return 0;
        };

        let interval_ticks = self.interval.as_ticks();
        let count = 1 + late.as_ticks() / interval_ticks;
        self.next_due = Some(due + Duration::from_ticks(count * interval_ticks));

        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

// ---------------------------------------------------------------------------
// ManualTicker
// ---------------------------------------------------------------------------

/// Tick source fired explicitly by the caller.
///
/// Used in tests, and by hosts that already own a timer callback and only
/// need to forward it: call [`fire`](ManualTicker::fire) from the callback
/// and `update` the widget afterwards.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    interval: Duration,
    running: bool,
    pending: u32,
}

impl ManualTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            pending: 0,
        }
    }

    /// Queue one tick. Ignored while stopped, like a stopped timer.
    pub fn fire(&mut self) {
        if self.running {
            self.pending = self.pending.saturating_add(1);
        }
    }

    /// Queue `count` ticks.
    pub fn fire_many(&mut self, count: u32) {
        for _ in 0..count {
            self.fire();
        }
    }
}

impl TickSource for ManualTicker {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
        self.pending = 0;
    }

    fn restart(&mut self) {
        self.running = true;
        self.pending = 0;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn poll(&mut self, _now: Instant) -> u32 {
        core::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_interval_ticker_stopped_never_ticks() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(100));
        assert_eq!(ticker.poll(at(0)), 0);
        assert_eq!(ticker.poll(at(10_000)), 0);
    }

    #[test]
    fn test_interval_ticker_period() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(100));
        ticker.start();

        // First poll anchors the period
        assert_eq!(ticker.poll(at(1_000)), 0);
        assert_eq!(ticker.poll(at(1_050)), 0);
        assert_eq!(ticker.poll(at(1_100)), 1);
        assert_eq!(ticker.poll(at(1_150)), 0);
        assert_eq!(ticker.poll(at(1_210)), 1);
    }

    #[test]
    fn test_interval_ticker_catches_up_after_stall() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(100));
        ticker.start();
        ticker.poll(at(0));

        assert_eq!(ticker.poll(at(450)), 4);
        // Schedule stays on the 100 ms grid
        assert_eq!(ticker.poll(at(499)), 0);
        assert_eq!(ticker.poll(at(500)), 1);
    }

    #[test]
    fn test_interval_ticker_stop_and_restart() {
        let mut ticker = IntervalTicker::new(Duration::from_millis(100));
        ticker.start();
        ticker.poll(at(0));
        ticker.stop();
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(at(1_000)), 0);

        ticker.restart();
        assert!(ticker.is_running());
        assert_eq!(ticker.poll(at(1_000)), 0);
        assert_eq!(ticker.poll(at(1_100)), 1);
    }

    #[test]
    fn test_manual_ticker_ignores_fire_while_stopped() {
        let mut ticker = ManualTicker::new(MARQUEE_TICK_INTERVAL);
        ticker.fire();
        assert_eq!(ticker.poll(at(0)), 0);

        ticker.start();
        ticker.fire_many(3);
        assert_eq!(ticker.poll(at(0)), 3);
        assert_eq!(ticker.poll(at(0)), 0);

        ticker.fire();
        ticker.stop();
        assert_eq!(ticker.poll(at(0)), 0);
    }
}
