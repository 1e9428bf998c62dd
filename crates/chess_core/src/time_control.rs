//! Time control and search limits for chess engines.
//!
//! The clock behind a [`TimeControl`] is injectable so that searches whose
//! outcome depends on wall-clock time can be made deterministic in tests.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Source of "now" for a time controller.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset_nanos: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_nanos: AtomicU64::new(0),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset_nanos
            .fetch_add(by.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_nanos(self.offset_nanos.load(Ordering::SeqCst))
    }
}

/// A clock that advances by a fixed step every time it is read.
///
/// The first read returns the origin. Useful for forcing a search to run
/// out of budget after a known number of root moves.
#[derive(Debug)]
pub struct SteppingClock {
    origin: Instant,
    step: Duration,
    reads: AtomicU64,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            step,
            reads: AtomicU64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let n = self.reads.fetch_add(1, Ordering::SeqCst);
        let step_nanos = u64::try_from(self.step.as_nanos()).unwrap_or(u64::MAX);
        self.origin + Duration::from_nanos(step_nanos.saturating_mul(n))
    }
}

/// Search limits that control when an engine should stop searching.
///
/// `depth` bounds the tree; `move_time` is the wall-clock budget. Engines in
/// this workspace only consult the budget between root moves, so a search
/// can overrun it by the cost of one root subtree.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Same limits, measured against another clock.
    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        Self {
            time_control: TimeControl::with_clock(self.move_time, clock),
            ..self
        }
    }

    /// Check if search should stop due to time limit or an external stop.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.check_time()
    }

    /// Start the time control clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(2)
    }
}

/// Thread-safe time controller that tracks whether search should stop.
///
/// Cheaply cloneable; clones share the stop flag, so another thread can
/// call [`stop`](Self::stop) on a search in flight.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// Start time of the search
    start_time: Arc<RwLock<Option<Instant>>>,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl TimeControl {
    /// Create a new time controller on the system clock.
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self::with_clock(time_limit, Arc::new(SystemClock))
    }

    pub fn with_clock(time_limit: Option<Duration>, clock: Arc<dyn Clock>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
            clock,
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Start the clock. Should be called when search begins.
    pub fn start(&self) {
        let now = self.clock.now();
        *self
            .start_time
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(now);
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search at the next check.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check time and update stopped flag if time expired.
    ///
    /// The budget is exceeded once elapsed time is strictly greater than the
    /// limit.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit {
            if self.elapsed() > limit {
                self.stop();
                return true;
            }
        }

        false
    }

    /// Get elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        let start = *self
            .start_time
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        start
            .map(|s| self.clock.now().saturating_duration_since(s))
            .unwrap_or(Duration::ZERO)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
