use std::time::{Duration, Instant};

use crate::error::{LoggerError, Result};

/// Single-slot stopwatch for measuring how long a piece of code takes.
///
/// The timer is either unarmed (initial state) or armed with the monotonic
/// instant captured by the last [`start`](PerformanceTimer::start). Reading
/// does not disarm it, so several reads after one start all measure from the
/// same origin. There is only one slot: starting again replaces the origin,
/// and nested measurements need separate timers.
///
/// # Examples
///
/// ```
/// # use pico_logger::PerformanceTimer;
/// let mut timer = PerformanceTimer::new();
/// assert!(timer.elapsed().is_err());
///
/// timer.start();
/// let first = timer.elapsed().unwrap();
/// let second = timer.elapsed().unwrap();
/// assert!(second >= first);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceTimer {
    state: TimerState,
}

/// State of a [`PerformanceTimer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Unarmed,
    Armed(Instant),
}

impl PerformanceTimer {
    /// Creates an unarmed timer.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            state: TimerState::Unarmed,
        }
    }

    /// Arms the timer with the current instant, replacing any earlier origin.
    pub fn start(&mut self) {
        self.state = TimerState::Armed(Instant::now());
    }

    /// Time elapsed since the last [`start`](Self::start).
    ///
    /// Returns [`LoggerError::TimerNotStarted`] while unarmed. The state is
    /// left as it was either way.
    pub fn elapsed(&self) -> Result<Duration> {
        match self.state {
            TimerState::Armed(origin) => Ok(origin.elapsed()),
            TimerState::Unarmed => Err(LoggerError::TimerNotStarted),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TimerState::Armed(_))
    }

    /// Returns the timer to the unarmed state.
    pub fn reset(&mut self) {
        self.state = TimerState::Unarmed;
    }
}

/// Report line written to the console for a measured duration.
///
/// Seconds are printed with nanosecond precision.
///
/// ```
/// # use pico_logger::perf_timer::metrics_line;
/// # use std::time::Duration;
/// assert_eq!(
///     metrics_line("parse", Duration::from_millis(1500)),
///     "METRICS Function parse took 1.500000000 seconds to execute."
/// );
/// ```
pub fn metrics_line(label: &str, elapsed: Duration) -> String {
    format!(
        "METRICS Function {} took {:.9} seconds to execute.",
        label,
        elapsed.as_secs_f64()
    )
}
