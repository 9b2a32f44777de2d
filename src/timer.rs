//! Elapsed-time display
//!
//! Pausing is a display concern: the session's timestamps are never touched,
//! so a finished game always reports `end - start`.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Pause bookkeeping for the on-screen clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTimer {
    paused_at: Option<DateTime<Utc>>,
    paused_total: TimeDelta,
}

impl GameTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze the clock at `now`; no-op while already paused
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Restart the clock, discounting the paused span; no-op while running
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += (now - paused_at).max(TimeDelta::zero());
        }
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Total time spent paused so far, not counting a pause in progress
    #[must_use]
    pub const fn paused_total(&self) -> TimeDelta {
        self.paused_total
    }

    /// Time to display for a game started at `start`
    ///
    /// # Examples
    /// ```
    /// use bandadle::timer::GameTimer;
    /// use chrono::{TimeDelta, Utc};
    /// use std::time::Duration;
    ///
    /// let start = Utc::now();
    /// let timer = GameTimer::new();
    ///
    /// assert_eq!(timer.elapsed(None, None, start), Duration::ZERO);
    /// let later = start + TimeDelta::seconds(75);
    /// assert_eq!(timer.elapsed(Some(start), None, later), Duration::from_secs(75));
    /// ```
    #[must_use]
    pub fn elapsed(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Duration {
        let Some(start) = start else {
            return Duration::ZERO;
        };

        let span = match (end, self.paused_at) {
            (Some(end), _) => end - start,
            (None, Some(paused_at)) => paused_at - start - self.paused_total,
            (None, None) => now - start - self.paused_total,
        };
        span.to_std().unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_790_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn not_started_is_zero() {
        let timer = GameTimer::new();
        assert_eq!(timer.elapsed(None, None, at(500)), Duration::ZERO);
        assert_eq!(timer.elapsed(None, Some(at(10)), at(500)), Duration::ZERO);
    }

    #[test]
    fn running_clock_counts_from_start() {
        let timer = GameTimer::new();
        assert_eq!(
            timer.elapsed(Some(at(0)), None, at(42)),
            Duration::from_secs(42)
        );
    }

    #[test]
    fn finished_clock_is_frozen() {
        let timer = GameTimer::new();
        let elapsed = timer.elapsed(Some(at(0)), Some(at(95)), at(10_000));
        assert_eq!(elapsed, Duration::from_secs(95));
    }

    #[test]
    fn paused_clock_is_frozen_then_discounted() {
        let mut timer = GameTimer::new();
        timer.pause(at(30));
        assert!(timer.is_paused());
        assert_eq!(
            timer.elapsed(Some(at(0)), None, at(100)),
            Duration::from_secs(30)
        );

        timer.resume(at(100));
        assert!(!timer.is_paused());
        assert_eq!(timer.paused_total(), TimeDelta::seconds(70));
        assert_eq!(
            timer.elapsed(Some(at(0)), None, at(110)),
            Duration::from_secs(40)
        );
    }

    #[test]
    fn repeated_pause_and_resume_are_ignored() {
        let mut timer = GameTimer::new();
        timer.resume(at(5));
        assert_eq!(timer.paused_total(), TimeDelta::zero());

        timer.pause(at(10));
        timer.pause(at(20));
        timer.resume(at(30));
        timer.resume(at(40));
        assert_eq!(timer.paused_total(), TimeDelta::seconds(20));
    }

    #[test]
    fn pauses_do_not_change_final_time() {
        let mut timer = GameTimer::new();
        timer.pause(at(10));
        timer.resume(at(60));
        assert_eq!(
            timer.elapsed(Some(at(0)), Some(at(90)), at(90)),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn clock_never_goes_negative() {
        let mut timer = GameTimer::new();
        timer.pause(at(0));
        timer.resume(at(500));
        assert_eq!(timer.elapsed(Some(at(0)), None, at(100)), Duration::ZERO);
        assert_eq!(timer.elapsed(Some(at(50)), Some(at(10)), at(100)), Duration::ZERO);
    }
}
