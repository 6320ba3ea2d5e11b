use std::time::{Duration, Instant};

/// Event loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Pomodoro tick period in milliseconds
pub const TIMER_PERIOD_MS: u64 = 1000;

/// Get the event loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A cancellable repeating schedule.
///
/// Holds at most one pending deadline: arming replaces whatever was
/// scheduled before, so repeated start/pause never stacks tick sources.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TIMER_PERIOD_MS))
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Schedule the first tick one period after `now`, dropping any previous schedule
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time left until the next tick, if armed
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Number of whole periods elapsed by `now`; advances the schedule past them
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            count += 1;
            self.next_due = Some(due + self.period);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.due_ticks(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_due_ticks_counts_periods() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        assert_eq!(ticker.due_ticks(start + Duration::from_millis(999)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(3500)), 2);
        assert_eq!(
            ticker.time_until_next(start + Duration::from_millis(3500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_rearm_replaces_schedule() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.arm(start + Duration::from_millis(600));

        // Only the latest schedule exists
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.due_ticks(start + Duration::from_millis(1600)), 1);
    }

    #[test]
    fn test_cancel() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.cancel();
        assert_eq!(ticker.due_ticks(start + Duration::from_secs(5)), 0);
        assert_eq!(ticker.time_until_next(start), None);
    }
}
