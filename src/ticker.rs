use std::time::{Duration, Instant};

/// A repeating tick source the controller can arm and disarm.
///
/// Implementations deliver ticks by having their owner call
/// [`crate::controller::GameController::on_tick`] whenever a period elapses.
pub trait Ticker {
    /// Arms the ticker with a fixed period, replacing any previous schedule.
    fn start(&mut self, period: Duration);

    /// Disarms the ticker. No ticks are due until the next [`Ticker::start`].
    fn cancel(&mut self);

    /// Returns true while a schedule is armed.
    fn is_active(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Schedule {
    period: Duration,
    next_due: Instant,
}

/// Wall-clock fixed-rate ticker polled by the terminal loop.
#[derive(Debug, Default)]
pub struct IntervalTicker {
    schedule: Option<Schedule>,
}

impl IntervalTicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the ticker relative to `now`; the first tick is one period later.
    pub fn start_at(&mut self, period: Duration, now: Instant) {
        self.schedule = Some(Schedule {
            period,
            next_due: now + period,
        });
    }

    /// Returns true when a tick is due at `now`, advancing the schedule.
    ///
    /// Reports at most one tick per call. When the caller has fallen more than
    /// a full period behind, the schedule restarts from `now` instead of
    /// replaying the missed ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };

        if now < schedule.next_due {
            return false;
        }

        schedule.next_due += schedule.period;
        if schedule.next_due <= now {
            schedule.next_due = now + schedule.period;
        }
        true
    }

    /// Time left until the next tick, or `None` when disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.schedule
            .map(|schedule| schedule.next_due.saturating_duration_since(now))
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, period: Duration) {
        self.start_at(period, Instant::now());
    }

    fn cancel(&mut self) {
        self.schedule = None;
    }

    fn is_active(&self) -> bool {
        self.schedule.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{IntervalTicker, Ticker};

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn disarmed_ticker_never_fires() {
        let mut ticker = IntervalTicker::new();
        let now = Instant::now();

        assert!(!ticker.is_active());
        assert!(!ticker.poll(now + PERIOD * 5));
        assert_eq!(ticker.time_until_due(now), None);
    }

    #[test]
    fn fires_once_per_period() {
        let mut ticker = IntervalTicker::new();
        let start = Instant::now();
        ticker.start_at(PERIOD, start);

        assert!(!ticker.poll(start + Duration::from_millis(99)));
        assert!(ticker.poll(start + PERIOD));
        assert!(!ticker.poll(start + Duration::from_millis(150)));
        assert!(ticker.poll(start + PERIOD * 2));
        assert_eq!(
            ticker.time_until_due(start + Duration::from_millis(250)),
            Some(Duration::from_millis(50))
        );
    }

    #[test]
    fn late_poll_does_not_burst() {
        let mut ticker = IntervalTicker::new();
        let start = Instant::now();
        ticker.start_at(PERIOD, start);

        let late = start + PERIOD * 10;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.time_until_due(late), Some(PERIOD));
    }

    #[test]
    fn restart_replaces_previous_schedule() {
        let mut ticker = IntervalTicker::new();
        let start = Instant::now();
        ticker.start_at(PERIOD, start);
        ticker.start_at(PERIOD, start + Duration::from_millis(50));

        assert!(!ticker.poll(start + PERIOD));
        assert!(ticker.poll(start + Duration::from_millis(150)));

        ticker.cancel();
        assert!(!ticker.is_active());
        assert!(!ticker.poll(start + PERIOD * 3));
    }
}
