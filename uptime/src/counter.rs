use core::fmt;

pub const SECONDS_PER_MINUTE: u8 = 60;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const HOURS_PER_DAY: u8 = 24;

/// Elapsed time since boot as a ripple counter with moduli (60, 60, 24, days).
///
/// `days` never wraps. It saturates at `u32::MAX`, which is out of reach for any
/// real run (about eleven million years at one advance per second).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UptimeCounter {
    seconds: u8,
    minutes: u8,
    hours: u8,
    days: u32,
}

/// A read-only copy of the counter fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub days: u32,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl UptimeCounter {
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            minutes: 0,
            hours: 0,
            days: 0,
        }
    }

    /// Advances by one second. A field only moves when the field below it
    /// has just wrapped to zero in this same call.
    pub fn advance(&mut self) {
        self.seconds = (self.seconds + 1) % SECONDS_PER_MINUTE;
        if self.seconds != 0 {
            return;
        }
        self.minutes = (self.minutes + 1) % MINUTES_PER_HOUR;
        if self.minutes != 0 {
            return;
        }
        self.hours = (self.hours + 1) % HOURS_PER_DAY;
        if self.hours != 0 {
            return;
        }
        self.days = self.days.saturating_add(1);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            days: self.days,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl Snapshot {
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.seconds)
            + 60 * u64::from(self.minutes)
            + 3_600 * u64::from(self.hours)
            + 86_400 * u64::from(self.days)
    }

    pub fn as_tuple(&self) -> (u32, u8, u8, u8) {
        (self.days, self.hours, self.minutes, self.seconds)
    }
}

// `%2d days %02u:%02u:%02u`, the layout of the display log line
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:2} days {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    fn render(snapshot: Snapshot) -> String<32> {
        let mut out = String::new();
        write!(out, "{}", snapshot).unwrap();
        out
    }

    #[test]
    fn starts_at_zero() {
        let counter = UptimeCounter::new();
        assert_eq!(counter.snapshot().as_tuple(), (0, 0, 0, 0));
        assert_eq!(counter, UptimeCounter::default());
    }

    #[test]
    fn snapshot_is_stable_without_advance() {
        let mut counter = UptimeCounter::new();
        for _ in 0..4_000 {
            counter.advance();
        }
        assert_eq!(counter.snapshot(), counter.snapshot());
    }

    #[test]
    fn days_saturate() {
        let mut counter = UptimeCounter {
            seconds: 59,
            minutes: 59,
            hours: 23,
            days: u32::MAX,
        };
        counter.advance();
        assert_eq!(counter.snapshot().as_tuple(), (u32::MAX, 0, 0, 0));
    }

    #[test]
    fn display_pads_fields() {
        let snapshot = Snapshot {
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
        };
        assert_eq!(render(snapshot).as_str(), " 3 days 04:05:06");
    }

    #[test]
    fn display_widens_past_two_digit_days() {
        let snapshot = Snapshot {
            days: 123,
            hours: 23,
            minutes: 59,
            seconds: 59,
        };
        assert_eq!(render(snapshot).as_str(), "123 days 23:59:59");
    }
}
