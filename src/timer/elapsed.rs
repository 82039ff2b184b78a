use crate::model::{DAY_MS, HOUR_MS, Hms, MINUTE_MS, SECOND_MS, Timestamp};
use crate::util::{pad_above_nine, pad_nonzero};

/// Counts up from a fixed start time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed {
    start: Timestamp,
    show_days: bool,
}

impl Elapsed {
    pub fn new(start: Timestamp) -> Self {
        Self {
            start,
            show_days: false,
        }
    }

    pub fn with_days(mut self, show_days: bool) -> Self {
        self.show_days = show_days;
        self
    }

    pub fn elapsed(&self, now: Timestamp) -> i64 {
        now.since(self.start)
    }

    pub fn tick(&self, now: Timestamp) -> String {
        format_elapsed(self.elapsed(now), self.show_days)
    }
}

/// Whole days plus the clock fields of what is left over.
pub fn breakdown(elapsed: i64) -> (i64, Hms) {
    let days = elapsed.div_euclid(DAY_MS);
    let in_day = elapsed % DAY_MS;
    let in_hour = in_day % HOUR_MS;
    let in_minute = in_hour % MINUTE_MS;
    let hms = Hms {
        hours: in_day.div_euclid(HOUR_MS),
        minutes: in_hour.div_euclid(MINUTE_MS),
        seconds: in_minute.div_euclid(SECOND_MS),
    };
    (days, hms)
}

pub fn format_elapsed(elapsed: i64, show_days: bool) -> String {
    let (days, hms) = breakdown(elapsed);
    let clock = format!(
        "{}:{}:{}",
        pad_nonzero(hms.hours),
        pad_nonzero(hms.minutes),
        pad_above_nine(hms.seconds)
    );
    if show_days && days != 0 {
        format!("{days}d {clock}")
    } else {
        clock
    }
}
