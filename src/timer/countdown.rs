use crate::model::{DAY_MS, HOUR_MS, Hms, MINUTE_MS, SECOND_MS, Timestamp};
use crate::util::pad_below_ten;

/// Counts down to a fixed end time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Running(String),
    /// The end time has passed. The text is still written once before the
    /// display is cleared.
    Finished(String),
}

impl Countdown {
    pub fn new(target: Timestamp) -> Self {
        Self { target }
    }

    pub fn remaining(&self, now: Timestamp) -> i64 {
        self.target.since(now)
    }

    pub fn tick(&self, now: Timestamp) -> CountdownTick {
        let distance = self.remaining(now);
        let text = format_remaining(distance);
        if distance < 0 {
            CountdownTick::Finished(text)
        } else {
            CountdownTick::Running(text)
        }
    }
}

/// Hours come from the day remainder, so whole days drop out.
pub fn breakdown(distance: i64) -> Hms {
    Hms {
        hours: (distance % DAY_MS).div_euclid(HOUR_MS),
        minutes: (distance % HOUR_MS).div_euclid(MINUTE_MS),
        seconds: (distance % MINUTE_MS).div_euclid(SECOND_MS),
    }
}

pub fn format_remaining(distance: i64) -> String {
    let hms = breakdown(distance);
    format!(
        "{}:{}:{}",
        pad_below_ten(hms.hours),
        pad_below_ten(hms.minutes),
        pad_below_ten(hms.seconds)
    )
}
