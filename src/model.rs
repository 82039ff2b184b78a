//! Core data models for the cycle timer.
//! Timestamps, clock-field breakdowns, what the page asks to run, and the
//! reducer state the display component renders.

use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::error::TimerError;

pub const SECOND_MS: i64 = 1000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Milliseconds since the Unix epoch, read off the host clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn millis(self) -> i64 {
        self.0
    }

    /// Signed milliseconds from `earlier` to `self`.
    pub fn since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Drop the sub-second part.
    pub fn whole_seconds(self) -> Self {
        Self(self.0 - self.0.rem_euclid(SECOND_MS))
    }

    pub fn from_f64(ms: f64) -> Result<Self, TimerError> {
        if !ms.is_finite() {
            return Err(TimerError::InvalidTimestamp(ms.to_string()));
        }
        Ok(Self(ms.trunc() as i64))
    }
}

impl FromStr for Timestamp {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Ok(ms) = raw.parse::<i64>() {
            return Ok(Self(ms));
        }
        match raw.parse::<f64>() {
            Ok(ms) if ms.is_finite() => Self::from_f64(ms),
            _ => Err(TimerError::InvalidTimestamp(s.to_string())),
        }
    }
}

/// Clock fields of a duration. Values are floored, so a negative duration
/// yields negative fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hms {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// How the program run behind the timer was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunType {
    /// Runs for a fixed number of seconds; shown as a countdown.
    Auto,
    /// Runs until stopped by hand; shown as elapsed time.
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerRequest {
    Countdown { target: Timestamp },
    Elapsed { start: Timestamp },
}

impl TimerRequest {
    /// Timer for a program run started at `now`. Both kinds are anchored to
    /// the whole second `now` falls in.
    pub fn for_run(run_type: RunType, now: Timestamp, seconds: Option<u64>) -> Result<Self, TimerError> {
        let anchor = now.whole_seconds();
        match run_type {
            RunType::Auto => {
                let seconds = seconds.ok_or_else(|| TimerError::MissingValue("auto".into()))?;
                let span = i64::try_from(seconds)
                    .ok()
                    .and_then(|s| s.checked_mul(SECOND_MS))
                    .ok_or_else(|| TimerError::InvalidTimestamp(seconds.to_string()))?;
                Ok(Self::Countdown {
                    target: Timestamp(anchor.0.saturating_add(span)),
                })
            }
            RunType::Manual => Ok(Self::Elapsed { start: anchor }),
        }
    }

    /// Build a request from the sink element's `data-mode` / `data-value` pair.
    pub fn parse(mode: &str, value: Option<&str>, now: Timestamp) -> Result<Self, TimerError> {
        let value = value.map(str::trim).filter(|v| !v.is_empty());
        let needs_value = |mode: &str| value.ok_or_else(|| TimerError::MissingValue(mode.to_string()));
        match mode.trim().to_ascii_lowercase().as_str() {
            "countdown" => Ok(Self::Countdown {
                target: needs_value("countdown")?.parse()?,
            }),
            "elapsed" | "stopwatch" => Ok(Self::Elapsed {
                start: needs_value("elapsed")?.parse()?,
            }),
            "auto" => {
                let raw = needs_value("auto")?;
                let seconds = raw
                    .parse::<u64>()
                    .map_err(|_| TimerError::InvalidTimestamp(raw.to_string()))?;
                Self::for_run(RunType::Auto, now, Some(seconds))
            }
            "manual" => Self::for_run(RunType::Manual, now, None),
            other => Err(TimerError::UnknownMode(other.to_string())),
        }
    }
}

/// Text currently shown in the display element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayState {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DisplayAction {
    Show(String),
    Clear,
}

impl Reducible for DisplayState {
    type Action = DisplayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let text = match action {
            DisplayAction::Show(text) => text,
            DisplayAction::Clear => String::new(),
        };
        if text == self.text {
            return self;
        }
        Rc::new(DisplayState { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_parses_integers_and_floats() {
        assert_eq!("1700000000000".parse::<Timestamp>(), Ok(Timestamp(1_700_000_000_000)));
        assert_eq!(" 42 ".parse::<Timestamp>(), Ok(Timestamp(42)));
        assert_eq!("1.5e3".parse::<Timestamp>(), Ok(Timestamp(1500)));
    }

    #[test]
    fn timestamp_rejects_garbage() {
        for raw in ["", "abc", "NaN", "inf", "12:00"] {
            assert!(
                matches!(raw.parse::<Timestamp>(), Err(TimerError::InvalidTimestamp(_))),
                "accepted {raw:?}"
            );
        }
        assert!(Timestamp::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn whole_seconds_truncates() {
        assert_eq!(Timestamp(1_000_999).whole_seconds(), Timestamp(1_000_000));
        assert_eq!(Timestamp(-1).whole_seconds(), Timestamp(-1000));
    }

    #[test]
    fn auto_run_counts_down_from_whole_second() {
        let req = TimerRequest::for_run(RunType::Auto, Timestamp(1_000_500), Some(90)).unwrap();
        assert_eq!(
            req,
            TimerRequest::Countdown {
                target: Timestamp(1_090_000)
            }
        );
    }

    #[test]
    fn manual_run_counts_up_from_whole_second() {
        let req = TimerRequest::for_run(RunType::Manual, Timestamp(1_000_500), None).unwrap();
        assert_eq!(
            req,
            TimerRequest::Elapsed {
                start: Timestamp(1_000_000)
            }
        );
    }

    #[test]
    fn parse_page_attributes() {
        let now = Timestamp(5_000);
        assert_eq!(
            TimerRequest::parse("countdown", Some("9000"), now),
            Ok(TimerRequest::Countdown {
                target: Timestamp(9000)
            })
        );
        assert_eq!(
            TimerRequest::parse("Stopwatch", Some("100"), now),
            Ok(TimerRequest::Elapsed {
                start: Timestamp(100)
            })
        );
        assert_eq!(
            TimerRequest::parse("auto", Some("3"), now),
            Ok(TimerRequest::Countdown {
                target: Timestamp(8000)
            })
        );
        assert_eq!(
            TimerRequest::parse("manual", None, now),
            Ok(TimerRequest::Elapsed {
                start: Timestamp(5000)
            })
        );
    }

    #[test]
    fn parse_reports_bad_attributes() {
        let now = Timestamp(0);
        assert_eq!(
            TimerRequest::parse("countdown", Some("  "), now),
            Err(TimerError::MissingValue("countdown".into()))
        );
        assert_eq!(
            TimerRequest::parse("lap", Some("1"), now),
            Err(TimerError::UnknownMode("lap".into()))
        );
        assert!(TimerRequest::parse("auto", Some("-3"), now).is_err());
        assert!(TimerRequest::parse("elapsed", Some("soon"), now).is_err());
    }

    #[test]
    fn display_reducer_tracks_writes() {
        let state = Rc::new(DisplayState::default());
        let state = state.reduce(DisplayAction::Show("00:00:01".into()));
        assert_eq!(state.text, "00:00:01");
        let same = Rc::clone(&state).reduce(DisplayAction::Show("00:00:01".into()));
        assert!(Rc::ptr_eq(&state, &same));
        let cleared = same.reduce(DisplayAction::Clear);
        assert_eq!(cleared.text, "");
    }
}
