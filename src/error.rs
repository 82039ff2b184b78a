use thiserror::Error;

/// Everything that can go wrong between the page and a running timer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("no element with id `{0}` to display the timer in")]
    MissingSink(String),
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
    #[error("timer mode `{0}` needs a value")]
    MissingValue(String),
    #[error("unknown timer mode `{0}`")]
    UnknownMode(String),
    #[error("invalid timer config: {0}")]
    Config(String),
    #[error("could not schedule tick: {0}")]
    Schedule(String),
}
