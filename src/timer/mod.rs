//! Tick-driven countdown and elapsed-time clocks.
//!
//! The host pieces (wall clock, repeating timer, output element) sit behind
//! the traits below so the controller runs the same in the browser and in
//! native tests.

pub mod active;
mod browser;
pub mod controller;
pub mod countdown;
pub mod display;
pub mod elapsed;
#[cfg(test)]
pub(crate) mod testing;

pub use browser::{BrowserClock, WindowScheduler};
pub use controller::{RunningTimer, TimerController};

use crate::error::TimerError;
use crate::model::Timestamp;

/// Wall-clock source.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Host facility that fires a callback every `period_ms` until cancelled.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Result<Self::Handle, TimerError>;

    /// Stop further firings. The handle may still be dropped later; callers
    /// cancel from inside a running tick, so dropping is left to the owner.
    fn cancel(&self, handle: &Self::Handle);
}

/// Where formatted time text ends up.
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);
}
