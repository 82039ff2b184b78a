// The timer currently on the page, reachable from the JS entry points

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::controller::{TimerMode, TimerStatus};
use crate::util::clog;

/// A started timer that can be stopped through the ticket it holds.
pub trait ActiveTimer {
    fn stop(&self) -> bool;
    fn status(&self) -> TimerStatus;
    fn mode(&self) -> TimerMode;
}

thread_local! {
    static CURRENT: RefCell<Option<Weak<dyn ActiveTimer>>> = RefCell::new(None);
}

/// Make `timer` the one `stop_current` acts on. Only a weak reference is
/// kept; the owner decides how long the timer lives.
pub fn register<T: ActiveTimer + 'static>(timer: &Rc<T>) {
    let weak: Weak<dyn ActiveTimer> = Rc::downgrade(timer) as Weak<T>;
    CURRENT.with(|slot| *slot.borrow_mut() = Some(weak));
}

fn current() -> Option<Rc<dyn ActiveTimer>> {
    CURRENT.with(|slot| slot.borrow().as_ref().and_then(Weak::upgrade))
}

pub fn stop_current() -> bool {
    let Some(timer) = current() else {
        return false;
    };
    let stopped = timer.stop();
    if stopped {
        clog(&format!("{:?} timer stopped", timer.mode()));
    }
    stopped
}

pub fn current_status() -> TimerStatus {
    current().map_or(TimerStatus::Idle, |timer| timer.status())
}
