// Manual clock, scheduler and sink for driving timers in native tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Clock, DisplaySink, Scheduler};
use crate::error::TimerError;
use crate::model::Timestamp;

#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<i64>>);

impl ManualClock {
    pub fn at(ms: i64) -> Self {
        Self(Rc::new(Cell::new(ms)))
    }

    pub fn set(&self, ms: i64) {
        self.0.set(ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.0.get())
    }
}

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct Task {
    id: u64,
    period: i64,
    due: i64,
    tick: Tick,
}

/// Fires due ticks in time order as the shared clock is advanced.
#[derive(Clone)]
pub struct ManualScheduler {
    clock: ManualClock,
    tasks: Rc<RefCell<Vec<Task>>>,
    next_id: Rc<Cell<u64>>,
    fail: Rc<Cell<bool>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ManualHandle(u64);

impl ManualScheduler {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            tasks: Rc::default(),
            next_id: Rc::default(),
            fail: Rc::default(),
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Make the next `every` calls fail.
    pub fn refuse(&self) {
        self.fail.set(true);
    }

    pub fn advance(&self, ms: i64) {
        let end = self.clock.now().millis() + ms;
        loop {
            let (due, tick) = {
                let mut tasks = self.tasks.borrow_mut();
                let Some(task) = tasks
                    .iter_mut()
                    .filter(|t| t.due <= end)
                    .min_by_key(|t| (t.due, t.id))
                else {
                    break;
                };
                let due = task.due;
                task.due += task.period;
                (due, Rc::clone(&task.tick))
            };
            self.clock.set(due);
            let mut tick = tick.borrow_mut();
            (&mut **tick)();
        }
        self.clock.set(end);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Result<ManualHandle, TimerError> {
        if self.fail.get() {
            return Err(TimerError::Schedule("refused".into()));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let period = i64::from(period_ms.max(1));
        self.tasks.borrow_mut().push(Task {
            id,
            period,
            due: self.clock.now().millis() + period,
            tick: Rc::new(RefCell::new(tick)),
        });
        Ok(ManualHandle(id))
    }

    fn cancel(&self, handle: &ManualHandle) {
        self.tasks.borrow_mut().retain(|t| t.id != handle.0);
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl DisplaySink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
    }
}
