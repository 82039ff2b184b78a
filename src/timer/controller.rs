use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::active::ActiveTimer;
use super::countdown::{Countdown, CountdownTick};
use super::display::{Display, WriterId};
use super::elapsed::Elapsed;
use super::{Clock, DisplaySink, Scheduler};
use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::model::{TimerRequest, Timestamp};
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    Countdown,
    Elapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    /// A countdown reached its target. Terminal until the next start.
    Stopped,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Stopped => "stopped",
        }
    }
}

/// Ticket for a started timer, handed back to `stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    writer: WriterId,
    mode: TimerMode,
}

impl TimerHandle {
    pub fn mode(&self) -> TimerMode {
        self.mode
    }
}

struct Active<H> {
    ticket: TimerHandle,
    handle: H,
    status: TimerStatus,
}

type Slot<H> = RefCell<Option<Active<H>>>;

/// Owns the display and at most one running timer chain.
pub struct TimerController<C, S, D>
where
    C: Clock,
    S: Scheduler,
    D: DisplaySink,
{
    clock: Rc<C>,
    scheduler: Rc<S>,
    display: Rc<RefCell<Display<D>>>,
    active: Rc<Slot<S::Handle>>,
    config: TimerConfig,
}

impl<C, S, D> TimerController<C, S, D>
where
    C: Clock,
    S: Scheduler,
    D: DisplaySink,
{
    pub fn new(clock: C, scheduler: S, sink: D, config: TimerConfig) -> Self {
        Self {
            clock: Rc::new(clock),
            scheduler: Rc::new(scheduler),
            display: Rc::new(RefCell::new(Display::new(sink))),
            active: Rc::new(RefCell::new(None)),
            config,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.active
            .borrow()
            .as_ref()
            .map_or(TimerStatus::Idle, |a| a.status)
    }

    /// Cancel the chain behind `ticket` if it is still the active one. The
    /// display keeps its last text.
    pub fn stop(&self, ticket: TimerHandle) -> bool {
        let is_current = self
            .active
            .borrow()
            .as_ref()
            .is_some_and(|a| a.ticket == ticket);
        if is_current {
            self.stop_active();
        }
        is_current
    }

    fn stop_active(&self) {
        let Some(active) = self.active.borrow_mut().take() else {
            return;
        };
        if active.status == TimerStatus::Running {
            self.scheduler.cancel(&active.handle);
        }
        self.display.borrow_mut().release(active.ticket.writer);
    }

    fn install(&self, ticket: TimerHandle, scheduled: Result<S::Handle, TimerError>) -> Result<TimerHandle, TimerError> {
        match scheduled {
            Ok(handle) => {
                *self.active.borrow_mut() = Some(Active {
                    ticket,
                    handle,
                    status: TimerStatus::Running,
                });
                Ok(ticket)
            }
            Err(err) => {
                self.display.borrow_mut().release(ticket.writer);
                Err(err)
            }
        }
    }
}

impl<C, S, D> TimerController<C, S, D>
where
    C: Clock + 'static,
    S: Scheduler + 'static,
    S::Handle: 'static,
    D: DisplaySink + 'static,
{
    pub fn start(&self, request: TimerRequest) -> Result<TimerHandle, TimerError> {
        match request {
            TimerRequest::Countdown { target } => self.start_countdown(target),
            TimerRequest::Elapsed { start } => self.start_elapsed(start),
        }
    }

    /// Tick every period until `target` has passed, then clear the display.
    /// Nothing is written until the first tick.
    pub fn start_countdown(&self, target: Timestamp) -> Result<TimerHandle, TimerError> {
        self.stop_active();
        let writer = self.display.borrow_mut().claim();
        let ticket = TimerHandle {
            writer,
            mode: TimerMode::Countdown,
        };
        let countdown = Countdown::new(target);
        let tick = {
            let clock = Rc::clone(&self.clock);
            let display = Rc::clone(&self.display);
            let scheduler = Rc::downgrade(&self.scheduler);
            let active = Rc::downgrade(&self.active);
            move || match countdown.tick(clock.now()) {
                CountdownTick::Running(text) => {
                    display.borrow_mut().show(writer, text);
                }
                CountdownTick::Finished(text) => {
                    {
                        let mut display = display.borrow_mut();
                        display.show(writer, text);
                        display.clear(writer);
                        display.release(writer);
                    }
                    finish(&scheduler, &active, ticket);
                }
            }
        };
        let scheduled = self.scheduler.every(self.config.tick_ms, Box::new(tick));
        let ticket = self.install(ticket, scheduled)?;
        clog(&format!("countdown started, target={}", target.millis()));
        Ok(ticket)
    }

    /// Render now, then every period. Restarting replaces the pending tick.
    pub fn start_elapsed(&self, start: Timestamp) -> Result<TimerHandle, TimerError> {
        self.stop_active();
        let writer = self.display.borrow_mut().claim();
        let ticket = TimerHandle {
            writer,
            mode: TimerMode::Elapsed,
        };
        let elapsed = Elapsed::new(start).with_days(self.config.show_days);
        let render = {
            let clock = Rc::clone(&self.clock);
            let display = Rc::clone(&self.display);
            move || {
                display.borrow_mut().show(writer, elapsed.tick(clock.now()));
            }
        };
        render();
        let scheduled = self.scheduler.every(self.config.tick_ms, Box::new(render));
        let ticket = self.install(ticket, scheduled)?;
        clog(&format!("elapsed timer started, start={}", start.millis()));
        Ok(ticket)
    }
}

/// A started timer paired with the ticket that stops it.
pub struct RunningTimer<C, S, D>
where
    C: Clock,
    S: Scheduler,
    D: DisplaySink,
{
    controller: TimerController<C, S, D>,
    ticket: TimerHandle,
}

impl<C, S, D> RunningTimer<C, S, D>
where
    C: Clock + 'static,
    S: Scheduler + 'static,
    S::Handle: 'static,
    D: DisplaySink + 'static,
{
    pub fn start(controller: TimerController<C, S, D>, request: TimerRequest) -> Result<Self, TimerError> {
        let ticket = controller.start(request)?;
        Ok(Self { controller, ticket })
    }
}

impl<C, S, D> ActiveTimer for RunningTimer<C, S, D>
where
    C: Clock,
    S: Scheduler,
    D: DisplaySink,
{
    fn stop(&self) -> bool {
        self.controller.stop(self.ticket)
    }

    fn status(&self) -> TimerStatus {
        self.controller.status()
    }

    fn mode(&self) -> TimerMode {
        self.ticket.mode()
    }
}

impl<C, S, D> Drop for TimerController<C, S, D>
where
    C: Clock,
    S: Scheduler,
    D: DisplaySink,
{
    fn drop(&mut self) {
        self.stop_active();
    }
}

// Runs inside the countdown's own tick, so the handle is only cancelled here
// and dropped by the controller later.
fn finish<S: Scheduler>(scheduler: &Weak<S>, active: &Weak<Slot<S::Handle>>, ticket: TimerHandle) {
    let (Some(scheduler), Some(active)) = (scheduler.upgrade(), active.upgrade()) else {
        return;
    };
    let mut active = active.borrow_mut();
    if let Some(current) = active.as_mut().filter(|a| a.ticket == ticket) {
        scheduler.cancel(&current.handle);
        current.status = TimerStatus::Stopped;
        clog("countdown finished");
    }
}
