// Browser-backed clock, interval scheduler and yew display sink

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::functional::UseReducerDispatcher;

use super::{Clock, DisplaySink, Scheduler};
use crate::error::TimerError;
use crate::model::{DisplayAction, DisplayState, Timestamp};

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Timestamp {
        Timestamp(js_sys::Date::now() as i64)
    }
}

pub struct WindowScheduler {
    window: web_sys::Window,
}

impl WindowScheduler {
    pub fn new() -> Result<Self, TimerError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or_else(|| TimerError::Schedule("no global `window` exists".into()))
    }
}

/// Interval id plus the closure it calls; the closure must outlive the interval.
pub struct IntervalHandle {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Scheduler for WindowScheduler {
    type Handle = IntervalHandle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Result<IntervalHandle, TimerError> {
        let tick = Closure::wrap(tick);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| TimerError::Schedule(format!("{e:?}")))?;
        Ok(IntervalHandle { id, _tick: tick })
    }

    fn cancel(&self, handle: &IntervalHandle) {
        self.window.clear_interval_with_handle(handle.id);
    }
}

impl DisplaySink for UseReducerDispatcher<DisplayState> {
    fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            self.dispatch(DisplayAction::Clear);
        } else {
            self.dispatch(DisplayAction::Show(text.to_string()));
        }
    }
}
