// JS entry points and mounting of the timer app into its sink element

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use yew::AppHandle;

use crate::components::app::{App, AppProps};
use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::model::{TimerRequest, Timestamp};
use crate::timer::{BrowserClock, Clock, active};
use crate::util::{cerror, clog};

thread_local! {
    static MOUNTED: RefCell<Option<AppHandle<App>>> = RefCell::new(None);
}

fn sink_element(config: &TimerConfig) -> Result<web_sys::Element, TimerError> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(&config.sink_id))
        .ok_or_else(|| TimerError::MissingSink(config.sink_id.clone()))
}

/// Render the app into the sink element, replacing any earlier mount so only
/// one timer ever writes to it.
pub fn mount(request: Option<TimerRequest>, config: TimerConfig) -> Result<(), TimerError> {
    let root = sink_element(&config)?;
    unmount();
    let handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { request, config }).render();
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}

fn unmount() {
    let previous = MOUNTED.with(|slot| slot.borrow_mut().take());
    if let Some(handle) = previous {
        handle.destroy();
    }
}

/// Start from the sink element's `data-mode` / `data-value` attributes, if any.
pub fn boot() {
    let config = TimerConfig::load();
    let element = match sink_element(&config) {
        Ok(element) => element,
        Err(err) => {
            clog(&format!("{err}; waiting for countDown/stopWatch"));
            return;
        }
    };
    let Some(mode) = element.get_attribute("data-mode") else {
        return;
    };
    let value = element.get_attribute("data-value");
    let started = TimerRequest::parse(&mode, value.as_deref(), BrowserClock.now())
        .and_then(|request| mount(Some(request), config));
    report(started);
}

fn report(result: Result<(), TimerError>) {
    if let Err(err) = result {
        cerror(&format!("timer not started: {err}"));
    }
}

/// Count down to `target_ms` (ms since epoch), clearing the display once it passes.
#[wasm_bindgen(js_name = countDown)]
pub fn count_down(target_ms: f64) {
    let started = Timestamp::from_f64(target_ms).and_then(|target| {
        mount(
            Some(TimerRequest::Countdown { target }),
            TimerConfig::load(),
        )
    });
    report(started);
}

/// Show time elapsed since `started_at_ms`. The second argument is accepted
/// for older pages and ignored.
#[wasm_bindgen(js_name = stopWatch)]
pub fn stop_watch(started_at_ms: f64, _id: JsValue) {
    let started = Timestamp::from_f64(started_at_ms)
        .and_then(|start| mount(Some(TimerRequest::Elapsed { start }), TimerConfig::load()));
    report(started);
}

/// Stop the running timer through its ticket; the display keeps its last text.
#[wasm_bindgen(js_name = stopTimer)]
pub fn stop_timer() -> bool {
    active::stop_current()
}

/// `"idle"`, `"running"` or `"stopped"`.
#[wasm_bindgen(js_name = timerStatus)]
pub fn timer_status() -> String {
    active::current_status().as_str().to_string()
}
