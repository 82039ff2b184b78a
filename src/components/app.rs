use std::rc::Rc;

use super::time_display::TimeDisplay;
use crate::config::TimerConfig;
use crate::error::TimerError;
use crate::model::{DisplayState, TimerRequest};
use crate::timer::{BrowserClock, RunningTimer, TimerController, WindowScheduler, active};
use crate::util::cerror;
use yew::functional::UseReducerDispatcher;
use yew::prelude::*;

type BrowserTimer = RunningTimer<BrowserClock, WindowScheduler, UseReducerDispatcher<DisplayState>>;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    /// What to run; `None` mounts an empty display.
    pub request: Option<TimerRequest>,
    pub config: TimerConfig,
}

fn launch(
    request: TimerRequest,
    sink: UseReducerDispatcher<DisplayState>,
    config: TimerConfig,
) -> Result<BrowserTimer, TimerError> {
    let controller = TimerController::new(BrowserClock, WindowScheduler::new()?, sink, config);
    RunningTimer::start(controller, request)
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let display = use_reducer(DisplayState::default);

    // One timer per request, registered so `stopTimer` reaches its ticket.
    // Teardown drops it, which cancels the interval.
    {
        let sink = display.dispatcher();
        let config = props.config.clone();
        use_effect_with(props.request, move |request| {
            let timer = (*request).and_then(|request| match launch(request, sink, config) {
                Ok(timer) => {
                    let timer = Rc::new(timer);
                    active::register(&timer);
                    Some(timer)
                }
                Err(err) => {
                    cerror(&format!("timer not started: {err}"));
                    None
                }
            });
            move || drop(timer)
        });
    }

    html! { <TimeDisplay text={display.text.clone()} /> }
}
