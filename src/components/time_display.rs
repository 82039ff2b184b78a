use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub text: AttrValue,
}

/// Plain text clock; an empty string leaves the element blank.
#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ props.text.clone() }</span>
    }
}
