use choreclash_core::{is_urgent, ring_fraction};
use yew::prelude::*;

use crate::countdown::CountdownView;

#[derive(Properties, Clone, Copy, PartialEq)]
pub struct CountdownRingProps {
    pub view: CountdownView,
}

/// Radial countdown: ring fill scaled to the phase's reference duration,
/// remaining seconds in the middle, pulse and urgency as CSS states.
#[function_component(CountdownRing)]
pub fn countdown_ring(props: &CountdownRingProps) -> Html {
    let CountdownView {
        seconds_left,
        total,
        pulse,
        running,
    } = props.view;

    let percent = (ring_fraction(seconds_left, total) * 100.0).round();
    let mut class = Classes::from("countdown-ring radial-progress");
    if pulse {
        class.push("pulse");
    }
    if is_urgent(seconds_left) {
        class.push("urgent");
    }
    if !running {
        class.push("stopped");
    }
    let style = format!("--value:{percent}; --size:7rem; --thickness:10px;");

    html! {
        <div {class} {style} role="timer" aria-label={format!("{seconds_left} seconds left")}>
            <span class="countdown-seconds">{ seconds_left }</span>
        </div>
    }
}
