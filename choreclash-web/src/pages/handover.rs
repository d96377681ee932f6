use yew::prelude::*;

use crate::components::countdown_ring::CountdownRing;
use crate::countdown::CountdownView;

#[derive(Properties, Clone, PartialEq)]
pub struct HandoverPageProps {
    pub active_user: AttrValue,
    pub countdown: CountdownView,
}

#[function_component(HandoverPage)]
pub fn handover_page(props: &HandoverPageProps) -> Html {
    html! {
        <section class="page page-handover">
            <h1>{ "Pass the device" }</h1>
            <p class="handover-name">{ props.active_user.clone() }</p>
            <CountdownRing view={props.countdown} />
            <p class="muted">{ "Bidding opens when the timer runs out" }</p>
        </section>
    }
}
