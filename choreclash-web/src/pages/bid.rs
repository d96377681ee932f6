use yew::prelude::*;

use super::{inline_error, on_click, on_enter};
use crate::components::countdown_ring::CountdownRing;
use crate::countdown::CountdownView;

#[derive(Properties, Clone, PartialEq)]
pub struct BidPageProps {
    pub task: AttrValue,
    pub active_user: AttrValue,
    pub countdown: CountdownView,
    pub bid_entry: AttrValue,
    pub bid_error: Option<AttrValue>,
    pub on_bid_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
}

#[function_component(BidPage)]
pub fn bid_page(props: &BidPageProps) -> Html {
    let bidder = if props.active_user.is_empty() {
        AttrValue::from("Player")
    } else {
        props.active_user.clone()
    };

    html! {
        <section class="page page-bid">
            <h1 class="bid-task">{ props.task.clone() }</h1>
            <p class="bid-subtitle">{ format!("{bidder}, place your bid") }</p>
            <CountdownRing view={props.countdown} />
            <div class="entry-row">
                <input
                    id="bid-entry"
                    type="number"
                    min="0"
                    placeholder="Points"
                    value={props.bid_entry.clone()}
                    oninput={props.on_bid_input.clone()}
                    onkeydown={on_enter(&props.on_submit)}
                />
                <button class="btn btn-primary" onclick={on_click(&props.on_submit)}>
                    { "Place bid" }
                </button>
            </div>
            { inline_error(props.bid_error.as_ref()) }
            <p class="muted">{ "Lowest bid wins the chore" }</p>
        </section>
    }
}
