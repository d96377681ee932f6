mod handlers;

pub use handlers::{AppHandlers, RESULTS_SECTION_SELECTOR};

use yew::prelude::*;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::pages::bid::BidPage;
use crate::pages::handover::HandoverPage;
use crate::pages::home::HomePage;
use crate::pages::results::ResultsPage;

/// Render the page for the current presentation phase.
pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let round = (*state.round).clone();
    let active_user = round
        .as_ref()
        .and_then(|r| r.active_user.clone())
        .unwrap_or_default();
    let task = round
        .as_ref()
        .and_then(|r| r.task.clone())
        .unwrap_or_default();

    let page = match *state.phase {
        Phase::Home => html! {
            <HomePage
                roster={(*state.roster).clone()}
                name_entry={(*state.name_entry).clone()}
                task_entry={(*state.task_entry).clone()}
                name_error={(*state.name_error).clone()}
                task_error={(*state.task_error).clone()}
                start_error={(*state.start_error).clone()}
                on_name_input={handlers.name_input.clone()}
                on_task_input={handlers.task_input.clone()}
                on_add_user={handlers.add_user.clone()}
                on_add_task={handlers.add_task.clone()}
                on_start={handlers.start_round.clone()}
            />
        },
        Phase::Handover => html! {
            <HandoverPage
                active_user={AttrValue::from(active_user)}
                countdown={*state.countdown}
            />
        },
        Phase::Bid => html! {
            <BidPage
                task={AttrValue::from(task)}
                active_user={AttrValue::from(active_user)}
                countdown={*state.countdown}
                bid_entry={(*state.bid_entry).clone()}
                bid_error={(*state.bid_error).clone()}
                on_bid_input={handlers.bid_input.clone()}
                on_submit={handlers.submit_bid.clone()}
            />
        },
        Phase::Results => html! {
            <ResultsPage
                summary={(*state.summary).clone().unwrap_or_default()}
                can_continue={state.roster.can_start()}
                export_error={(*state.export_error).clone()}
                on_next_round={handlers.start_round.clone()}
                on_home={handlers.go_home.clone()}
                on_export={handlers.export_results.clone()}
            />
        },
    };

    html! {
        <main id="main" role="main" class="app-shell">
            { page }
        </main>
    }
}
