use choreclash_core::parse_bid;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::phase::Phase;
use crate::app::session;
use crate::app::state::AppState;
use crate::export;
use crate::gateway;

/// Selector of the subtree captured by the results exporter.
pub const RESULTS_SECTION_SELECTOR: &str = "#results-section";

/// Every callback the pages need, built once per render from the session
/// state.
#[derive(Clone)]
pub struct AppHandlers {
    pub name_input: Callback<InputEvent>,
    pub task_input: Callback<InputEvent>,
    pub bid_input: Callback<InputEvent>,
    pub add_user: Callback<()>,
    pub add_task: Callback<()>,
    pub start_round: Callback<()>,
    pub submit_bid: Callback<()>,
    pub go_home: Callback<()>,
    pub export_results: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            name_input: build_entry_input(&state.name_entry),
            task_input: build_entry_input(&state.task_entry),
            bid_input: build_entry_input(&state.bid_entry),
            add_user: build_add_user(state),
            add_task: build_add_task(state),
            start_round: build_start_round(state),
            submit_bid: build_submit_bid(state),
            go_home: build_go_home(state),
            export_results: build_export_results(state),
        }
    }
}

fn build_entry_input(entry: &UseStateHandle<AttrValue>) -> Callback<InputEvent> {
    let entry = entry.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            entry.set(AttrValue::from(input.value()));
        }
    })
}

fn build_add_user(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    let entry = state.name_entry.clone();
    let error = state.name_error.clone();
    Callback::from(move |()| {
        let mut draft = (*roster).clone();
        match draft.add_participant(entry.as_str()) {
            Ok(()) => {
                roster.set(draft);
                entry.set(AttrValue::default());
                error.set(None);
            }
            Err(err) => error.set(Some(AttrValue::from(err.to_string()))),
        }
    })
}

fn build_add_task(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    let entry = state.task_entry.clone();
    let error = state.task_error.clone();
    Callback::from(move |()| {
        let mut draft = (*roster).clone();
        match draft.add_task(entry.as_str()) {
            Ok(()) => {
                roster.set(draft);
                entry.set(AttrValue::default());
                error.set(None);
            }
            Err(err) => error.set(Some(AttrValue::from(err.to_string()))),
        }
    })
}

fn build_start_round(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        if !state.roster.can_start() {
            return;
        }
        let mut draft = (*state.roster).clone();
        let Some(task) = draft.next_task() else {
            return;
        };
        let order = draft.order();
        state.roster.set(draft);
        state.start_error.set(None);

        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match gateway::start_round(&task, &order).await {
                Ok(reply) if reply.ok => match reply.state {
                    Some(observed) => session::observe_direct(&state, observed),
                    // Round started but the reply carried no snapshot; let
                    // polling catch up.
                    None => state.poller.start(session::poll_sink(&state)),
                },
                Ok(reply) => {
                    restore_task(&state, task);
                    let message = reply
                        .error
                        .unwrap_or_else(|| "Failed to start round".to_string());
                    state.start_error.set(Some(AttrValue::from(message)));
                }
                Err(err) => {
                    log::error!("round start failed: {err}");
                    restore_task(&state, task);
                    state.start_error.set(Some(AttrValue::from("Server not reachable")));
                }
            }
        });
    })
}

fn restore_task(state: &AppState, task: String) {
    let mut draft = (*state.roster).clone();
    draft.restore_front(task);
    state.roster.set(draft);
}

fn build_submit_bid(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let amount = match parse_bid(state.bid_entry.as_str()) {
            Ok(amount) => amount,
            Err(err) => {
                state.bid_error.set(Some(AttrValue::from(err.to_string())));
                return;
            }
        };

        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match gateway::submit_bid(amount).await {
                Ok(reply) if reply.ok => {
                    state.bid_entry.set(AttrValue::default());
                    state.bid_error.set(None);
                    match reply.state {
                        Some(observed) => session::observe_direct(&state, observed),
                        None => state.poller.start(session::poll_sink(&state)),
                    }
                }
                Ok(reply) => {
                    let message = reply.error.unwrap_or_else(|| "Bid failed".to_string());
                    state.bid_error.set(Some(AttrValue::from(message)));
                }
                Err(err) => {
                    log::error!("bid submission failed: {err}");
                    state.bid_error.set(Some(AttrValue::from("Connection error")));
                }
            }
        });
    })
}

fn build_go_home(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        state.presenter.stop();
        state.poller.stop();
        state.phase.set(Phase::Home);
    })
}

fn build_export_results(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let refresh = {
            let state = state.clone();
            move || {
                if let Some(round) = (*state.round).clone() {
                    state.summary.set(Some(choreclash_core::results_summary(&round)));
                }
            }
        };
        match export::export_section(RESULTS_SECTION_SELECTOR, refresh, &export::PrintBackend) {
            Ok(()) => state.export_error.set(None),
            Err(err) => {
                log::error!("results export failed: {err}");
                state.export_error.set(Some(AttrValue::from(err.to_string())));
            }
        }
    })
}
