//! Bridges the transition engine and the shell: runs observed states through
//! `reconcile` and applies the resulting plan to pages, timers, and polling.

use std::rc::Rc;

use choreclash_core::{Origin, RoundState, TimerAction, TransitionPlan, reconcile, results_summary};
use yew::AttrValue;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::audio;
use crate::poller::StateSink;

/// Run one observed state through the engine and apply the resulting plan.
/// Returns whether an active poll loop should keep running.
pub fn observe(state: &AppState, observed: RoundState, origin: Origin) -> bool {
    let plan = reconcile(&observed, &mut state.observation.borrow_mut(), origin);
    apply(state, observed, &plan);
    plan.continue_polling
}

/// Reconcile a submission reply's snapshot, then take the scheduling
/// decision the direct-response path owns: poll while the round is live,
/// stay quiet once it has settled.
pub fn observe_direct(state: &AppState, observed: RoundState) {
    let phase = observed.phase;
    observe(state, observed, Origin::DirectResponse);
    match phase {
        Some(phase) if !phase.is_terminal() => state.poller.start(poll_sink(state)),
        _ => state.poller.stop(),
    }
}

/// Sink handed to the poller; every successfully polled state flows through
/// here.
#[must_use]
pub fn poll_sink(state: &AppState) -> StateSink {
    let state = state.clone();
    Rc::new(move |observed| observe(&state, observed, Origin::Poll))
}

fn apply(state: &AppState, observed: RoundState, plan: &TransitionPlan) {
    match plan.timer {
        TimerAction::Restart { total, seconds_left } => {
            state
                .presenter
                .start(state.countdown.clone(), total, seconds_left);
        }
        TimerAction::Stop => state.presenter.stop(),
        TimerAction::Leave => {
            if let Some(seconds_left) = plan.countdown {
                state.presenter.update(seconds_left);
            }
        }
    }

    if plan.reset_bid_entry {
        state.bid_entry.set(AttrValue::default());
        state.bid_error.set(None);
    }

    if plan.show_results {
        state.summary.set(Some(results_summary(&observed)));
        let mut roster = (*state.roster).clone();
        roster.adopt_ledger(&observed.users);
        state.roster.set(roster);
    }

    if plan.decision_cue {
        audio::decision_cue();
    }

    if let Some(round_phase) = plan.target_page {
        state.phase.set(Phase::for_round(round_phase));
    }

    // A snapshot with an unrecognized phase was ignored by the engine and
    // must not become the rendered round either.
    if observed.phase.is_some() {
        state.round.set(Some(observed));
    }
}
