use std::cell::RefCell;
use std::rc::Rc;

use choreclash_core::{ClientObservation, DraftRoster, ResultsSummary, RoundState};
use yew::prelude::*;

use crate::app::phase::Phase;
use crate::countdown::{CountdownPresenter, CountdownView};
use crate::poller::{POLL_INTERVAL_MS, RoundPoller};

/// Session state owned by the application shell. Render state lives in hook
/// handles; the observation pair, poller, and countdown presenter are shared
/// session objects the handlers and hooks reach through `Rc`.
#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub roster: UseStateHandle<DraftRoster>,
    pub round: UseStateHandle<Option<RoundState>>,
    pub summary: UseStateHandle<Option<ResultsSummary>>,
    pub countdown: UseStateHandle<CountdownView>,
    pub name_entry: UseStateHandle<AttrValue>,
    pub task_entry: UseStateHandle<AttrValue>,
    pub bid_entry: UseStateHandle<AttrValue>,
    pub name_error: UseStateHandle<Option<AttrValue>>,
    pub task_error: UseStateHandle<Option<AttrValue>>,
    pub start_error: UseStateHandle<Option<AttrValue>>,
    pub bid_error: UseStateHandle<Option<AttrValue>>,
    pub export_error: UseStateHandle<Option<AttrValue>>,
    pub observation: Rc<RefCell<ClientObservation>>,
    pub poller: Rc<RoundPoller>,
    pub presenter: Rc<CountdownPresenter>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Home),
        roster: use_state(DraftRoster::new),
        round: use_state(|| None::<RoundState>),
        summary: use_state(|| None::<ResultsSummary>),
        countdown: use_state(CountdownView::default),
        name_entry: use_state(AttrValue::default),
        task_entry: use_state(AttrValue::default),
        bid_entry: use_state(AttrValue::default),
        name_error: use_state(|| None::<AttrValue>),
        task_error: use_state(|| None::<AttrValue>),
        start_error: use_state(|| None::<AttrValue>),
        bid_error: use_state(|| None::<AttrValue>),
        export_error: use_state(|| None::<AttrValue>),
        observation: use_mut_ref(ClientObservation::default),
        poller: use_memo((), |_| RoundPoller::new(POLL_INTERVAL_MS)),
        presenter: use_memo((), |_| CountdownPresenter::new()),
    }
}
