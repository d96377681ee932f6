//! Phase transition engine: decides what the presentation layer must do for
//! each observed server state, given the previously rendered one.

use crate::countdown::{BID_WINDOW_SECONDS, HANDOVER_SECONDS, reference_duration};
use crate::round::{RoundPhase, RoundState};

/// Where an observed state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Routine poll tick.
    Poll,
    /// Carried in a start-round or bid submission reply.
    DirectResponse,
}

/// The most recently rendered `(phase, active_user)` pair. Updated once per
/// well-formed observation, whatever its origin, so staleness never
/// accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientObservation {
    pub last_phase: Option<RoundPhase>,
    pub last_active_user: Option<String>,
}

/// What the single live countdown should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerAction {
    /// Keep whatever is running; `TransitionPlan::countdown` may still
    /// refresh the displayed value.
    #[default]
    Leave,
    /// Release any running countdown and begin a fresh one.
    Restart { total: u32, seconds_left: u32 },
    /// Release any running countdown.
    Stop,
}

/// Presentation work for one observed state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionPlan {
    /// Page to navigate to, or `None` to stay put.
    pub target_page: Option<RoundPhase>,
    pub timer: TimerAction,
    /// Authoritative remaining seconds for the countdown displays.
    pub countdown: Option<u32>,
    /// Clear the bid entry field, its error indicator, and re-enable submission.
    pub reset_bid_entry: bool,
    /// Fire the one-shot decision animation/sound.
    pub decision_cue: bool,
    /// Render the results payload and adopt the server's user ledger.
    pub show_results: bool,
    /// Whether an active poll loop should schedule another tick.
    pub continue_polling: bool,
}

impl TransitionPlan {
    /// Plan that changes nothing; an active poll loop stays alive.
    #[must_use]
    pub fn ignore(origin: Origin) -> Self {
        Self {
            continue_polling: origin == Origin::Poll,
            ..Self::default()
        }
    }
}

/// Compare an observed state against the previous observation and produce
/// the presentation work it requires.
///
/// A routine poll that repeats the `(phase, active_user)` pair only refreshes
/// countdown displays; a change in either, or any observation carried in a
/// submission reply, produces the full transition for the observed phase.
/// The observation pair is updated on every well-formed call. Direct
/// responses never ask the poll loop to continue: that path owns its own
/// scheduling decision, which keeps exactly one poll loop alive.
pub fn reconcile(
    observed: &RoundState,
    previous: &mut ClientObservation,
    origin: Origin,
) -> TransitionPlan {
    let Some(phase) = observed.phase else {
        // An unrecognized phase is ignored wholesale; the observation keeps
        // pointing at the last snapshot that was actually rendered.
        return TransitionPlan::ignore(origin);
    };

    let phase_changed = previous.last_phase != Some(phase);
    let active_changed = previous.last_active_user != observed.active_user;
    previous.last_phase = Some(phase);
    previous.last_active_user = observed.active_user.clone();

    let continue_polling = origin == Origin::Poll && !phase.is_terminal();

    if !phase_changed && !active_changed && origin == Origin::Poll {
        return TransitionPlan {
            countdown: reference_duration(phase).map(|_| observed.seconds_left),
            continue_polling,
            ..TransitionPlan::default()
        };
    }

    match phase {
        RoundPhase::Handover => TransitionPlan {
            target_page: Some(phase),
            timer: TimerAction::Restart {
                total: HANDOVER_SECONDS,
                seconds_left: observed.seconds_left,
            },
            countdown: Some(observed.seconds_left),
            continue_polling,
            ..TransitionPlan::default()
        },
        RoundPhase::Bid => TransitionPlan {
            target_page: Some(phase),
            timer: TimerAction::Restart {
                total: BID_WINDOW_SECONDS,
                seconds_left: observed.seconds_left,
            },
            countdown: Some(observed.seconds_left),
            reset_bid_entry: true,
            continue_polling,
            ..TransitionPlan::default()
        },
        RoundPhase::Results => TransitionPlan {
            target_page: Some(phase),
            timer: TimerAction::Stop,
            decision_cue: true,
            show_results: true,
            continue_polling,
            ..TransitionPlan::default()
        },
        RoundPhase::Idle => TransitionPlan {
            target_page: Some(phase),
            timer: TimerAction::Stop,
            continue_polling,
            ..TransitionPlan::default()
        },
    }
}
