#![forbid(unsafe_code)]
//! Choreclash client engine
//!
//! Platform-agnostic round synchronization logic for the Choreclash task
//! auction client: the wire data model, the pre-round draft roster, the
//! phase transition engine, countdown math, and the results view-model.
//! No UI or browser dependencies live here.

pub mod countdown;
pub mod error;
pub mod results;
pub mod roster;
pub mod round;
pub mod sync;

pub use countdown::{
    BID_WINDOW_SECONDS, HANDOVER_SECONDS, is_urgent, reference_duration, ring_fraction,
};
pub use error::ValidationError;
pub use results::{LedgerRow, ResultsSummary, UNASSIGNED_LABEL, results_summary};
pub use roster::{DraftRoster, Participant, STARTING_POINTS, parse_bid};
pub use round::{BidRow, RoundPhase, RoundState, UserLedger};
pub use sync::{ClientObservation, Origin, TimerAction, TransitionPlan, reconcile};
