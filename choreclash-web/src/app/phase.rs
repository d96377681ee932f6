use choreclash_core::RoundPhase;

/// Presentation phase of the client shell: which page is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Home,
    Handover,
    Bid,
    Results,
}

impl Phase {
    /// Page shown for an authoritative round phase.
    #[must_use]
    pub const fn for_round(phase: RoundPhase) -> Self {
        match phase {
            RoundPhase::Idle => Self::Home,
            RoundPhase::Handover => Self::Handover,
            RoundPhase::Bid => Self::Bid,
            RoundPhase::Results => Self::Results,
        }
    }
}
