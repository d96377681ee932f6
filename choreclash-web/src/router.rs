use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/handover")]
    Handover,
    #[at("/bid")]
    Bid,
    #[at("/results")]
    Results,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &crate::app::Phase) -> Self {
        match phase {
            crate::app::Phase::Home => Self::Home,
            crate::app::Phase::Handover => Self::Handover,
            crate::app::Phase::Bid => Self::Bid,
            crate::app::Phase::Results => Self::Results,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<crate::app::Phase> {
        match self {
            Self::Home => Some(crate::app::Phase::Home),
            Self::Handover => Some(crate::app::Phase::Handover),
            Self::Bid => Some(crate::app::Phase::Bid),
            Self::Results => Some(crate::app::Phase::Results),
            Self::NotFound => None, // Preserve current phase on 404 routes.
        }
    }
}
