#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::Phase;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_phase(phase: Phase, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_phase(&phase);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_phase_for_route(current_phase: Phase, route: Option<Route>) -> Option<Phase> {
    let new_phase = route.and_then(|route| route.to_phase())?;
    if new_phase == current_phase {
        return None;
    }

    is_route_transition_allowed(current_phase, new_phase).then_some(new_phase)
}

// Round pages follow server state, never the address bar; the only
// URL-driven move is the escape hatch back home.
#[cfg(any(target_arch = "wasm32", test))]
const fn is_route_transition_allowed(_current: Phase, next: Phase) -> bool {
    matches!(next, Phase::Home)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_phase(
    phase: &UseStateHandle<Phase>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let phase = phase.clone();
    use_effect_with((phase, active_route), move |(phase, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_phase(**phase, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_phase_with_route(phase: &UseStateHandle<Phase>, route: Option<Route>) {
    let phase = phase.clone();
    use_effect_with(route, move |route| {
        if let Some(new_phase) = next_phase_for_route(*phase, route.clone()) {
            phase.set(new_phase);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_phase_skips_when_unchanged() {
        let route = Route::from_phase(&Phase::Bid);
        assert!(next_route_for_phase(Phase::Bid, Some(&route)).is_none());
        assert_eq!(next_route_for_phase(Phase::Bid, None), Some(Route::Bid));
        assert_eq!(
            next_route_for_phase(Phase::Results, Some(&Route::Bid)),
            Some(Route::Results)
        );
    }

    #[test]
    fn url_can_only_drive_the_client_home() {
        assert_eq!(
            next_phase_for_route(Phase::Results, Some(Route::Home)),
            Some(Phase::Home)
        );
        assert_eq!(
            next_phase_for_route(Phase::Bid, Some(Route::Home)),
            Some(Phase::Home)
        );
        assert!(next_phase_for_route(Phase::Home, Some(Route::Home)).is_none());
        assert!(next_phase_for_route(Phase::Home, Some(Route::Bid)).is_none());
        assert!(next_phase_for_route(Phase::Handover, Some(Route::Results)).is_none());
        assert!(next_phase_for_route(Phase::Bid, Some(Route::NotFound)).is_none());
    }
}
