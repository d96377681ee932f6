#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod phase;
pub mod routing;
pub mod session;
pub mod state;
pub mod view;

pub use phase::Phase;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_sync_route_with_phase(&app_state.phase, navigator, route.clone());
    routing::use_sync_phase_with_route(&app_state.phase, route);
    use_home_safety_net(&app_state);

    let handlers = view::AppHandlers::new(&app_state);
    view::render_app(&app_state, &handlers)
}

/// Landing on the home page, however it happened, silences any leftover
/// countdown and poll loop.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_home_safety_net(app_state: &state::AppState) {
    let presenter = app_state.presenter.clone();
    let poller = app_state.poller.clone();
    use_effect_with(*app_state.phase, move |phase| {
        if *phase == Phase::Home {
            presenter.stop();
            poller.stop();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::Phase;
    use crate::router::Route;
    use choreclash_core::RoundPhase;

    #[test]
    fn route_phase_mappings_cover_all_states() {
        let phases = [Phase::Home, Phase::Handover, Phase::Bid, Phase::Results];
        for phase in phases {
            let route = Route::from_phase(&phase);
            assert_eq!(route.to_phase(), Some(phase));
        }
        assert_eq!(Route::NotFound.to_phase(), None);
    }

    #[test]
    fn every_round_phase_has_a_page() {
        assert_eq!(Phase::for_round(RoundPhase::Idle), Phase::Home);
        assert_eq!(Phase::for_round(RoundPhase::Handover), Phase::Handover);
        assert_eq!(Phase::for_round(RoundPhase::Bid), Phase::Bid);
        assert_eq!(Phase::for_round(RoundPhase::Results), Phase::Results);
    }
}
