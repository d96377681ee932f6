use std::rc::Rc;

use choreclash_web::countdown::{CountdownPresenter, CountdownView};
use choreclash_web::poller::{POLL_INTERVAL_MS, RoundPoller};
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    on_handle: Callback<UseStateHandle<CountdownView>>,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let view = use_state(CountdownView::default);
    props.on_handle.emit(view.clone());
    Html::default()
}

fn mount(on_handle: Callback<UseStateHandle<CountdownView>>) {
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::document().body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<Harness>::with_root_and_props(root, HarnessProps { on_handle }).render();
}

#[wasm_bindgen_test]
fn presenter_start_replaces_the_previous_countdown() {
    let presenter = Rc::new(CountdownPresenter::new());
    let captured: Rc<std::cell::RefCell<Option<UseStateHandle<CountdownView>>>> =
        Rc::new(std::cell::RefCell::new(None));
    let sink = {
        let captured = captured.clone();
        Callback::from(move |handle| {
            *captured.borrow_mut() = Some(handle);
        })
    };
    mount(sink);

    if let Some(handle) = captured.borrow().clone() {
        presenter.start(handle.clone(), 6, 6);
        assert!(presenter.is_running());
        presenter.start(handle, 11, 11);
        assert!(presenter.is_running());
    }

    presenter.stop();
    presenter.stop();
    assert!(!presenter.is_running());
}

#[wasm_bindgen_test]
fn poller_stop_is_always_safe() {
    let poller = Rc::new(RoundPoller::new(POLL_INTERVAL_MS));
    poller.stop();
    poller.stop();
    assert!(!poller.is_active());
}
