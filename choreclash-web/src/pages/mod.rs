pub mod bid;
pub mod handover;
pub mod home;
pub mod results;

use yew::prelude::*;

/// Button-click adapter for unit callbacks.
pub(crate) fn on_click(callback: &Callback<()>) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |_| callback.emit(()))
}

/// Enter-key adapter so text fields submit like their buttons.
pub(crate) fn on_enter(callback: &Callback<()>) -> Callback<KeyboardEvent> {
    let callback = callback.clone();
    Callback::from(move |event: KeyboardEvent| {
        if event.key() == "Enter" {
            callback.emit(());
        }
    })
}

/// Inline error slot rendered next to the field it belongs to.
pub(crate) fn inline_error(message: Option<&AttrValue>) -> Html {
    message.map_or_else(Html::default, |text| {
        html! { <p class="inline-error" role="alert">{ text.clone() }</p> }
    })
}
