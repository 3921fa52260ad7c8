//! Button that re-runs the filter and redraws the charts.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn UpdateButton() -> Element {
    let mut state = use_context::<AppState>();

    let on_click = move |_: Event<MouseData>| {
        log::info!("Update pressed, filtering data");
        state.update_charts();
    };

    rsx! {
        button {
            id: "updateBtn",
            style: "padding: 4px 12px; font-weight: bold; cursor: pointer;",
            onclick: on_click,
            "Actualizar"
        }
    }
}
