//! Button that triggers the collection webhook.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RefreshButtonProps {
    pub id: String,
    pub onclick: EventHandler<MouseEvent>,
}

/// Dimmed and inert while a webhook refresh is in flight.
#[component]
pub fn RefreshButton(props: RefreshButtonProps) -> Element {
    let state = use_context::<AppState>();
    let enabled = (state.refresh_enabled)();
    let onclick = props.onclick;
    let style = if enabled {
        "opacity: 0.8; pointer-events: auto;"
    } else {
        "opacity: 0.3; pointer-events: none;"
    };

    rsx! {
        button {
            id: "{props.id}",
            style: "{style}",
            disabled: !enabled,
            onclick: move |evt| onclick.call(evt),
            "Atualizar dados"
        }
    }
}
