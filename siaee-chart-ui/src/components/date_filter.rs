//! Date range inputs with filter and reset buttons.

use crate::state::AppState;
use dioxus::prelude::*;
use siaee_panel::DomIds;

#[derive(Props, Clone, PartialEq)]
pub struct DateFilterProps {
    pub ids: DomIds,
    /// "Filtrar Gráfico" clicked
    pub on_filter: EventHandler<()>,
    /// "Resetar" clicked
    pub on_reset: EventHandler<()>,
}

/// Start/end date inputs bound to AppState.
#[component]
pub fn DateFilter(props: DateFilterProps) -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let on_filter = props.on_filter;
    let on_reset = props.on_reset;

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "De: "
                input {
                    id: "{props.ids.start_date}",
                    r#type: "date",
                    value: "{start}",
                    oninput: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "Até: "
                input {
                    id: "{props.ids.end_date}",
                    r#type: "date",
                    value: "{end}",
                    oninput: on_end_change,
                }
            }
            button {
                id: "{props.ids.filter_button}",
                onclick: move |_| on_filter.call(()),
                "Filtrar Gráfico"
            }
            button {
                id: "{props.ids.reset_button}",
                onclick: move |_| on_reset.call(()),
                "Resetar"
            }
        }
    }
}
