//! Pipeline progress indicator.

use crate::state::AppState;
use dioxus::prelude::*;
use siaee_panel::PipelineState;

#[component]
pub fn LoadingIndicator() -> Element {
    let state = use_context::<AppState>();
    let text = match (state.pipeline)() {
        PipelineState::Idle => return rsx! {},
        PipelineState::Fetching => "Carregando medições...",
        PipelineState::RenderingEmpty | PipelineState::RenderingData => "Atualizando painel...",
    };

    rsx! {
        div {
            style: "padding: 8px; color: #666; font-size: 13px;",
            "{text}"
        }
    }
}
