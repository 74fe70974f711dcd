//! Section header with title and optional unit explanation.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
    /// Unit explanation (e.g., "W / Wh à esquerda, A / V à direita")
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.unit_description}"
                }
            }
        }
    }
}
