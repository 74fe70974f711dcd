//! Measurements table. The header is fixed; the body mirrors `AppState::table`.

use crate::state::AppState;
use dioxus::prelude::*;
use siaee_panel::TableBody;

#[derive(Props, Clone, PartialEq)]
pub struct MeasurementsTableProps {
    /// DOM id of the `<tbody>`
    pub body_id: String,
    /// Header labels, expected to match the payload field order
    pub columns: Vec<String>,
}

#[component]
pub fn MeasurementsTable(props: MeasurementsTableProps) -> Element {
    let state = use_context::<AppState>();
    let body = state.table.read().clone();

    let rows = match &body {
        TableBody::Placeholder { message, colspan } => rsx! {
            tr {
                td {
                    colspan: "{colspan}",
                    style: "text-align: center;",
                    "{message}"
                }
            }
        },
        TableBody::Rows(rows) => rsx! {
            for (idx, row) in rows.iter().enumerate() {
                tr {
                    key: "{idx}",
                    for cell in row.cells.iter() {
                        td { style: "padding: 6px 10px;", "{cell}" }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "overflow-x: auto; margin-top: 16px;",
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        style: "background: #3498db; color: white;",
                        for column in props.columns.iter() {
                            th { style: "padding: 8px 10px; text-align: left;", "{column}" }
                        }
                    }
                }
                tbody {
                    id: "{props.body_id}",
                    {rows}
                }
            }
        }
    }
}
