//! Records to table body rows.

use log::warn;
use siaee_api::record::{cell_text, FIELD_DATA_HORA};
use siaee_api::MeasurementRecord;
use siaee_utils::dates::format_pt_br;
use serde_json::Value;

/// Message shown when a load yields no records.
pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado para o período.";

/// Column span of the placeholder row, wide enough for any header layout.
pub const PLACEHOLDER_COLSPAN: usize = 12;

/// What a browser prints for a timestamp it cannot read.
pub const INVALID_DATE: &str = "Invalid Date";

/// One table row, one cell per record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Contents of the measurements table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// A single full-width row carrying a message.
    Placeholder { message: String, colspan: usize },
    Rows(Vec<TableRow>),
}

impl Default for TableBody {
    fn default() -> Self {
        TableBody::Rows(Vec::new())
    }
}

impl TableBody {
    pub fn no_data() -> Self {
        TableBody::Placeholder {
            message: NO_DATA_MESSAGE.to_string(),
            colspan: PLACEHOLDER_COLSPAN,
        }
    }

    /// Rendered `<tr>` count.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// Build the table body for a fetch result.
///
/// Rows follow input order and cells follow payload field order. The table
/// header is assumed to match the payload shape.
pub fn render_table(records: &[MeasurementRecord]) -> TableBody {
    if records.is_empty() {
        return TableBody::no_data();
    }

    TableBody::Rows(
        records
            .iter()
            .map(|record| TableRow {
                cells: record.fields().map(|(key, value)| cell(key, value)).collect(),
            })
            .collect(),
    )
}

/// pt-BR display text for a raw timestamp, or [`INVALID_DATE`].
pub fn timestamp_label(raw: Option<&str>) -> String {
    match raw.and_then(format_pt_br) {
        Some(label) => label,
        None => {
            warn!("Unrecognized timestamp {:?}", raw);
            INVALID_DATE.to_string()
        }
    }
}

fn cell(key: &str, value: &Value) -> String {
    if key == FIELD_DATA_HORA {
        timestamp_label(value.as_str())
    } else {
        cell_text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::record;
    use serde_json::json;

    #[test]
    fn test_empty_records_render_placeholder() {
        let body = render_table(&[]);
        assert_eq!(body.row_count(), 1);
        assert_eq!(
            body,
            TableBody::Placeholder {
                message: "Nenhum dado encontrado para o período.".to_string(),
                colspan: 12,
            }
        );
    }

    #[test]
    fn test_one_row_per_record_one_cell_per_field() {
        let records = vec![
            record(json!({"id": 1, "data_hora": "2024-03-05T14:30:00", "corrente": 1.2, "tensao": 220, "potencia": 264, "energia": 12.5})),
            record(json!({"data_hora": "2024-03-05T14:00:00", "corrente": 1.1})),
            record(json!({"data_hora": "2024-03-05T13:30:00", "corrente": 1.0, "tensao": 218, "potencia": 218, "energia": 10, "fase": "A", "ok": true})),
        ];
        let body = render_table(&records);

        let rows = match body {
            TableBody::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        };
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row.cells.len(), record.field_count());
        }
    }

    #[test]
    fn test_cells_follow_field_order_and_format_timestamp() {
        let records = vec![record(json!({
            "id": 7,
            "data_hora": "2024-03-05T14:30:00",
            "corrente": 1.25,
            "tensao": "220.50",
            "potencia": 275.0,
            "energia": null
        }))];

        let body = render_table(&records);
        assert_eq!(
            body,
            TableBody::Rows(vec![TableRow {
                cells: vec![
                    "7".to_string(),
                    "05/03/2024, 14:30:00".to_string(),
                    "1.25".to_string(),
                    "220.50".to_string(),
                    "275".to_string(),
                    String::new(),
                ],
            }])
        );
    }

    #[test]
    fn test_unparseable_timestamp_reads_invalid_date() {
        let records = vec![record(json!({"data_hora": "ontem", "corrente": 1.0}))];
        match render_table(&records) {
            TableBody::Rows(rows) => assert_eq!(rows[0].cells[0], "Invalid Date"),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_payload_renders_every_row() {
        let records = vec![
            record(json!({"id": 2, "data_hora": "2024-03-05T14:30:00", "corrente": 1.2})),
            record(json!({"id": 1, "data_hora": null, "corrente": 1.1})),
            record(json!({"id": 0, "data_hora": 1700000000, "corrente": 1.0})),
        ];
        let rows = match render_table(&records) {
            TableBody::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        };
        let timestamps: Vec<&str> = rows.iter().map(|row| row.cells[1].as_str()).collect();
        assert_eq!(
            timestamps,
            vec!["05/03/2024, 14:30:00", "Invalid Date", "Invalid Date"]
        );
        assert_eq!(rows[1].cells, vec!["1", "Invalid Date", "1.1"]);
    }
}
