use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the sample timestamp.
pub const FIELD_DATA_HORA: &str = "data_hora";
/// Current in amperes.
pub const FIELD_CORRENTE: &str = "corrente";
/// Voltage in volts.
pub const FIELD_TENSAO: &str = "tensao";
/// Power in watts.
pub const FIELD_POTENCIA: &str = "potencia";
/// Energy in watt-hours.
pub const FIELD_ENERGIA: &str = "energia";

const KNOWN_FIELDS: [&str; 5] = [
    FIELD_DATA_HORA,
    FIELD_CORRENTE,
    FIELD_TENSAO,
    FIELD_POTENCIA,
    FIELD_ENERGIA,
];

/// One sampled electrical reading as returned by `GET /medicoes`.
///
/// The five known fields are typed. The complete payload is kept in the order
/// the backend sent it so the table can render every field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MeasurementRecord {
    /// Raw timestamp text, e.g. "2024-03-05T14:30:00". `None` when the field is
    /// missing or not text; the raw value is still in [`fields`](Self::fields).
    pub data_hora: Option<String>,
    pub corrente: Option<f64>,
    pub tensao: Option<f64>,
    pub potencia: Option<f64>,
    pub energia: Option<f64>,
    fields: Map<String, Value>,
}

impl MeasurementRecord {
    /// All fields of the payload, in the order the backend sent them.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields in the payload (known and extra).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields beyond the five known ones.
    pub fn extra(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields().filter(|(k, _)| !KNOWN_FIELDS.contains(k))
    }

    /// Raw value of a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl From<Map<String, Value>> for MeasurementRecord {
    fn from(fields: Map<String, Value>) -> Self {
        let data_hora = match fields.get(FIELD_DATA_HORA) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                warn!("Field '{}' is not text: {}", FIELD_DATA_HORA, other);
                None
            }
            None => {
                warn!("Record without '{}'", FIELD_DATA_HORA);
                None
            }
        };

        MeasurementRecord {
            data_hora,
            corrente: numeric(fields.get(FIELD_CORRENTE)),
            tensao: numeric(fields.get(FIELD_TENSAO)),
            potencia: numeric(fields.get(FIELD_POTENCIA)),
            energia: numeric(fields.get(FIELD_ENERGIA)),
            fields,
        }
    }
}

impl TryFrom<Value> for MeasurementRecord {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(format!("expected a measurement object, got {}", other)),
        }
    }
}

/// Numeric columns may arrive as JSON numbers or as decimal strings.
fn numeric(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Literal text of a payload value as a browser would print it into a cell.
///
/// Strings are verbatim, numbers use the shortest round-trip form (`220`, not
/// `220.0`) with exponent notation from 1e21 up and below 1e-6, null is empty,
/// arrays are comma-joined and objects are compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => number_text(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn number_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if magnitude < 1e21 && magnitude >= 1e-6 {
        return f.to_string();
    }
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 42,
            "data_hora": "2024-03-05T14:30:00",
            "corrente": 1.25,
            "tensao": "220.50",
            "potencia": 275,
            "energia": null,
            "fator_potencia": 0.92,
            "dispositivo": "medidor-01"
        })
    }

    #[test]
    fn test_decode_known_fields() {
        let record: MeasurementRecord = serde_json::from_value(sample()).unwrap();
        assert_eq!(record.data_hora.as_deref(), Some("2024-03-05T14:30:00"));
        assert_eq!(record.corrente, Some(1.25));
        assert_eq!(record.tensao, Some(220.5));
        assert_eq!(record.potencia, Some(275.0));
        assert_eq!(record.energia, None);
    }

    #[test]
    fn test_fields_keep_payload_order() {
        let record: MeasurementRecord = serde_json::from_value(sample()).unwrap();
        let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "id",
                "data_hora",
                "corrente",
                "tensao",
                "potencia",
                "energia",
                "fator_potencia",
                "dispositivo"
            ]
        );
        assert_eq!(record.field_count(), 8);

        let extra: Vec<&str> = record.extra().map(|(k, _)| k).collect();
        assert_eq!(extra, vec!["id", "fator_potencia", "dispositivo"]);
    }

    #[test]
    fn test_unusable_timestamp_still_decodes() {
        let record = MeasurementRecord::try_from(json!({ "corrente": 1.0 })).unwrap();
        assert_eq!(record.data_hora, None);
        assert_eq!(record.corrente, Some(1.0));

        let record = MeasurementRecord::try_from(json!({ "data_hora": null, "tensao": 220 })).unwrap();
        assert_eq!(record.data_hora, None);
        assert_eq!(record.get("data_hora"), Some(&Value::Null));
        assert_eq!(record.field_count(), 2);

        let record = MeasurementRecord::try_from(json!({ "data_hora": 1700000000 })).unwrap();
        assert_eq!(record.data_hora, None);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(MeasurementRecord::try_from(json!([1, 2, 3])).is_err());
        assert!(MeasurementRecord::try_from(json!("2024-03-05T14:30:00")).is_err());
        assert!(MeasurementRecord::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_cell_text_matches_browser_rendering() {
        assert_eq!(cell_text(&json!("medidor-01")), "medidor-01");
        assert_eq!(cell_text(&json!(220)), "220");
        assert_eq!(cell_text(&json!(220.0)), "220");
        assert_eq!(cell_text(&json!(0.92)), "0.92");
        assert_eq!(cell_text(&json!(-3)), "-3");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!([1, "a", 2.5])), "1,a,2.5");
        assert_eq!(cell_text(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_cell_text_switches_to_exponent_at_browser_limits() {
        assert_eq!(cell_text(&json!(1e21)), "1e+21");
        assert_eq!(cell_text(&json!(1.5e22)), "1.5e+22");
        assert_eq!(cell_text(&json!(-2e25)), "-2e+25");
        assert_eq!(cell_text(&json!(1e20)), "100000000000000000000");
        assert_eq!(cell_text(&json!(1e-7)), "1e-7");
        assert_eq!(cell_text(&json!(2.5e-8)), "2.5e-8");
        assert_eq!(cell_text(&json!(0.000001)), "0.000001");
        assert_eq!(cell_text(&json!(0.0)), "0");
    }
}
