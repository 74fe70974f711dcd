use log::{info, warn};
use serde_json::{json, Value};

use crate::date_range::DateRange;
use crate::error::DashboardError;
use crate::record::MeasurementRecord;
use crate::transport::Transport;

/// Client for the measurements endpoint and the data-collection webhook.
pub struct MeasurementsClient<T> {
    transport: T,
    api_url: String,
    webhook_url: String,
}

impl<T: Transport> MeasurementsClient<T> {
    pub fn new(transport: T, api_url: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
            webhook_url: webhook_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full GET URL for the given range.
    pub fn measurements_url(&self, range: &DateRange) -> String {
        match range.query_string() {
            Some(query) => format!("{}?{}", self.api_url, query),
            None => self.api_url.clone(),
        }
    }

    /// Fetch measurement records, newest first as the backend orders them.
    ///
    /// A payload that is not an array, or an empty array, yields an empty list.
    pub async fn fetch_measurements(
        &self,
        range: &DateRange,
    ) -> Result<Vec<MeasurementRecord>, DashboardError> {
        let url = self.measurements_url(range);
        match range.query_string() {
            Some(query) => info!("Fetching measurements with filter: {}", query),
            None => info!("Fetching all measurements (no filter)"),
        }

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(DashboardError::Http {
                status: response.status,
            });
        }

        decode_measurements(&response.body)
    }

    /// Ask the automation service to run a collection cycle.
    ///
    /// Success only means the request was accepted; collection runs afterwards.
    pub async fn trigger_webhook(&self) -> Result<(), DashboardError> {
        info!("Triggering data collection webhook");
        let response = self.transport.post_json(&self.webhook_url, &json!({})).await?;
        if !response.is_success() {
            return Err(DashboardError::Webhook {
                status: response.status,
            });
        }
        info!("Webhook accepted with status {}", response.status);
        Ok(())
    }
}

/// Decode a `GET /medicoes` body.
pub fn decode_measurements(body: &str) -> Result<Vec<MeasurementRecord>, DashboardError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|e| DashboardError::Format(e.to_string()))?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            warn!("Measurements API returned a non-array payload: {}", kind(&other));
            return Ok(Vec::new());
        }
    };

    if items.is_empty() {
        warn!("Measurements API returned an empty array");
    }

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            MeasurementRecord::try_from(item)
                .map_err(|e| DashboardError::Format(format!("record {}: {}", idx, e)))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
