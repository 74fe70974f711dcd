//! Combined bar/line chart of the four electrical series.
//!
//! The chart library itself sits behind [`ChartBackend`]. [`ChartState`] owns
//! the only live chart and releases it before building another.

use log::{debug, info};
use serde_json::{json, Value};
use siaee_api::{DashboardError, MeasurementRecord};

use crate::table::timestamp_label;

/// Parallel per-record sequences, in input (newest-first) order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub potencia: Vec<Option<f64>>,
    pub energia: Vec<Option<f64>>,
    pub corrente: Vec<Option<f64>>,
    pub tensao: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn from_records(records: &[MeasurementRecord]) -> Self {
        let mut series = ChartSeries::default();
        for record in records {
            series.labels.push(timestamp_label(record.data_hora.as_deref()));
            series.potencia.push(record.potencia);
            series.energia.push(record.energia);
            series.corrente.push(record.corrente);
            series.tensao.push(record.tensao);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in on-screen order, left to right.
    ///
    /// The x axis is reversed, so newest-first input reads oldest-first.
    pub fn display_labels(&self) -> Vec<&str> {
        self.labels.iter().rev().map(String::as_str).collect()
    }
}

/// Chart.js configuration for the measurements chart.
pub fn chart_config(series: &ChartSeries) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": series.labels,
            "datasets": [
                {
                    "type": "bar",
                    "label": "Potência (W)",
                    "data": series.potencia,
                    "backgroundColor": "rgba(54, 162, 235, 0.6)",
                    "yAxisID": "y",
                },
                {
                    "type": "bar",
                    "label": "Energia (Wh)",
                    "data": series.energia,
                    "backgroundColor": "rgba(255, 206, 86, 0.6)",
                    "yAxisID": "y",
                },
                {
                    "type": "line",
                    "label": "Corrente (A)",
                    "data": series.corrente,
                    "borderColor": "rgba(255, 99, 132, 1)",
                    "fill": false,
                    "tension": 0.3,
                    "yAxisID": "y1",
                },
                {
                    "type": "line",
                    "label": "Tensão (V)",
                    "data": series.tensao,
                    "borderColor": "rgba(75, 192, 192, 1)",
                    "fill": false,
                    "tension": 0.3,
                    "yAxisID": "y1",
                },
            ],
        },
        "options": {
            "responsive": true,
            "scales": {
                "x": { "reverse": true },
                "y": {
                    "beginAtZero": true,
                    "position": "left",
                    "title": { "display": true, "text": "Potência / Energia" },
                },
                "y1": {
                    "beginAtZero": true,
                    "position": "right",
                    "grid": { "drawOnChartArea": false },
                    "title": { "display": true, "text": "Tensão / Corrente" },
                },
            },
            "plugins": {
                "title": { "display": true, "text": "Medições Elétricas" },
                "legend": { "position": "top" },
            },
        },
    })
}

/// A charting library that can build and tear down chart instances.
pub trait ChartBackend {
    /// Identifies one live chart instance.
    type Handle;

    fn create(&mut self, config: &Value) -> Result<Self::Handle, DashboardError>;

    fn destroy(&mut self, handle: Self::Handle);
}

/// Owner of the currently rendered chart, if any.
pub struct ChartState<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: ChartBackend> ChartState<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    /// Release the current chart, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.current.take() {
            debug!("Destroying previous chart instance");
            self.backend.destroy(handle);
        }
    }

    /// Replace the chart with one built from `records`.
    ///
    /// Empty input leaves no chart. The old instance is always released before
    /// the new one is created.
    pub fn render(&mut self, records: &[MeasurementRecord]) -> Result<(), DashboardError> {
        self.clear();
        if records.is_empty() {
            return Ok(());
        }

        let series = ChartSeries::from_records(records);
        let handle = self.backend.create(&chart_config(&series))?;
        self.current = Some(handle);
        info!("Chart rendered with {} points", series.len());
        Ok(())
    }
}
