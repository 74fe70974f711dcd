//! Measurement record types and API client for the SIAEE backend.
//!
//! Transport is abstracted behind [`transport::Transport`] so the same client
//! runs in the browser (gloo-net, see `siaee-chart-ui`) and under native tests.

pub mod client;
pub mod date_range;
pub mod error;
pub mod record;
pub mod transport;

pub use client::MeasurementsClient;
pub use date_range::DateRange;
pub use error::DashboardError;
pub use record::MeasurementRecord;
pub use transport::{HttpResponse, Transport};
