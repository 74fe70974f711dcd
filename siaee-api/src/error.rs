//! Error types for the measurements API and the dashboard pipeline.

use thiserror::Error;

/// Errors raised while fetching, decoding or rendering measurements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never produced a response (DNS, CORS, connection reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The measurements endpoint answered with a non-success status
    #[error("HTTP error while fetching measurements: {status}")]
    Http { status: u16 },

    /// The body was not JSON or an element was not a measurement record
    #[error("Format error: {0}")]
    Format(String),

    /// The webhook answered with a non-success status
    #[error("Webhook call failed with status {status}")]
    Webhook { status: u16 },

    /// A filter bound was not a "YYYY-MM-DD" date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The chart library refused to build a chart
    #[error("Chart error: {0}")]
    Chart(String),
}
