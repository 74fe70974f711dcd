//! HTTP transport seam.
//!
//! Browser builds plug in a gloo-net transport; tests plug in a scripted fake.
//! Futures are not `Send` because the browser event loop is single-threaded.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DashboardError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client used by [`crate::MeasurementsClient`].
///
/// Implementations return [`DashboardError::Network`] when no response was
/// received. A non-success status is still `Ok`; the caller decides.
#[async_trait(?Send)]
pub trait Transport {
    /// Plain GET.
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError>;

    /// Cross-origin POST with `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, DashboardError>;
}
