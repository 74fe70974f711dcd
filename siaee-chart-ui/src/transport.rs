//! Browser transport (gloo-net) and delay (gloo-timers).

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use siaee_api::{DashboardError, HttpResponse, Transport};
use siaee_panel::Sleeper;
use std::time::Duration;
use web_sys::RequestMode;

/// `fetch()`-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Format(format!("unreadable body: {}", e)))?;
        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, DashboardError> {
        // json() also sets Content-Type: application/json
        let response = Request::post(url)
            .mode(RequestMode::Cors)
            .json(body)
            .map_err(|e| DashboardError::Format(e.to_string()))?
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status: response.status(),
            body: String::new(),
        })
    }
}

/// `setTimeout`-backed delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
