//! Dashboard configuration.
//!
//! Endpoints are compiled in; the dashboard reads no environment at runtime.

use std::time::Duration;

/// Production measurements endpoint.
pub const DEFAULT_API_URL: &str = "https://grupo-7-energias-back-end.3du0va.easypanel.host/api/medicoes";

/// Production data-collection webhook.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://grupo-7-energias-n8n.3du0va.easypanel.host/webhook/56f1c082-3148-4a8c-9c82-223281a64e94";

/// Time given to the automation service to finish collecting after it accepts
/// the webhook. Collection is assumed to complete within this window; nothing
/// checks that it did.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(3000);

/// DOM element ids the dashboard renders into or reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    pub table_body: String,
    pub chart_canvas: String,
    pub refresh_button: String,
    pub filter_button: String,
    pub reset_button: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            table_body: "table-body".to_string(),
            chart_canvas: "graficoMedicoes".to_string(),
            refresh_button: "refreshBtn".to_string(),
            filter_button: "filterChartBtn".to_string(),
            reset_button: "resetChartFilterBtn".to_string(),
            start_date: "startDate".to_string(),
            end_date: "endDate".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub webhook_url: String,
    pub refresh_delay: Duration,
    pub dom: DomIds,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            refresh_delay: DEFAULT_REFRESH_DELAY,
            dom: DomIds::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = url.into();
        self
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub fn with_dom(mut self, dom: DomIds) -> Self {
        self.dom = dom;
        self
    }
}
