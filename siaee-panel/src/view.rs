//! Seams between the dashboard controller and the page it drives.

use async_trait::async_trait;
use std::time::Duration;

use crate::table::TableBody;

/// Where a reload pipeline invocation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Fetching,
    RenderingEmpty,
    RenderingData,
}

impl PipelineState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, PipelineState::Idle)
    }
}

/// The page surface the controller reads from and writes to.
///
/// Every method is synchronous; the controller never holds a borrow of the
/// view across a suspension point.
pub trait DashboardView {
    /// Replace the table body.
    fn show_table(&self, body: TableBody);

    /// Enable or disable the webhook refresh control.
    fn set_refresh_enabled(&self, enabled: bool);

    /// Current (start, end) date input values, possibly empty.
    fn date_inputs(&self) -> (String, String);

    fn clear_date_inputs(&self);

    fn set_pipeline_state(&self, state: PipelineState);

    /// User-visible alert.
    fn alert(&self, message: &str);
}

/// Non-blocking delay.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}
