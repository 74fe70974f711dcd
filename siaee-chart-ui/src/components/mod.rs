//! Dioxus RSX components for the measurements dashboard.

mod chart_canvas;
mod chart_header;
mod date_filter;
mod loading_indicator;
mod measurements_table;
mod refresh_button;

pub use chart_canvas::ChartCanvas;
pub use chart_header::ChartHeader;
pub use date_filter::DateFilter;
pub use loading_indicator::LoadingIndicator;
pub use measurements_table::MeasurementsTable;
pub use refresh_button::RefreshButton;
