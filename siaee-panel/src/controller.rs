//! The dashboard controller: fetch → table → chart, plus the operations the
//! page wires to its controls.
//!
//! Every public operation catches its own errors, logs them and raises a single
//! alert. Nothing here serializes overlapping invocations; when two pipelines
//! race, the last one to render wins. The view returns to idle only once no
//! pipeline is in flight.

use log::{error, info, warn};
use siaee_api::{DashboardError, DateRange, MeasurementsClient, Transport};
use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::chart::{ChartBackend, ChartState};
use crate::config::DashboardConfig;
use crate::table::render_table;
use crate::view::{DashboardView, PipelineState, Sleeper};

pub const LOAD_FAILED_ALERT: &str = "Falha ao carregar dados da API. Verifique o console.";
pub const REFRESH_FAILED_ALERT: &str =
    "Erro ao chamar o webhook ou recarregar dados. Verifique o console.";
pub const EMPTY_FILTER_ALERT: &str =
    "Por favor, selecione pelo menos a data de início ou a data de fim para filtrar.";
pub const INVALID_FILTER_ALERT: &str = "Data de filtro inválida. Use o formato aaaa-mm-dd.";

pub struct Dashboard<T, S, V, B: ChartBackend> {
    client: MeasurementsClient<T>,
    sleeper: S,
    view: V,
    chart: RefCell<ChartState<B>>,
    refresh_delay: Duration,
    in_flight: Cell<usize>,
}

impl<T, S, V, B> Dashboard<T, S, V, B>
where
    T: Transport,
    S: Sleeper,
    V: DashboardView,
    B: ChartBackend,
{
    pub fn new(config: &DashboardConfig, transport: T, sleeper: S, view: V, backend: B) -> Self {
        Self {
            client: MeasurementsClient::new(transport, &config.api_url, &config.webhook_url),
            sleeper,
            view,
            chart: RefCell::new(ChartState::new(backend)),
            refresh_delay: config.refresh_delay,
            in_flight: Cell::new(0),
        }
    }

    pub fn client(&self) -> &MeasurementsClient<T> {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn chart_is_live(&self) -> bool {
        self.chart.borrow().is_live()
    }

    /// Run one pipeline: fetch, then render the table and the chart.
    ///
    /// Returns the number of records rendered. When the last pipeline in
    /// flight returns (or is dropped) the view goes back to
    /// [`PipelineState::Idle`], whatever the outcome.
    pub async fn reload(&self, range: &DateRange) -> Result<usize, DashboardError> {
        self.in_flight.set(self.in_flight.get() + 1);
        let _idle = PipelineGuard {
            in_flight: &self.in_flight,
            view: &self.view,
        };
        self.run_pipeline(range).await
    }

    async fn run_pipeline(&self, range: &DateRange) -> Result<usize, DashboardError> {
        info!("Loading and rendering measurements");
        self.view.set_pipeline_state(PipelineState::Fetching);
        let records = self.client.fetch_measurements(range).await?;

        if records.is_empty() {
            self.view.set_pipeline_state(PipelineState::RenderingEmpty);
            self.view.show_table(render_table(&records));
            self.chart.borrow_mut().clear();
            return Ok(0);
        }

        self.view.set_pipeline_state(PipelineState::RenderingData);
        self.view.show_table(render_table(&records));
        self.chart.borrow_mut().render(&records)?;
        info!("Rendered {} measurements", records.len());
        Ok(records.len())
    }

    /// Reload and report any failure to the user.
    async fn load(&self, range: &DateRange) {
        if let Err(e) = self.reload(range).await {
            error!("Loading measurements failed: {}", e);
            self.view.alert(LOAD_FAILED_ALERT);
        }
    }

    /// First, unfiltered load when the page mounts.
    pub async fn load_initial(&self) {
        self.load(&DateRange::unbounded()).await;
    }

    /// Reload using the date inputs as bounds.
    ///
    /// With both inputs empty the user is asked to pick a date and nothing is
    /// requested.
    pub async fn apply_filter(&self) {
        let (start, end) = self.view.date_inputs();
        if start.trim().is_empty() && end.trim().is_empty() {
            warn!("Filter requested without any date");
            self.view.alert(EMPTY_FILTER_ALERT);
            return;
        }

        let range = match DateRange::from_inputs(&start, &end) {
            Ok(range) => range,
            Err(e) => {
                error!("Rejected filter: {}", e);
                self.view.alert(INVALID_FILTER_ALERT);
                return;
            }
        };
        self.load(&range).await;
    }

    /// Clear both date inputs and reload everything.
    pub async fn reset_filter(&self) {
        self.view.clear_date_inputs();
        self.load(&DateRange::unbounded()).await;
    }

    /// Trigger the collection webhook, wait for the collection window, then
    /// reload without a filter.
    ///
    /// The refresh control is disabled for the duration and re-enabled on every
    /// exit path, including when this future is dropped mid-flight.
    pub async fn refresh_via_webhook(&self) {
        self.view.set_refresh_enabled(false);
        let _enable = RefreshGuard(&self.view);

        if let Err(e) = self.webhook_then_reload().await {
            error!("Refresh via webhook failed: {}", e);
            self.view.alert(REFRESH_FAILED_ALERT);
        }
    }

    async fn webhook_then_reload(&self) -> Result<(), DashboardError> {
        self.client.trigger_webhook().await?;

        info!(
            "Waiting {} ms for the collection cycle to finish",
            self.refresh_delay.as_millis()
        );
        self.sleeper.sleep(self.refresh_delay).await;

        self.reload(&DateRange::unbounded()).await?;
        info!("Measurements reloaded after webhook");
        Ok(())
    }
}

/// Re-enables the refresh control when dropped.
struct RefreshGuard<'a, V: DashboardView>(&'a V);

impl<V: DashboardView> Drop for RefreshGuard<'_, V> {
    fn drop(&mut self) {
        self.0.set_refresh_enabled(true);
    }
}

/// Marks the view idle when the last pipeline in flight ends.
struct PipelineGuard<'a, V: DashboardView> {
    in_flight: &'a Cell<usize>,
    view: &'a V,
}

impl<V: DashboardView> Drop for PipelineGuard<'_, V> {
    fn drop(&mut self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.view.set_pipeline_state(PipelineState::Idle);
        }
    }
}
