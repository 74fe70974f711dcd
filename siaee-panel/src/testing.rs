//! In-memory fakes for controller and chart tests.

use async_trait::async_trait;
use serde_json::{json, Value};
use siaee_api::{DashboardError, HttpResponse, MeasurementRecord, Transport};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::chart::ChartBackend;
use crate::table::TableBody;
use crate::view::{DashboardView, PipelineState, Sleeper};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Get(String),
    Post(String, Value),
    Sleep(Duration),
    Table(TableBody),
    RefreshEnabled(bool),
    Pipeline(PipelineState),
    ClearInputs,
    Alert(String),
    ChartCreated(u32),
    ChartDestroyed(u32),
}

/// Ordered record of everything the fakes observed.
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn gets(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Get(url) => Some(url.clone()),
            _ => None,
        })
    }

    pub fn posts(&self) -> Vec<(String, Value)> {
        self.collect(|e| match e {
            Event::Post(url, body) => Some((url.clone(), body.clone())),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Alert(msg) => Some(msg.clone()),
            _ => None,
        })
    }

    pub fn tables(&self) -> Vec<TableBody> {
        self.collect(|e| match e {
            Event::Table(body) => Some(body.clone()),
            _ => None,
        })
    }

    pub fn last_table(&self) -> Option<TableBody> {
        self.tables().pop()
    }

    pub fn refresh_states(&self) -> Vec<bool> {
        self.collect(|e| match e {
            Event::RefreshEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    pub fn pipeline_states(&self) -> Vec<PipelineState> {
        self.collect(|e| match e {
            Event::Pipeline(state) => Some(*state),
            _ => None,
        })
    }

    /// Yield to the runtime until some logged event matches.
    pub async fn wait_for(&self, matches: impl Fn(&Event) -> bool) {
        while !self.0.borrow().iter().any(|e| matches(e)) {
            tokio::task::yield_now().await;
        }
    }

    fn collect<T>(&self, f: impl Fn(&Event) -> Option<T>) -> Vec<T> {
        self.0.borrow().iter().filter_map(f).collect()
    }
}

/// Answers requests from a script, in order. An exhausted script answers `200 []`.
pub struct FakeTransport {
    log: EventLog,
    responses: RefCell<VecDeque<Result<HttpResponse, DashboardError>>>,
}

impl FakeTransport {
    pub fn new(log: &EventLog, responses: Vec<Result<HttpResponse, DashboardError>>) -> Self {
        Self {
            log: log.clone(),
            responses: RefCell::new(responses.into()),
        }
    }

    fn next_response(&self) -> Result<HttpResponse, DashboardError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "[]")))
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DashboardError> {
        self.log.push(Event::Get(url.to_string()));
        let response = self.next_response();
        tokio::task::yield_now().await;
        response
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, DashboardError> {
        self.log.push(Event::Post(url.to_string(), body.clone()));
        let response = self.next_response();
        tokio::task::yield_now().await;
        response
    }
}

/// Records the requested delay and returns immediately, or never when stalled.
pub struct FakeSleeper {
    log: EventLog,
    stall: bool,
}

impl FakeSleeper {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            stall: false,
        }
    }

    pub fn stalled(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            stall: true,
        }
    }
}

#[async_trait(?Send)]
impl Sleeper for FakeSleeper {
    async fn sleep(&self, duration: Duration) {
        self.log.push(Event::Sleep(duration));
        if self.stall {
            std::future::pending::<()>().await;
        }
    }
}

pub struct FakeView {
    log: EventLog,
    inputs: RefCell<(String, String)>,
}

impl FakeView {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            inputs: RefCell::new((String::new(), String::new())),
        }
    }

    pub fn set_date_inputs(&self, start: &str, end: &str) {
        *self.inputs.borrow_mut() = (start.to_string(), end.to_string());
    }
}

impl DashboardView for FakeView {
    fn show_table(&self, body: TableBody) {
        self.log.push(Event::Table(body));
    }

    fn set_refresh_enabled(&self, enabled: bool) {
        self.log.push(Event::RefreshEnabled(enabled));
    }

    fn date_inputs(&self) -> (String, String) {
        self.inputs.borrow().clone()
    }

    fn clear_date_inputs(&self) {
        self.log.push(Event::ClearInputs);
        self.set_date_inputs("", "");
    }

    fn set_pipeline_state(&self, state: PipelineState) {
        self.log.push(Event::Pipeline(state));
    }

    fn alert(&self, message: &str) {
        self.log.push(Event::Alert(message.to_string()));
    }
}

/// Live-instance counters shared between a backend and its test.
#[derive(Default)]
pub struct ChartStats {
    created: Cell<u32>,
    live: Cell<u32>,
    max_live: Cell<u32>,
}

impl ChartStats {
    pub fn created(&self) -> u32 {
        self.created.get()
    }

    pub fn live(&self) -> u32 {
        self.live.get()
    }

    pub fn max_live(&self) -> u32 {
        self.max_live.get()
    }
}

#[derive(Default)]
pub struct FakeChartBackend {
    stats: Rc<ChartStats>,
    log: Option<EventLog>,
    fail: bool,
}

impl FakeChartBackend {
    pub fn with_log(log: &EventLog) -> Self {
        Self {
            log: Some(log.clone()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stats(&self) -> Rc<ChartStats> {
        Rc::clone(&self.stats)
    }
}

impl ChartBackend for FakeChartBackend {
    type Handle = u32;

    fn create(&mut self, _config: &Value) -> Result<u32, DashboardError> {
        if self.fail {
            return Err(DashboardError::Chart("canvas not found".to_string()));
        }
        let id = self.stats.created.get() + 1;
        self.stats.created.set(id);
        let live = self.stats.live.get() + 1;
        self.stats.live.set(live);
        self.stats.max_live.set(self.stats.max_live.get().max(live));
        if let Some(log) = &self.log {
            log.push(Event::ChartCreated(id));
        }
        Ok(id)
    }

    fn destroy(&mut self, handle: u32) {
        self.stats.live.set(self.stats.live.get() - 1);
        if let Some(log) = &self.log {
            log.push(Event::ChartDestroyed(handle));
        }
    }
}

pub fn record(value: Value) -> MeasurementRecord {
    MeasurementRecord::try_from(value).expect("test record")
}

/// Three readings, newest first.
pub fn sample_json() -> Value {
    json!([
        {"id": 3, "data_hora": "2024-03-05T14:30:00", "corrente": 1.2, "tensao": 220, "potencia": 264, "energia": 12.5},
        {"id": 2, "data_hora": "2024-03-05T14:00:00", "corrente": 1.1, "tensao": 219, "potencia": 240.9, "energia": 11.8},
        {"id": 1, "data_hora": "2024-03-05T13:30:00", "corrente": 1.0, "tensao": 218, "potencia": 218, "energia": 10.9}
    ])
}

pub fn sample_body() -> String {
    sample_json().to_string()
}

pub fn sample_records() -> Vec<MeasurementRecord> {
    match sample_json() {
        Value::Array(items) => items.into_iter().map(record).collect(),
        _ => Vec::new(),
    }
}
