use chrono::NaiveDate;
use siaee_utils::dates::{format_date, parse_date};

use crate::error::DashboardError;

/// Optional inclusive bounds for `GET /medicoes`.
///
/// A missing bound imposes no filter on that side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// No filter at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build a range from two `<input type="date">` values.
    ///
    /// Empty inputs become missing bounds; anything else must be "YYYY-MM-DD".
    pub fn from_inputs(start: &str, end: &str) -> Result<Self, DashboardError> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Query string without the leading `?`, `start_date` first.
    ///
    /// Returns `None` when neither bound is set.
    pub fn query_string(&self) -> Option<String> {
        let params: Vec<String> = [("start_date", self.start), ("end_date", self.end)]
            .into_iter()
            .filter_map(|(name, bound)| bound.map(|d| format!("{}={}", name, format_date(&d))))
            .collect();

        if params.is_empty() {
            None
        } else {
            Some(params.join("&"))
        }
    }
}

fn parse_bound(input: &str) -> Result<Option<NaiveDate>, DashboardError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    parse_date(input)
        .map(Some)
        .map_err(|_| DashboardError::InvalidDate(input.to_string()))
}
