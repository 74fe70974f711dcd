//! Shared utility functions for SIAEE crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
    use std::fmt::Display;

    /// Date format of filter bounds and `<input type="date">` values: "YYYY-MM-DD"
    pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

    /// pt-BR numeric date-time, 24-hour clock: "dd/mm/yyyy, hh:mm:ss"
    pub const PT_BR_DATE_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

    /// Offset-qualified layouts RFC 3339 rejects, such as Postgres text output
    /// with an hour-only offset ("2024-03-05 14:30:00+00").
    const OFFSET_DATE_TIME_FORMATS: [&str; 2] = [
        "%Y-%m-%d %H:%M:%S%.f%#z",
        "%Y-%m-%dT%H:%M:%S%.f%#z",
    ];

    /// Timestamp layouts accepted when the value carries no UTC offset.
    const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(INPUT_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT)?)
    }

    /// Format a raw API timestamp for display in the browser's local time zone.
    ///
    /// Returns `None` when the value is not a recognizable timestamp.
    pub fn format_pt_br(raw: &str) -> Option<String> {
        format_pt_br_in(raw, &Local)
    }

    /// Format a raw API timestamp as "dd/mm/yyyy, hh:mm:ss" in the given zone.
    ///
    /// Timestamps with an explicit offset (RFC 3339) are converted into `tz`.
    /// Timestamps without one are already wall-clock time and are printed as-is.
    /// A bare date is read as UTC midnight, which is how browsers read it.
    pub fn format_pt_br_in<Tz>(raw: &str, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let raw = raw.trim();

        let offset = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
            OFFSET_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        });
        if let Some(dt) = offset {
            return Some(dt.with_timezone(tz).format(PT_BR_DATE_TIME_FORMAT).to_string());
        }

        if let Some(naive) = parse_naive_date_time(raw) {
            return Some(naive.format(PT_BR_DATE_TIME_FORMAT).to_string());
        }

        let midnight = NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
            .ok()?
            .and_hms_opt(0, 0, 0)?;
        Some(
            Utc.from_utc_datetime(&midnight)
                .with_timezone(tz)
                .format(PT_BR_DATE_TIME_FORMAT)
                .to_string(),
        )
    }

    fn parse_naive_date_time(raw: &str) -> Option<NaiveDateTime> {
        NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

}
