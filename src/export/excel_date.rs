// src/export/excel_date.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DAY_SECONDS: f64 = 86_400.0;

/// Shapes produced by the export rows: `YYYY-MM-DD HH:MM` for timestamps
/// and `YYYY-MM-DD` for plain days. RFC 3339 values (raw backend dates)
/// are accepted too and read as UTC.
fn read_cell(s: &str) -> Option<(NaiveDateTime, bool)> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some((dt, true));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some((d.and_time(NaiveTime::MIN), false));
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| (dt.naive_utc(), true))
}

/// Excel serial (days since 1899-12-30, fractional part for the time)
/// and the number format a date cell should use.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let (dt, with_time) = read_cell(s.trim())?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let serial = (dt - epoch).num_seconds() as f64 / DAY_SECONDS;

    let format = if with_time { "dd/mm/yyyy hh:mm" } else { "dd/mm/yyyy" };
    Some((format, serial))
}
