// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

fn bad(msg: &str) -> AppError {
    AppError::InvalidDate(msg.to_string())
}

/// Parse `--range` into inclusive day bounds.
///
/// Accepted shapes:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start.len() != end.len() {
        return Err(bad("start and end must have the same format"));
    }

    let from = period_bounds(start)?.0;
    let to = period_bounds(end)?.1;

    if to < from {
        return Err(bad(&format!("range ends before it starts: {r}")));
    }
    Ok((from, to))
}

/// First and last day of a year, a month or a single day.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad(&format!("invalid year: {p}")))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1);
            let last = NaiveDate::from_ymd_opt(y, 12, 31);
            first
                .zip(last)
                .ok_or_else(|| bad(&format!("invalid year: {p}")))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad(&format!("invalid month: {p}")))?;
            let last = first
                .checked_add_months(chrono::Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| bad(&format!("invalid month: {p}")))?;
            Ok((first, last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| bad(&format!("invalid date: {p}")))?;
            Ok((d, d))
        }
        _ => Err(bad(&format!("unsupported --range format: {p}"))),
    }
}

/// Human label for a range, used as a document subtitle.
pub fn range_label(r: &str) -> String {
    match r.split_once(':') {
        Some((from, to)) => format!("del {} al {}", from.trim(), to.trim()),
        None => match (r.len(), r.get(0..4), r.get(5..7)) {
            (7, Some(year), Some(month)) => {
                let month = month
                    .parse::<u32>()
                    .map(crate::utils::date::month_name)
                    .unwrap_or("");
                format!("{month} {year}")
            }
            _ => r.to_string(),
        },
    }
}
