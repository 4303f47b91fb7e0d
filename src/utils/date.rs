use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use std::fmt;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("{s} (expected YYYY-MM-DD)")))
}

pub fn parse_opt_date(s: Option<&str>) -> AppResult<Option<NaiveDate>> {
    s.map(parse_date).transpose()
}

/// Move `day` by `delta` days. Moving forward never goes past `today`.
pub fn shift_day(day: NaiveDate, delta: i64, today: NaiveDate) -> NaiveDate {
    let moved = day
        .checked_add_signed(chrono::Duration::days(delta))
        .unwrap_or(day);
    if delta > 0 { moved.min(today.max(day)) } else { moved }
}

/// Day shown by the attendance list: `--date` (default today), then one
/// step back for `--prev` or forward for `--next`.
pub fn resolve_day(
    date: Option<&str>,
    prev: bool,
    next: bool,
    today: NaiveDate,
) -> AppResult<NaiveDate> {
    let base = match date {
        Some(d) => parse_date(d)?,
        None => today,
    };
    Ok(match (prev, next) {
        (true, false) => shift_day(base, -1, today),
        (false, true) => shift_day(base, 1, today),
        _ => base,
    })
}

/// Path parameter for `/asistencias/:date`: UTC midnight of `day`.
pub fn iso_day_param(day: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", day.format("%Y-%m-%d"))
}

/// Calendar day of `dt` on a wall clock in `tz`.
pub fn day_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    dt.with_timezone(tz).date_naive()
}

/// Local calendar day of a backend timestamp; the day every list shows.
pub fn local_day(dt: &DateTime<Utc>) -> NaiveDate {
    day_in(dt, &Local)
}

/// Start of `day` on a wall clock in `tz`, as a UTC instant. Days whose
/// midnight is skipped or repeated by a clock change are rejected.
pub fn midnight_in<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> AppResult<DateTime<Utc>> {
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(format!("{day} has no single local midnight")))
}

/// Instant stored for a date typed on the command line.
pub fn local_midnight(day: NaiveDate) -> AppResult<DateTime<Utc>> {
    midnight_in(day, &Local)
}

pub fn fmt_date_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.with_timezone(tz).format("%d/%m/%Y").to_string()
}

pub fn fmt_date(dt: &DateTime<Utc>) -> String {
    fmt_date_in(dt, &Local)
}

pub fn fmt_time(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M:%S").to_string()
}

pub fn fmt_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

pub fn weekday_name(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

pub fn month_name(m: u32) -> &'static str {
    match m {
        1 => "enero",
        2 => "febrero",
        3 => "marzo",
        4 => "abril",
        5 => "mayo",
        6 => "junio",
        7 => "julio",
        8 => "agosto",
        9 => "septiembre",
        10 => "octubre",
        11 => "noviembre",
        12 => "diciembre",
        _ => "",
    }
}

/// "lunes, 3 de marzo de 2025"
pub fn long_date(day: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(day.weekday()),
        day.day(),
        month_name(day.month()),
        day.year()
    )
}
