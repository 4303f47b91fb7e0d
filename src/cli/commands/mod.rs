//! One module per top-level subcommand. Each exposes
//! `handle(cmd, cfg)` and is wired in `crate::dispatch`.

pub mod asistencia;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod distance;
pub mod export;
pub mod gastos;
pub mod giras;
pub mod incidencias;
pub mod init;
pub mod sedes;
pub mod usuarios;

use crate::api::ApiClient;
use crate::cli::parser::{DayArgs, PageArgs};
use crate::config::Config;
use crate::core::pagination::Page;
use crate::errors::{AppError, AppResult, FieldError};
use crate::session::Session;
use crate::ui::messages::{confirm, footer, warning};
use crate::utils::date;
use chrono::NaiveDate;

/// Warn with `prompt` and ask for a yes/no answer. A failed read is a no.
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    confirm("Confirm").unwrap_or(false)
}

/// Client carrying the stored session token.
pub(crate) fn authed_client(cfg: &Config) -> AppResult<ApiClient> {
    let session = Session::require(&cfg.session_file())?;
    ApiClient::new(cfg, Some(&session))
}

/// Page of `items` per the paging flags; `--all` shows everything.
pub(crate) fn paginate<'a, T>(items: Vec<&'a T>, paging: &PageArgs, cfg: &Config) -> Page<&'a T> {
    if paging.all {
        let n = items.len().max(1);
        return Page::of(&items, 1, n);
    }
    Page::of(&items, paging.page, paging.per_page.unwrap_or(cfg.page_size))
}

/// "11-20 of 42 · page 2/5" plus a hint when more pages follow.
pub(crate) fn page_footer<T>(page: &Page<T>) {
    footer(format!(
        "{} · page {}/{}",
        page.range_label(),
        page.page,
        page.total_pages.max(1)
    ));
    if page.has_next() {
        footer(format!("use --page {} for more", page.page + 1));
    }
}

/// Day picked by `--date`, `--prev` and `--next`.
pub(crate) fn resolve_day(day: &DayArgs) -> AppResult<NaiveDate> {
    date::resolve_day(day.date.as_deref(), day.prev, day.next, date::today())
}

/// Parse an optional enum-like flag, turning unknown values into an error
/// that lists the accepted ones.
pub(crate) fn parse_flag<T>(
    value: Option<&str>,
    field: &'static str,
    accepted: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> AppResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(v) => parse(v).map(Some).ok_or_else(|| {
            AppError::Validation(vec![FieldError::new(
                field,
                format!("'{v}' is not one of: {accepted}"),
            )])
        }),
    }
}
