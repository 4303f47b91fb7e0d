use super::{authed_client, resolve_day};
use crate::api::{ApiClient, IncidenciaQuery};
use crate::cli::parser::{Commands, ExportDataset};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTable, parse_range, range_label};
use crate::models::incidencia::Incidencia;
use crate::utils::date::{local_day, long_date};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { dataset, out } = cmd {
        let client = authed_client(cfg)?;
        let table = build_table(&client, dataset)?;

        let file = match &out.file {
            Some(f) => f.clone(),
            None => out.format.default_file(default_stem(dataset))?,
        };

        ExportLogic::export(&table, out.format, &file, out.force)?;
    }
    Ok(())
}

fn default_stem(dataset: &ExportDataset) -> &'static str {
    match dataset {
        ExportDataset::Asistencias { .. } => "asistencias",
        ExportDataset::Gastos { .. } => "gastos",
        ExportDataset::Giras { .. } => "giras",
        ExportDataset::Incidencias { .. } => "incidencias",
    }
}

fn bounds(range: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range.as_deref() {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => Ok(Some(parse_range(r)?)),
    }
}

fn in_bounds(day: NaiveDate, b: Option<(NaiveDate, NaiveDate)>) -> bool {
    b.is_none_or(|(from, to)| from <= day && day <= to)
}

fn titled(base: &str, range: &Option<String>) -> String {
    match range.as_deref() {
        Some(r) if !r.eq_ignore_ascii_case("all") => format!("{base} {}", range_label(r)),
        _ => base.to_string(),
    }
}

fn build_table(client: &ApiClient, dataset: &ExportDataset) -> AppResult<ExportTable> {
    match dataset {
        ExportDataset::Asistencias { day } => {
            let day = resolve_day(day)?;
            let rows = client.list_asistencias(day)?;
            Ok(ExportTable::from_records(
                &format!("Asistencia {}", long_date(day)),
                &rows,
            ))
        }

        ExportDataset::Gastos { gira, range } => {
            let b = bounds(range)?;
            let gastos: Vec<_> = client
                .list_gastos(gira)?
                .into_iter()
                .filter(|g| in_bounds(local_day(&g.fecha_emision), b))
                .collect();
            let base = gastos
                .first()
                .map(|g| format!("Gastos {}", g.gira.title))
                .unwrap_or_else(|| format!("Gastos gira {gira}"));
            Ok(ExportTable::from_records(&titled(&base, range), &gastos))
        }

        ExportDataset::Giras { range } => {
            let b = bounds(range)?;
            let giras: Vec<_> = client
                .list_giras()?
                .into_iter()
                .filter(|g| in_bounds(local_day(&g.fecha_inicio), b))
                .collect();
            Ok(ExportTable::from_records(&titled("Giras", range), &giras))
        }

        ExportDataset::Incidencias { range } => {
            let b = bounds(range)?;
            let incidencias = all_incidencias(client)?
                .into_iter()
                .filter(|i| in_bounds(local_day(&i.fecha), b))
                .collect::<Vec<_>>();
            Ok(ExportTable::from_records(
                &titled("Incidencias", range),
                &incidencias,
            ))
        }
    }
}

/// Every incident: ask for the count first, then one page holding all.
fn all_incidencias(client: &ApiClient) -> AppResult<Vec<Incidencia>> {
    let first = client.list_incidencias(&IncidenciaQuery::default())?;
    if first.total as usize <= first.incidencias.len() {
        return Ok(first.incidencias);
    }
    let all = client.list_incidencias(&IncidenciaQuery {
        limit: first.total as usize,
        ..IncidenciaQuery::default()
    })?;
    Ok(all.incidencias)
}
