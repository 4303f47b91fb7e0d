use super::{authed_client, page_footer, paginate, resolve_day};
use crate::cli::parser::{AsistenciaAction, Commands};
use crate::config::Config;
use crate::core::filters::{AsistenciaFilter, Filter, ValidityScope, sedes_of};
use crate::core::stats::AsistenciaStats;
use crate::errors::{AppError, AppResult, FieldError};
use crate::models::asistencia::Asistencia;
use crate::ui::messages::{detail, header, info, warning};
use crate::utils::colors::{asistencia_estado, by_flag, missing, yes_no};
use crate::utils::date::{fmt_time, long_date};
use crate::utils::formatting::{flagged_meters, hours2readable, meters};
use crate::utils::table::{Column, Table};
use tracing::warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Asistencia { action } = cmd {
        let client = authed_client(cfg)?;

        match action {
            AsistenciaAction::List {
                day,
                search,
                estado,
                sede,
                check,
                paging,
            } => {
                let day = resolve_day(day)?;
                let scope = ValidityScope::parse(estado).ok_or_else(|| {
                    AppError::Validation(vec![FieldError::new(
                        "estado",
                        format!("'{estado}' is not one of: todos, validas, invalidas"),
                    )])
                })?;

                let asistencias = client.list_asistencias(day)?;
                let filter = AsistenciaFilter {
                    search: search.clone(),
                    estado: scope,
                    sede: sede.clone(),
                };
                let matching = filter.apply(&asistencias);
                let stats = AsistenciaStats::compute(matching.iter().copied());
                let show_distance = *check || cfg.show_distances;
                let page = paginate(matching, paging, cfg);

                header(format!("Asistencia · {}", long_date(day)));
                if page.is_empty() {
                    info("No attendance records for this day and filters.");
                } else {
                    let mut cols = vec![
                        Column::new("ID"),
                        Column::new("Usuario").max(24),
                        Column::new("Sede").max(20),
                        Column::new("Entrada"),
                        Column::new("Salida"),
                        Column::new("Horas").right(),
                        Column::new("Estado"),
                    ];
                    if show_distance {
                        cols.push(Column::new("Dist. entrada").right());
                        cols.push(Column::new("Dist. salida").right());
                    }
                    let mut t = Table::new(cols);
                    let mut mismatched = 0usize;

                    for a in &page.items {
                        let mut row = vec![
                            a.id.clone(),
                            a.usuario.full_name(),
                            a.sede.nombre.clone(),
                            fmt_time(&a.entrada),
                            a.salida.as_ref().map(fmt_time).unwrap_or_else(missing),
                            a.horas_trabajadas.map(hours2readable).unwrap_or_else(missing),
                            asistencia_estado(a.estado()),
                        ];
                        if show_distance {
                            let (entry, exit, flagged) = distances(a);
                            if flagged {
                                mismatched += 1;
                            }
                            row.push(entry);
                            row.push(exit);
                        }
                        t.add_row(row);
                    }
                    print!("{}", t.render());
                    page_footer(&page);
                    if mismatched > 0 {
                        warning(format!(
                            "{mismatched} record(s) on this page with a stored validity that differs from the recomputed distance (marked ≠)."
                        ));
                    }
                }

                println!();
                detail("Registros", stats.total);
                detail("Válidos", stats.validas);
                detail("Inválidos", stats.invalidas);
                detail("En curso", stats.en_curso);
                detail("Horas", hours2readable(stats.horas_totales));

                let sedes: Vec<String> = sedes_of(&asistencias)
                    .iter()
                    .map(|s| format!("{} ({})", s.nombre, s.id))
                    .collect();
                if !sedes.is_empty() {
                    detail("Sedes del día", sedes.join(", "));
                }
            }

            AsistenciaAction::Show { id, day } => {
                let day = resolve_day(day)?;
                let asistencias = client.list_asistencias(day)?;
                let a = asistencias
                    .iter()
                    .find(|a| a.id == *id)
                    .ok_or_else(|| AppError::NotFound(format!("attendance {id} on {day}")))?;
                print_asistencia(a)?;
            }
        }
    }
    Ok(())
}

/// Recomputed entry/exit distances, colored by the stored verdict.
/// A cell whose stored flag the recomputation contradicts carries `≠`,
/// and the third value reports whether the row has any such cell.
fn distances(a: &Asistencia) -> (String, String, bool) {
    match a.recompute() {
        Ok(check) => {
            let mismatch = a.mismatch(&check);
            if mismatch.any() {
                warn!(id = %a.id, "stored validity differs from recomputed distance");
            }
            let entry = by_flag(
                a.valido_entrada,
                &flagged_meters(check.entry.distance_m, mismatch.entry),
            );
            let exit = match (check.exit, a.valido_salida) {
                (Some(e), Some(v)) => by_flag(v, &flagged_meters(e.distance_m, mismatch.exit)),
                (Some(e), None) => meters(e.distance_m),
                (None, _) => missing(),
            };
            (entry, exit, mismatch.any())
        }
        Err(e) => {
            warn!(id = %a.id, "cannot recompute distance: {e}");
            (missing(), missing(), false)
        }
    }
}

fn print_asistencia(a: &Asistencia) -> AppResult<()> {
    let check = a.recompute()?;

    header(format!("Asistencia {}", a.id));
    detail("Usuario", a.usuario.full_name());
    detail("Sede", format!("{} · radio {} m", a.sede.nombre, a.sede.radio));
    detail(
        "Entrada",
        format!(
            "{} ({:.6}, {:.6})",
            fmt_time(&a.entrada),
            a.latitude_entrada,
            a.longitude_entrada
        ),
    );
    detail(
        "Distancia entrada",
        format!(
            "{} · {}",
            meters(check.entry.distance_m),
            yes_no(a.valido_entrada, "válida", "inválida")
        ),
    );

    match (a.salida.as_ref(), a.latitude_salida, a.longitude_salida) {
        (Some(salida), Some(lat), Some(lon)) => {
            detail("Salida", format!("{} ({lat:.6}, {lon:.6})", fmt_time(salida)));
        }
        (Some(salida), _, _) => detail("Salida", fmt_time(salida)),
        (None, _, _) => detail("Salida", missing()),
    }
    if let Some(exit) = check.exit {
        let verdict = a
            .valido_salida
            .map(|v| yes_no(v, "válida", "inválida"))
            .unwrap_or_else(missing);
        detail("Distancia salida", format!("{} · {verdict}", meters(exit.distance_m)));
    }

    detail("Horas", a.horas_trabajadas.map(hours2readable).unwrap_or_else(missing));
    detail("Estado", asistencia_estado(a.estado()));

    if a.disagrees_with(&check) {
        warning("The stored validity does not match the recomputed distance.");
    }
    Ok(())
}
