use super::{authed_client, parse_flag};
use crate::api::IncidenciaQuery;
use crate::cli::parser::{Commands, IncidenciaAction};
use crate::config::Config;
use crate::core::filters::{DateWindow, Filter, IncidenciaFilter};
use crate::core::stats::IncidenciaStats;
use crate::core::validation::validate_incidencia_update;
use crate::errors::AppResult;
use crate::models::incidencia::{Incidencia, IncidenciaEstado, IncidenciaUpdate, Severidad};
use crate::ui::messages::{detail, footer, header, info, paragraph, success};
use crate::utils::colors::{incidencia_estado, missing, severidad};
use crate::utils::date::{fmt_date, fmt_datetime, local_midnight, parse_opt_date, today};
use crate::utils::table::{Column, Table};
use chrono::Local;

const ESTADOS: &str = "Pendiente, En Revisión, Resuelto, Cerrado";
const SEVERIDADES: &str = "Bajo, Medio, Alto, Crítico";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Incidencias { action } = cmd {
        let client = authed_client(cfg)?;

        match action {
            IncidenciaAction::List {
                search,
                area,
                estado,
                severidad: sev,
                fecha,
                from,
                to,
                page,
                limit,
            } => {
                let estado = parse_flag(estado.as_deref(), "estado", ESTADOS, IncidenciaEstado::parse)?;
                let sev = parse_flag(sev.as_deref(), "severidad", SEVERIDADES, Severidad::parse)?;

                let mut filter = IncidenciaFilter::in_zone(today(), Local);
                filter.search = search.clone();
                filter.area = area.clone();
                filter.estado = estado;
                filter.severidad = sev;
                filter.fecha = DateWindow::from_args(
                    fecha.as_deref(),
                    parse_opt_date(from.as_deref())?,
                    parse_opt_date(to.as_deref())?,
                )?;

                // state and severity are filtered by the server as well
                let result = client.list_incidencias(&IncidenciaQuery {
                    page: *page,
                    limit: limit.unwrap_or(cfg.page_size),
                    estado,
                    severidad: sev,
                })?;
                let matching = filter.apply(&result.incidencias);
                let stats = IncidenciaStats::compute(result.total, matching.iter().copied());

                header("Incidencias");
                if matching.is_empty() {
                    info("No incidents match the current filters.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("ID"),
                        Column::new("Fecha"),
                        Column::new("Tipo").max(22),
                        Column::new("Área").max(22),
                        Column::new("Ubicación").max(20),
                        Column::new("Severidad"),
                        Column::new("Estado"),
                        Column::new("Asignado").max(20),
                        Column::new("Límite"),
                    ]);
                    for i in &matching {
                        t.add_row(vec![
                            i.id.clone(),
                            fmt_date(&i.fecha),
                            i.tipo_incidente.clone(),
                            i.area_afectada.clone(),
                            i.ubicacion.clone(),
                            severidad(i.grado_severidad),
                            incidencia_estado(i.estado),
                            i.asigned.as_ref().map(|u| u.full_name()).unwrap_or_else(missing),
                            i.deadline.as_ref().map(fmt_date).unwrap_or_else(missing),
                        ]);
                    }
                    print!("{}", t.render());
                }
                footer(format!(
                    "page {}/{} · {} incidents on the server",
                    (*page).max(1),
                    result.total_pages.max(1),
                    result.total
                ));
                if (*page as u64) < result.total_pages {
                    footer(format!("use --page {} for more", page + 1));
                }

                println!();
                detail("Total", stats.total);
                detail("Pendientes", stats.pendientes);
                detail("En revisión", stats.en_revision);
                detail("Resueltos", stats.resueltos);
                detail("Críticos", stats.criticos);
            }

            IncidenciaAction::Show { id } => print_incidencia(&client.get_incidencia(id)?),

            IncidenciaAction::Update {
                id,
                estado,
                deadline,
                asigned,
                notas,
            } => {
                let (estado, day) = validate_incidencia_update(estado, deadline.as_deref())?;
                let current = client.get_incidencia(id)?;

                let update = IncidenciaUpdate {
                    estado,
                    deadline: day.map(local_midnight).transpose()?.or(current.deadline),
                    asigned: asigned
                        .clone()
                        .or_else(|| current.asigned.as_ref().map(|u| u.id.clone())),
                    notas_estado: notas.trim().to_string(),
                };
                client.update_incidencia(id, &update)?;
                success(format!(
                    "Incidencia {id}: {} → {}",
                    current.estado.as_str(),
                    estado.as_str()
                ));
            }
        }
    }
    Ok(())
}

fn print_incidencia(i: &Incidencia) {
    header(format!("Incidencia {}", i.id));
    detail("Tipo", &i.tipo_incidente);
    detail("Fecha", fmt_datetime(&i.fecha));
    detail("Área afectada", &i.area_afectada);
    detail("Ubicación", &i.ubicacion);
    detail("Severidad", severidad(i.grado_severidad));
    detail("Estado", incidencia_estado(i.estado));
    detail(
        "Reportado por",
        i.user.as_ref().map(|u| u.full_name()).unwrap_or_else(missing),
    );
    detail(
        "Asignado a",
        i.asigned.as_ref().map(|u| u.full_name()).unwrap_or_else(missing),
    );
    detail("Fecha límite", i.deadline.as_ref().map(fmt_date).unwrap_or_else(missing));
    paragraph("Descripción", &i.descripcion);
    if let Some(r) = &i.recomendacion {
        paragraph("Recomendación", r);
    }
    if !i.imagenes.is_empty() {
        detail("Imágenes", i.imagenes.len());
        for url in &i.imagenes {
            println!("    {url}");
        }
    }

    if !i.historial_estados.is_empty() {
        header("Historial de estados");
        let mut t = Table::new(vec![
            Column::new("Fecha"),
            Column::new("Estado"),
            Column::new("Notas").max(50),
        ]);
        for h in &i.historial_estados {
            t.add_row(vec![
                fmt_datetime(&h.fecha),
                incidencia_estado(h.estado),
                h.notas.clone().unwrap_or_default(),
            ]);
        }
        print!("{}", t.render());
    }
}
