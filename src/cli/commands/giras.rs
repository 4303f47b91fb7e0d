use super::{ask_confirmation, authed_client, page_footer, paginate, parse_flag};
use crate::cli::parser::{Commands, GiraAction, GiraFields};
use crate::config::Config;
use crate::core::filters::{Filter, GiraFilter};
use crate::core::stats::GiraStats;
use crate::core::validation::validate_gira;
use crate::errors::AppResult;
use crate::models::gira::{Gira, GiraEstado, GiraPayload};
use crate::ui::messages::{detail, header, info, success};
use crate::utils::colors::{gira_estado, yes_no};
use crate::utils::date::{fmt_date, local_midnight, parse_date};
use crate::utils::formatting::{dolares, or_dash, soles};
use crate::utils::table::{Column, Table};

const ESTADOS: &str = "Pendiente, En Proceso, Completada, Cancelada";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Giras { action } = cmd {
        let client = authed_client(cfg)?;

        match action {
            GiraAction::List {
                search,
                estado,
                unidad_negocio,
                paging,
            } => {
                let filter = GiraFilter {
                    search: search.clone(),
                    estado: parse_flag(estado.as_deref(), "estado", ESTADOS, GiraEstado::parse)?,
                    unidad_negocio: unidad_negocio.clone(),
                };

                let giras = client.list_giras()?;
                let matching = filter.apply(&giras);
                let stats = GiraStats::compute(matching.iter().copied());
                let page = paginate(matching, paging, cfg);

                header("Giras");
                if page.is_empty() {
                    info("No trips match the current filters.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("ID"),
                        Column::new("Task").max(14),
                        Column::new("Usuario").max(22),
                        Column::new("Motivo").max(28),
                        Column::new("Unidad").max(16),
                        Column::new("Inicio"),
                        Column::new("Fin"),
                        Column::new("Estado"),
                        Column::new("Soles").right(),
                    ]);
                    for g in &page.items {
                        t.add_row(vec![
                            g.id.clone(),
                            g.task.clone(),
                            g.usuario.full_name(),
                            or_dash(&g.motivo),
                            or_dash(&g.unidad_negocio),
                            fmt_date(&g.fecha_inicio),
                            fmt_date(&g.fecha_fin),
                            gira_estado(g.estado),
                            soles(g.monto_soles),
                        ]);
                    }
                    print!("{}", t.render());
                    page_footer(&page);
                }

                println!();
                detail("Total", stats.total);
                detail("Activas", stats.activas);
                detail("Completadas", stats.completadas);
                detail(
                    "Presupuesto",
                    format!(
                        "{} · {}",
                        soles(stats.monto_total_soles),
                        dolares(stats.monto_total_dolares)
                    ),
                );
            }

            GiraAction::Show { id } => print_gira(&client.get_gira(id)?),

            GiraAction::Add { fields } => {
                let payload = apply_fields(GiraPayload::default(), fields)?;
                validate_gira(&payload)?;
                client.create_gira(&payload)?;
                success(format!("Gira '{}' creada.", payload.task));
            }

            GiraAction::Edit { id, fields } => {
                let current = client.get_gira(id)?;
                let payload = apply_fields(GiraPayload::from(&current), fields)?;
                validate_gira(&payload)?;
                client.update_gira(id, &payload)?;
                success(format!("Gira '{}' actualizada.", payload.task));
            }

            GiraAction::Delete { id, yes } => {
                let gira = client.get_gira(id)?;
                if !*yes
                    && !ask_confirmation(&format!(
                        "Delete trip '{}' ({})? This action is irreversible.",
                        gira.task,
                        gira.usuario.full_name()
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }
                client.delete_gira(id)?;
                success(format!("Gira '{}' eliminada.", gira.task));
            }
        }
    }
    Ok(())
}

/// Overlay the flags given on the command line onto `p`.
fn apply_fields(mut p: GiraPayload, f: &GiraFields) -> AppResult<GiraPayload> {
    if let Some(v) = &f.task {
        p.task = v.clone();
    }
    if let Some(v) = &f.usuario {
        p.usuario = v.clone();
    }
    if let Some(v) = &f.motivo {
        p.motivo = v.clone();
    }
    if let Some(v) = &f.comentario {
        p.comentario = v.clone();
    }
    if let Some(v) = &f.semana {
        p.semana = v.clone();
    }
    if let Some(v) = &f.unidad_negocio {
        p.unidad_negocio = v.clone();
    }
    if let Some(v) = &f.task_gira {
        p.task_gira = v.clone();
    }
    if let Some(e) = parse_flag(f.estado.as_deref(), "estado", ESTADOS, GiraEstado::parse)? {
        p.estado = e;
    }
    if let Some(v) = &f.lugar {
        p.lugar = v.clone();
    }
    if let Some(d) = &f.fecha_inicio {
        p.fecha_inicio = Some(local_midnight(parse_date(d)?)?);
    }
    if let Some(d) = &f.fecha_fin {
        p.fecha_fin = Some(local_midnight(parse_date(d)?)?);
    }
    if let Some(v) = f.monto_soles {
        p.monto_soles = v;
    }
    if let Some(v) = f.monto_dolares {
        p.monto_dolares = v;
    }
    if let Some(v) = f.active {
        p.active = v;
    }
    Ok(p)
}

fn print_gira(g: &Gira) {
    header(format!("Gira {}", g.task));
    detail("ID", &g.id);
    detail("Usuario", g.usuario.full_name());
    detail("Motivo", or_dash(&g.motivo));
    detail("Comentario", or_dash(&g.comentario));
    detail("Unidad de negocio", or_dash(&g.unidad_negocio));
    detail("Task gira", or_dash(&g.task_gira));
    detail("Lugar", g.lugar.as_deref().unwrap_or("-"));
    detail("Semana", or_dash(&g.semana));
    detail("Inicio", fmt_date(&g.fecha_inicio));
    detail("Fin", fmt_date(&g.fecha_fin));
    detail("Estado", gira_estado(g.estado));
    detail("Activa", yes_no(g.active, "sí", "no"));
    detail("Monto soles", soles(g.monto_soles));
    detail("Monto dólares", dolares(g.monto_dolares));
}
