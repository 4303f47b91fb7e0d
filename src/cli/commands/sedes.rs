use super::{ask_confirmation, authed_client};
use crate::cli::parser::{Commands, SedeAction, SedeFields};
use crate::config::Config;
use crate::core::filters::{Filter, SedeFilter};
use crate::core::validation::validate_sede;
use crate::errors::AppResult;
use crate::models::sede::{Sede, SedePayload};
use crate::places::PlacesClient;
use crate::ui::messages::{detail, header, info, success};
use crate::utils::colors::yes_no;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};
use tracing::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sedes { action } = cmd {
        match action {
            SedeAction::Search { input } => return search(cfg, input),
            SedeAction::Place { place_id } => return place(cfg, place_id),
            _ => {}
        }

        let client = authed_client(cfg)?;

        match action {
            SedeAction::List { search } => {
                let filter = SedeFilter {
                    search: search.clone(),
                };
                let sedes = client.list_sedes()?;
                let matching = filter.apply(&sedes);

                header("Sedes");
                if matching.is_empty() {
                    info("No sites match the search.");
                    return Ok(());
                }
                let mut t = Table::new(vec![
                    Column::new("ID"),
                    Column::new("Nombre").max(24),
                    Column::new("Dirección").max(40),
                    Column::new("Latitud").right(),
                    Column::new("Longitud").right(),
                    Column::new("Radio").right(),
                    Column::new("Estado"),
                ]);
                for s in &matching {
                    t.add_row(vec![
                        s.id.clone(),
                        s.nombre.clone(),
                        or_dash(&s.direccion),
                        format!("{:.6}", s.latitude),
                        format!("{:.6}", s.longitude),
                        format!("{} m", s.radio),
                        yes_no(s.active, "activa", "inactiva"),
                    ]);
                }
                print!("{}", t.render());
                info(format!("{} of {} sites", matching.len(), sedes.len()));
            }

            SedeAction::Show { id } => print_sede(&client.get_sede(id)?),

            SedeAction::Add { fields } => {
                let base = SedePayload {
                    nombre: String::new(),
                    direccion: String::new(),
                    latitude: f64::NAN,
                    longitude: f64::NAN,
                    radio: cfg.default_radius,
                    active: true,
                };
                let payload = apply_fields(cfg, base, fields)?;
                validate_sede(&payload)?;
                client.create_sede(&payload)?;
                success(format!("Sede '{}' creada.", payload.nombre));
            }

            SedeAction::Edit { id, fields } => {
                let current = client.get_sede(id)?;
                let payload = apply_fields(cfg, SedePayload::from(&current), fields)?;
                validate_sede(&payload)?;
                client.update_sede(id, &payload)?;
                success(format!("Sede '{}' actualizada.", payload.nombre));
            }

            SedeAction::Delete { id, yes } => {
                let sede = client.get_sede(id)?;
                if !*yes
                    && !ask_confirmation(&format!(
                        "Delete site '{}'? This action is irreversible.",
                        sede.nombre
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }
                client.delete_sede(id)?;
                success(format!("Sede '{}' eliminada.", sede.nombre));
            }

            SedeAction::Search { .. } | SedeAction::Place { .. } => {}
        }
    }
    Ok(())
}

/// Overlay flags onto `p`. A place id fills address and coordinates
/// first; explicit `--direccion/--lat/--lon` still win.
fn apply_fields(cfg: &Config, mut p: SedePayload, f: &SedeFields) -> AppResult<SedePayload> {
    if let Some(place_id) = &f.place_id {
        let details = PlacesClient::new(cfg)?.details(place_id)?;
        debug!(place = %place_id, "site location from places");
        if p.nombre.trim().is_empty() {
            p.nombre = details.name;
        }
        p.direccion = details.address;
        p.latitude = details.location.lat();
        p.longitude = details.location.lon();
    }

    if let Some(v) = &f.nombre {
        p.nombre = v.trim().to_string();
    }
    if let Some(v) = &f.direccion {
        p.direccion = v.trim().to_string();
    }
    if let Some(v) = f.latitude {
        p.latitude = v;
    }
    if let Some(v) = f.longitude {
        p.longitude = v;
    }
    if let Some(v) = f.radio {
        p.radio = v;
    }
    if let Some(v) = f.active {
        p.active = v;
    }
    Ok(p)
}

fn search(cfg: &Config, input: &str) -> AppResult<()> {
    let suggestions = PlacesClient::new(cfg)?.autocomplete(input)?;

    if suggestions.is_empty() {
        info(format!("No places found for '{input}'."));
        return Ok(());
    }

    let mut t = Table::new(vec![Column::new("Place ID"), Column::new("Descripción").max(70)]);
    for s in &suggestions {
        t.add_row(vec![s.place_id.clone(), s.description.clone()]);
    }
    print!("{}", t.render());
    info("Use 'rgiras sedes add --place <id>' to create a site there.");
    Ok(())
}

fn place(cfg: &Config, place_id: &str) -> AppResult<()> {
    let d = PlacesClient::new(cfg)?.details(place_id)?;
    header(&d.name);
    detail("Dirección", &d.address);
    detail("Latitud", format!("{:.6}", d.location.lat()));
    detail("Longitud", format!("{:.6}", d.location.lon()));
    Ok(())
}

fn print_sede(s: &Sede) {
    header(format!("Sede {}", s.nombre));
    detail("ID", &s.id);
    detail("Dirección", or_dash(&s.direccion));
    detail("Coordenadas", format!("{:.6}, {:.6}", s.latitude, s.longitude));
    detail("Radio", format!("{} m", s.radio));
    detail("Estado", yes_no(s.active, "activa", "inactiva"));
}
