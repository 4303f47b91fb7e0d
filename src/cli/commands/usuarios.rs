use super::{ask_confirmation, authed_client, page_footer, paginate};
use crate::cli::parser::{Commands, UsuarioAction, UsuarioFields};
use crate::config::Config;
use crate::core::filters::{Filter, UsuarioFilter};
use crate::core::stats::UsuarioStats;
use crate::core::validation::{FormMode, validate_usuario};
use crate::errors::AppResult;
use crate::models::usuario::{AREAS, Usuario, UsuarioPayload};
use crate::ui::messages::{detail, header, info, success};
use crate::utils::colors::yes_no;
use crate::utils::date::fmt_date;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Usuarios { action } = cmd {
        if let UsuarioAction::Areas = action {
            for a in AREAS {
                println!("{a}");
            }
            return Ok(());
        }

        let client = authed_client(cfg)?;

        match action {
            UsuarioAction::List {
                search,
                active,
                area,
                paging,
            } => {
                let filter = UsuarioFilter {
                    search: search.clone(),
                    active: *active,
                    area: area.clone(),
                };

                let usuarios = client.list_usuarios()?;
                let matching = filter.apply(&usuarios);
                let stats = UsuarioStats::compute(matching.iter().copied());
                let page = paginate(matching, paging, cfg);

                header("Usuarios");
                if page.is_empty() {
                    info("No users match the current filters.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("ID"),
                        Column::new("Nombre").max(26),
                        Column::new("DNI"),
                        Column::new("Correo").max(30),
                        Column::new("Cargo").max(18),
                        Column::new("Áreas").max(30),
                        Column::new("Estado"),
                    ]);
                    for u in &page.items {
                        t.add_row(vec![
                            u.id.clone(),
                            u.full_name(),
                            or_dash(&u.dni),
                            or_dash(&u.correo),
                            or_dash(&u.cargo),
                            u.areas_label(),
                            yes_no(u.active, "activo", "inactivo"),
                        ]);
                    }
                    print!("{}", t.render());
                    page_footer(&page);
                }

                println!();
                detail("Total", stats.total);
                detail("Activos", stats.activos);
                detail("Inactivos", stats.inactivos);
            }

            UsuarioAction::Show { id } => print_usuario(&client.get_usuario(id)?),

            UsuarioAction::Add { fields } => {
                let base = UsuarioPayload {
                    active: true,
                    ..UsuarioPayload::default()
                };
                let payload = apply_fields(base, fields);
                validate_usuario(&payload, FormMode::Create)?;
                client.create_usuario(&payload)?;
                success(format!("Usuario {} {} creado.", payload.nombre, payload.apellido));
            }

            UsuarioAction::Edit { id, fields } => {
                let current = client.get_usuario(id)?;
                let payload = apply_fields(UsuarioPayload::from(&current), fields);
                validate_usuario(&payload, FormMode::Edit)?;
                client.update_usuario(id, &payload)?;
                success(format!("Usuario {} {} actualizado.", payload.nombre, payload.apellido));
            }

            UsuarioAction::Delete { id, yes } => {
                let usuario = client.get_usuario(id)?;
                if !*yes
                    && !ask_confirmation(&format!(
                        "Delete user '{}'? This action is irreversible.",
                        usuario.full_name()
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }
                client.delete_usuario(id)?;
                success(format!("Usuario {} eliminado.", usuario.full_name()));
            }

            UsuarioAction::Areas => {}
        }
    }
    Ok(())
}

fn apply_fields(mut p: UsuarioPayload, f: &UsuarioFields) -> UsuarioPayload {
    let set = |dst: &mut String, src: &Option<String>| {
        if let Some(v) = src {
            *dst = v.trim().to_string();
        }
    };
    set(&mut p.nombre, &f.nombre);
    set(&mut p.apellido, &f.apellido);
    set(&mut p.dni, &f.dni);
    set(&mut p.cargo, &f.cargo);
    set(&mut p.celular, &f.celular);
    set(&mut p.correo, &f.correo);
    set(&mut p.photo, &f.photo);
    set(&mut p.sede, &f.sede);

    if !f.area.is_empty() {
        p.area = f.area.iter().map(|a| a.trim().to_string()).collect();
    }
    // an empty --password on edit keeps the current one
    if let Some(pw) = f.password.as_ref().filter(|pw| !pw.is_empty()) {
        p.password = Some(pw.clone());
    }
    if let Some(v) = f.active {
        p.active = v;
    }
    p
}

fn print_usuario(u: &Usuario) {
    header(u.full_name());
    detail("ID", &u.id);
    detail("DNI", or_dash(&u.dni));
    detail("Correo", or_dash(&u.correo));
    detail("Celular", or_dash(&u.celular));
    detail("Cargo", or_dash(&u.cargo));
    detail("Áreas", if u.area.is_empty() { "-".to_string() } else { u.area.join(", ") });
    detail("Sede", u.sede.as_deref().unwrap_or("-"));
    detail("Estado", yes_no(u.active, "activo", "inactivo"));
    if let Some(created) = &u.created_at {
        detail("Registrado", fmt_date(created));
    }
}
