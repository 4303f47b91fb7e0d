#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rgiras::models::asistencia::Asistencia;
use rgiras::models::gasto::Gasto;
use rgiras::models::gira::Gira;
use rgiras::models::incidencia::Incidencia;
use rgiras::models::usuario::Usuario;
use serde_json::{Value, json};
use tempfile::TempDir;

pub fn rgiras() -> Command {
    cargo_bin_cmd!("rgiras")
}

/// Fresh config directory, removed when the guard drops.
pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// `rgiras --home <dir>` with logs kept inside the temp dir.
pub fn rgiras_in(home: &TempDir) -> Command {
    let mut cmd = rgiras();
    cmd.arg("--home").arg(home.path()).env_remove("RUST_LOG");
    cmd
}

pub fn usuario_ref(id: &str, nombre: &str, apellido: &str) -> Value {
    json!({ "_id": id, "nombre": nombre, "apellido": apellido })
}

pub fn sede_json(id: &str, lat: f64, lon: f64, radio: f64) -> Value {
    json!({
        "_id": id,
        "nombre": format!("Sede {id}"),
        "direccion": "Av. Arequipa 123, Lima",
        "latitude": lat,
        "longitude": lon,
        "radio": radio
    })
}

pub fn usuario(id: &str, nombre: &str, apellido: &str, active: bool, areas: &[&str]) -> Usuario {
    serde_json::from_value(json!({
        "_id": id,
        "nombre": nombre,
        "apellido": apellido,
        "dni": "12345678",
        "cargo": "Analista",
        "area": areas,
        "correo": format!("{}@empresa.pe", nombre.to_lowercase()),
        "active": active
    }))
    .expect("usuario fixture")
}

#[allow(clippy::too_many_arguments)]
pub fn gira(
    id: &str,
    usuario_id: &str,
    motivo: &str,
    estado: &str,
    active: bool,
    inicio: &str,
    soles: f64,
    dolares: f64,
) -> Gira {
    serde_json::from_value(json!({
        "_id": id,
        "task": format!("T-{id}"),
        "usuario": usuario_ref(usuario_id, "Ana", "Quispe"),
        "motivo": motivo,
        "semana": "S12",
        "unidad_negocio": "Automatización",
        "active": active,
        "estado": estado,
        "lugar": "Arequipa",
        "fecha_inicio": format!("{inicio}T00:00:00.000Z"),
        "fecha_fin": format!("{inicio}T23:00:00.000Z"),
        "monto_soles": soles,
        "monto_dolares": dolares
    }))
    .expect("gira fixture")
}

#[allow(clippy::too_many_arguments)]
pub fn gasto(
    id: &str,
    gira_id: &str,
    tipo: &str,
    categoria: &str,
    total: f64,
    moneda: &str,
    fecha: &str,
    con_sustento: bool,
) -> Gasto {
    serde_json::from_value(json!({
        "_id": id,
        "tipo": tipo,
        "categoria": categoria,
        "ruc": "20123456789",
        "razon_social": "Restaurante El Puerto SAC",
        "fecha_emision": format!("{fecha}T12:00:00.000Z"),
        "total": total,
        "moneda": moneda,
        "igv": total * 0.18,
        "con_sustento": con_sustento,
        "descripcion": "Almuerzo de trabajo",
        "gira": { "_id": gira_id, "title": format!("Gira {gira_id}") }
    }))
    .expect("gasto fixture")
}

pub fn asistencia_json(
    id: &str,
    nombre: &str,
    sede: Value,
    entrada: (f64, f64),
    salida: Option<(f64, f64)>,
    valido_entrada: bool,
    valido_salida: Option<bool>,
) -> Value {
    let mut v = json!({
        "_id": id,
        "usuario": usuario_ref(&format!("u-{id}"), nombre, "Rojas"),
        "sede": sede,
        "entrada": "2025-03-03T13:00:00.000Z",
        "latitude_entrada": entrada.0,
        "longitude_entrada": entrada.1,
        "valido_entrada": valido_entrada
    });
    if let Some((lat, lon)) = salida {
        v["salida"] = json!("2025-03-03T22:00:00.000Z");
        v["latitude_salida"] = json!(lat);
        v["longitude_salida"] = json!(lon);
        v["horas_trabajadas"] = json!(9.0);
    }
    if let Some(valid) = valido_salida {
        v["valido_salida"] = json!(valid);
    }
    v
}

pub fn asistencia(v: Value) -> Asistencia {
    serde_json::from_value(v).expect("asistencia fixture")
}

pub fn incidencia(
    id: &str,
    tipo: &str,
    area: &str,
    severidad: &str,
    estado: &str,
    fecha: &str,
) -> Incidencia {
    serde_json::from_value(json!({
        "_id": id,
        "tipoIncidente": tipo,
        "descripcion": "Fuga detectada cerca de la válvula principal",
        "ubicacion": "Sector 4",
        "areaAfectada": area,
        "gradoSeveridad": severidad,
        "estado": estado,
        "fecha": format!("{fecha}T15:30:00.000Z")
    }))
    .expect("incidencia fixture")
}
