use super::{Validate, require_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User summary embedded in trips, attendance and incidents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsuarioRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub cargo: Option<String>,
}

impl UsuarioRef {
    /// "nombre apellido", trimmed when the surname is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido.as_deref().unwrap_or(""))
            .trim()
            .to_string()
    }
}

impl Validate for UsuarioRef {
    const WHAT: &'static str = "user";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)
    }
}

/// Full user record from `/api/usuarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub dni: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub area: Vec<String>,
    #[serde(default)]
    pub celular: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub sede: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Usuario {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }

    /// Area list shortened to two entries plus a "(+n)" counter.
    pub fn areas_label(&self) -> String {
        match self.area.len() {
            0 => "-".to_string(),
            1 | 2 => self.area.join(", "),
            n => format!("{}... (+{})", self.area[..2].join(", "), n - 2),
        }
    }
}

impl Validate for Usuario {
    const WHAT: &'static str = "user";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        if self.nombre.trim().is_empty() {
            return Err(format!("user {} has no name", self.id));
        }
        Ok(())
    }
}

/// Body for `POST`/`PUT /api/usuarios`. The password is omitted on edit
/// when not changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsuarioPayload {
    pub photo: String,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub cargo: String,
    pub area: Vec<String>,
    pub celular: String,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub active: bool,
    pub sede: String,
}

impl From<&Usuario> for UsuarioPayload {
    fn from(u: &Usuario) -> Self {
        Self {
            photo: u.photo.clone().unwrap_or_default(),
            nombre: u.nombre.clone(),
            apellido: u.apellido.clone(),
            dni: u.dni.clone(),
            cargo: u.cargo.clone(),
            area: u.area.clone(),
            celular: u.celular.clone(),
            correo: u.correo.clone(),
            password: None,
            active: u.active,
            sede: u.sede.clone().unwrap_or_default(),
        }
    }
}

/// Areas offered by the user form.
pub const AREAS: &[&str] = &[
    "Dirección General",
    "Contabilidad",
    "Servicio Post Venta",
    "Proyectos",
    "Ventas Norte",
    "Ventas Lima",
    "Ventas Internas",
    "Ventas",
    "Ventas Comercial",
    "Marketing",
    "Administración",
    "Sistemas",
    "Almacén",
    "Gerencia",
    "Facturación",
    "Cobranzas",
    "Operaciones",
    "RRHH",
    "TI",
    "Compras",
    "Servicio Técnico",
    "Automatización",
    "Proyectos Especiales",
    "Asistencia",
];
