use super::usuario::UsuarioRef;
use super::{Validate, require_id, require_non_negative};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GiraEstado {
    Pendiente,
    #[serde(rename = "En Proceso")]
    EnProceso,
    Completada,
    Cancelada,
}

impl GiraEstado {
    pub const ALL: [GiraEstado; 4] = [
        GiraEstado::Pendiente,
        GiraEstado::EnProceso,
        GiraEstado::Completada,
        GiraEstado::Cancelada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GiraEstado::Pendiente => "Pendiente",
            GiraEstado::EnProceso => "En Proceso",
            GiraEstado::Completada => "Completada",
            GiraEstado::Cancelada => "Cancelada",
        }
    }

    /// Accepts the label in any case, with space, dash or underscore.
    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "pendiente" => Some(GiraEstado::Pendiente),
            "en proceso" | "enproceso" => Some(GiraEstado::EnProceso),
            "completada" => Some(GiraEstado::Completada),
            "cancelada" => Some(GiraEstado::Cancelada),
            _ => None,
        }
    }
}

/// Trip summary embedded in expenses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GiraRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub task: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gira {
    #[serde(rename = "_id")]
    pub id: String,
    pub task: String,
    pub usuario: UsuarioRef,
    #[serde(default)]
    pub motivo: String,
    #[serde(default)]
    pub comentario: String,
    #[serde(default)]
    pub semana: String,
    #[serde(default)]
    pub unidad_negocio: String,
    #[serde(default)]
    pub task_gira: String,
    #[serde(default)]
    pub active: bool,
    pub estado: GiraEstado,
    #[serde(default)]
    pub lugar: Option<String>,
    pub fecha_inicio: DateTime<Utc>,
    pub fecha_fin: DateTime<Utc>,
    #[serde(default)]
    pub monto_soles: f64,
    #[serde(default)]
    pub monto_dolares: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Validate for Gira {
    const WHAT: &'static str = "trip";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        self.usuario
            .validate()
            .map_err(|e| format!("trip {}: {e}", self.id))?;
        require_non_negative("monto_soles", self.monto_soles)?;
        require_non_negative("monto_dolares", self.monto_dolares)?;
        if self.fecha_fin < self.fecha_inicio {
            return Err(format!("trip {}: fecha_fin before fecha_inicio", self.id));
        }
        Ok(())
    }
}

/// Body for `POST`/`PUT /api/giras`. `usuario` is the user id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiraPayload {
    pub task: String,
    pub usuario: String,
    pub motivo: String,
    pub comentario: String,
    pub semana: String,
    pub unidad_negocio: String,
    pub task_gira: String,
    pub active: bool,
    pub estado: GiraEstado,
    pub lugar: String,
    pub fecha_inicio: Option<DateTime<Utc>>,
    pub fecha_fin: Option<DateTime<Utc>>,
    pub monto_soles: f64,
    pub monto_dolares: f64,
}

impl Default for GiraPayload {
    fn default() -> Self {
        Self {
            task: String::new(),
            usuario: String::new(),
            motivo: String::new(),
            comentario: String::new(),
            semana: String::new(),
            unidad_negocio: String::new(),
            task_gira: String::new(),
            active: true,
            estado: GiraEstado::Pendiente,
            lugar: String::new(),
            fecha_inicio: None,
            fecha_fin: None,
            monto_soles: 0.0,
            monto_dolares: 0.0,
        }
    }
}

impl From<&Gira> for GiraPayload {
    fn from(g: &Gira) -> Self {
        Self {
            task: g.task.clone(),
            usuario: g.usuario.id.clone(),
            motivo: g.motivo.clone(),
            comentario: g.comentario.clone(),
            semana: g.semana.clone(),
            unidad_negocio: g.unidad_negocio.clone(),
            task_gira: g.task_gira.clone(),
            active: g.active,
            estado: g.estado,
            lugar: g.lugar.clone().unwrap_or_default(),
            fecha_inicio: Some(g.fecha_inicio),
            fecha_fin: Some(g.fecha_fin),
            monto_soles: g.monto_soles,
            monto_dolares: g.monto_dolares,
        }
    }
}
