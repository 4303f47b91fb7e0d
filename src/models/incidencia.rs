use super::usuario::UsuarioRef;
use super::{Validate, require_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidenciaEstado {
    Pendiente,
    #[serde(rename = "En Revisión")]
    EnRevision,
    Resuelto,
    Cerrado,
}

impl IncidenciaEstado {
    pub const ALL: [IncidenciaEstado; 4] = [
        IncidenciaEstado::Pendiente,
        IncidenciaEstado::EnRevision,
        IncidenciaEstado::Resuelto,
        IncidenciaEstado::Cerrado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidenciaEstado::Pendiente => "Pendiente",
            IncidenciaEstado::EnRevision => "En Revisión",
            IncidenciaEstado::Resuelto => "Resuelto",
            IncidenciaEstado::Cerrado => "Cerrado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "pendiente" => Some(IncidenciaEstado::Pendiente),
            "en revisión" | "en revision" | "revision" => Some(IncidenciaEstado::EnRevision),
            "resuelto" => Some(IncidenciaEstado::Resuelto),
            "cerrado" => Some(IncidenciaEstado::Cerrado),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severidad {
    Bajo,
    Medio,
    Alto,
    #[serde(rename = "Crítico")]
    Critico,
}

impl Severidad {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severidad::Bajo => "Bajo",
            Severidad::Medio => "Medio",
            Severidad::Alto => "Alto",
            Severidad::Critico => "Crítico",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bajo" => Some(Severidad::Bajo),
            "medio" => Some(Severidad::Medio),
            "alto" => Some(Severidad::Alto),
            "crítico" | "critico" => Some(Severidad::Critico),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorialEstado {
    pub estado: IncidenciaEstado,
    pub fecha: DateTime<Utc>,
    #[serde(default)]
    pub notas: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incidencia {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub tipo_incidente: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub ubicacion: String,
    #[serde(default)]
    pub area_afectada: String,
    pub grado_severidad: Severidad,
    pub estado: IncidenciaEstado,
    pub fecha: DateTime<Utc>,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default)]
    pub recomendacion: Option<String>,
    #[serde(default)]
    pub user: Option<UsuarioRef>,
    #[serde(default)]
    pub asigned: Option<UsuarioRef>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub historial_estados: Vec<HistorialEstado>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Validate for Incidencia {
    const WHAT: &'static str = "incident";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        if let Some(u) = &self.asigned {
            u.validate()
                .map_err(|e| format!("incident {}: assignee {e}", self.id))?;
        }
        Ok(())
    }
}

/// Paginated envelope returned by `GET /api/incidencias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidenciaPage {
    #[serde(default)]
    pub incidencias: Vec<Incidencia>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u64,
}

impl Validate for IncidenciaPage {
    const WHAT: &'static str = "incident page";

    fn validate(&self) -> Result<(), String> {
        self.incidencias.validate()?;
        if (self.incidencias.len() as u64) > self.total && self.total > 0 {
            return Err(format!(
                "page holds {} incidents but total is {}",
                self.incidencias.len(),
                self.total
            ));
        }
        Ok(())
    }
}

/// Body for `PUT /api/incidencias/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidenciaUpdate {
    pub estado: IncidenciaEstado,
    pub deadline: Option<DateTime<Utc>>,
    pub asigned: Option<String>,
    pub notas_estado: String,
}

/// Areas offered by the incident filters.
pub const AREAS_AFECTADAS: &[&str] = &[
    "Planta de Producción",
    "Almacén A",
    "Almacén B",
    "Zona de Desechos",
    "Línea de Ensamblaje 1",
    "Línea de Ensamblaje 2",
    "Línea de Ensamblaje 3",
    "Oficinas Administrativas",
];
