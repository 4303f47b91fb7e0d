use super::sede::Sede;
use super::usuario::UsuarioRef;
use super::{Validate, de_lenient_f64, de_lenient_opt_f64, require_id, require_non_negative};
use crate::core::geofence::{AttendanceCheck, GeoPoint};
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One check-in (and optional check-out) recorded by the mobile app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asistencia {
    #[serde(rename = "_id")]
    pub id: String,
    pub usuario: UsuarioRef,
    pub sede: Sede,
    pub entrada: DateTime<Utc>,
    #[serde(default)]
    pub salida: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de_lenient_f64")]
    pub latitude_entrada: f64,
    #[serde(deserialize_with = "de_lenient_f64")]
    pub longitude_entrada: f64,
    #[serde(default, deserialize_with = "de_lenient_opt_f64")]
    pub latitude_salida: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_opt_f64")]
    pub longitude_salida: Option<f64>,
    pub valido_entrada: bool,
    #[serde(default)]
    pub valido_salida: Option<bool>,
    #[serde(default)]
    pub horas_trabajadas: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Display state of an attendance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AsistenciaEstado {
    InvalidEntry,
    InvalidExit,
    InProgress,
    Valid,
}

impl AsistenciaEstado {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsistenciaEstado::InvalidEntry => "invalid-entry",
            AsistenciaEstado::InvalidExit => "invalid-exit",
            AsistenciaEstado::InProgress => "in-progress",
            AsistenciaEstado::Valid => "valid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AsistenciaEstado::InvalidEntry => "Entrada inválida",
            AsistenciaEstado::InvalidExit => "Salida inválida",
            AsistenciaEstado::InProgress => "En curso",
            AsistenciaEstado::Valid => "Válida",
        }
    }
}

impl Asistencia {
    pub fn entry_point(&self) -> AppResult<GeoPoint> {
        GeoPoint::new(self.latitude_entrada, self.longitude_entrada)
    }

    /// Exit point, only when both exit coordinates were recorded.
    pub fn exit_point(&self) -> AppResult<Option<GeoPoint>> {
        match (self.latitude_salida, self.longitude_salida) {
            (Some(lat), Some(lon)) => Ok(Some(GeoPoint::new(lat, lon)?)),
            _ => Ok(None),
        }
    }

    pub fn has_exit(&self) -> bool {
        self.salida.is_some()
    }

    /// Stored flags say the record is valid: entry valid and exit not
    /// explicitly invalid.
    pub fn is_valid(&self) -> bool {
        self.valido_entrada && self.valido_salida != Some(false)
    }

    pub fn estado(&self) -> AsistenciaEstado {
        if !self.valido_entrada {
            AsistenciaEstado::InvalidEntry
        } else if self.has_exit() && self.valido_salida == Some(false) {
            AsistenciaEstado::InvalidExit
        } else if !self.has_exit() {
            AsistenciaEstado::InProgress
        } else {
            AsistenciaEstado::Valid
        }
    }

    /// Recompute distances against the embedded site.
    pub fn recompute(&self) -> AppResult<AttendanceCheck> {
        let fence = self.sede.geofence()?;
        Ok(AttendanceCheck::evaluate(
            &fence,
            self.entry_point()?,
            self.exit_point()?,
        ))
    }

    /// Which stored flags the recomputed verdict contradicts. An exit with
    /// no stored flag is never a mismatch.
    pub fn mismatch(&self, check: &AttendanceCheck) -> Mismatch {
        Mismatch {
            entry: check.entry.inside != self.valido_entrada,
            exit: matches!(
                (check.exit, self.valido_salida),
                (Some(exit), Some(stored)) if exit.inside != stored
            ),
        }
    }

    /// True when a recomputed verdict disagrees with the stored flag.
    pub fn disagrees_with(&self, check: &AttendanceCheck) -> bool {
        self.mismatch(check).any()
    }
}

/// Entry and exit are compared independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mismatch {
    pub entry: bool,
    pub exit: bool,
}

impl Mismatch {
    pub fn any(&self) -> bool {
        self.entry || self.exit
    }
}

impl Validate for Asistencia {
    const WHAT: &'static str = "attendance record";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        self.usuario.validate()?;
        self.sede.validate()?;
        self.entry_point()
            .map_err(|e| format!("record {}: entry {e}", self.id))?;
        if self.latitude_salida.is_some() != self.longitude_salida.is_some() {
            return Err(format!("record {}: exit has only one coordinate", self.id));
        }
        self.exit_point()
            .map_err(|e| format!("record {}: exit {e}", self.id))?;
        if let Some(salida) = self.salida
            && salida < self.entrada
        {
            return Err(format!("record {}: check-out before check-in", self.id));
        }
        if let Some(h) = self.horas_trabajadas {
            require_non_negative("horas_trabajadas", h)?;
        }
        Ok(())
    }
}
