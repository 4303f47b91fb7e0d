use super::{Validate, de_lenient_f64, require_id};
use crate::core::geofence::{GeoPoint, Geofence};
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered work site with its geofence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sede {
    #[serde(rename = "_id")]
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(deserialize_with = "de_lenient_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "de_lenient_f64")]
    pub longitude: f64,
    #[serde(deserialize_with = "de_lenient_f64")]
    pub radio: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Sede {
    pub fn center(&self) -> AppResult<GeoPoint> {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn geofence(&self) -> AppResult<Geofence> {
        Geofence::new(self.center()?, self.radio)
    }
}

impl Validate for Sede {
    const WHAT: &'static str = "site";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        self.geofence()
            .map(|_| ())
            .map_err(|e| format!("site '{}': {e}", self.nombre))
    }
}

/// Body for `POST`/`PUT /api/sedes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SedePayload {
    pub nombre: String,
    pub direccion: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radio: f64,
    pub active: bool,
}

impl From<&Sede> for SedePayload {
    fn from(s: &Sede) -> Self {
        Self {
            nombre: s.nombre.clone(),
            direccion: s.direccion.clone(),
            latitude: s.latitude,
            longitude: s.longitude,
            radio: s.radio,
            active: s.active,
        }
    }
}
