// src/export/model.rs

use crate::models::asistencia::Asistencia;
use crate::models::gasto::Gasto;
use crate::models::gira::Gira;
use crate::models::incidencia::Incidencia;
use crate::utils::formatting::or_dash;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A record that can be flattened into one export row.
pub trait Exportable: Serialize {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// "YYYY-MM-DD HH:MM", a shape the XLSX writer turns into a real date.
fn ts(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn opt_ts(dt: &Option<DateTime<Utc>>) -> String {
    dt.as_ref().map(ts).unwrap_or_default()
}

fn num(v: f64) -> String {
    format!("{v:.2}")
}

/// Rows ready for any format, plus the records for JSON.
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub records: serde_json::Value,
}

impl ExportTable {
    pub fn from_records<T: Exportable>(title: &str, records: &[T]) -> Self {
        Self {
            title: title.to_string(),
            headers: T::HEADERS.to_vec(),
            rows: records.iter().map(Exportable::row).collect(),
            // records are plain data; serialization only fails on non-string map keys
            records: serde_json::to_value(records).unwrap_or(serde_json::Value::Null),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Exportable for Asistencia {
    const HEADERS: &'static [&'static str] = &[
        "usuario",
        "sede",
        "entrada",
        "salida",
        "lat_entrada",
        "lon_entrada",
        "lat_salida",
        "lon_salida",
        "valido_entrada",
        "valido_salida",
        "distancia_entrada_m",
        "distancia_salida_m",
        "horas",
        "estado",
    ];

    fn row(&self) -> Vec<String> {
        let check = self.recompute().ok();
        vec![
            self.usuario.full_name(),
            self.sede.nombre.clone(),
            ts(&self.entrada),
            opt_ts(&self.salida),
            self.latitude_entrada.to_string(),
            self.longitude_entrada.to_string(),
            self.latitude_salida.map(|v| v.to_string()).unwrap_or_default(),
            self.longitude_salida.map(|v| v.to_string()).unwrap_or_default(),
            self.valido_entrada.to_string(),
            self.valido_salida.map(|v| v.to_string()).unwrap_or_default(),
            check.map(|c| c.entry.distance_m.to_string()).unwrap_or_default(),
            check
                .and_then(|c| c.exit)
                .map(|e| e.distance_m.to_string())
                .unwrap_or_default(),
            self.horas_trabajadas.map(num).unwrap_or_default(),
            self.estado().as_str().to_string(),
        ]
    }
}

impl Exportable for Gasto {
    const HEADERS: &'static [&'static str] = &[
        "fecha_emision",
        "tipo",
        "categoria",
        "ruc",
        "razon_social",
        "descripcion",
        "moneda",
        "total",
        "igv",
        "con_sustento",
        "modificado",
        "gira",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            ts(&self.fecha_emision),
            self.tipo.as_str().to_string(),
            or_dash(&self.categoria),
            self.ruc.clone(),
            self.razon_social.clone(),
            self.descripcion.clone(),
            self.moneda.as_str().to_string(),
            num(self.total),
            num(self.igv),
            self.con_sustento.to_string(),
            self.modificado.to_string(),
            self.gira.title.clone(),
        ]
    }
}

impl Exportable for Gira {
    const HEADERS: &'static [&'static str] = &[
        "task",
        "usuario",
        "motivo",
        "unidad_negocio",
        "lugar",
        "semana",
        "estado",
        "activa",
        "fecha_inicio",
        "fecha_fin",
        "monto_soles",
        "monto_dolares",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.task.clone(),
            self.usuario.full_name(),
            self.motivo.clone(),
            self.unidad_negocio.clone(),
            self.lugar.clone().unwrap_or_default(),
            self.semana.clone(),
            self.estado.as_str().to_string(),
            self.active.to_string(),
            ts(&self.fecha_inicio),
            ts(&self.fecha_fin),
            num(self.monto_soles),
            num(self.monto_dolares),
        ]
    }
}

impl Exportable for Incidencia {
    const HEADERS: &'static [&'static str] = &[
        "fecha",
        "tipo",
        "area",
        "ubicacion",
        "severidad",
        "estado",
        "reportado_por",
        "asignado_a",
        "fecha_limite",
        "descripcion",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            ts(&self.fecha),
            self.tipo_incidente.clone(),
            self.area_afectada.clone(),
            self.ubicacion.clone(),
            self.grado_severidad.as_str().to_string(),
            self.estado.as_str().to_string(),
            self.user.as_ref().map(|u| u.full_name()).unwrap_or_default(),
            self.asigned.as_ref().map(|u| u.full_name()).unwrap_or_default(),
            opt_ts(&self.deadline),
            self.descripcion.clone(),
        ]
    }
}
