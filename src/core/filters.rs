//! Client-side list filters.
//!
//! Each filter is a conjunction of independent predicates. An unset
//! predicate (`None`, empty search) matches every record.

use crate::errors::{AppError, AppResult};
use crate::models::asistencia::Asistencia;
use crate::models::gasto::{Gasto, Moneda, TipoGasto};
use crate::models::gira::{Gira, GiraEstado};
use crate::models::incidencia::{Incidencia, IncidenciaEstado, Severidad};
use crate::models::sede::Sede;
use crate::models::usuario::Usuario;
use crate::utils::date::day_in;
use chrono::{Datelike, Local, NaiveDate, TimeZone};

pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;

    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Case-insensitive substring test. An empty needle always matches.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn opt_eq<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
    wanted.as_ref().is_none_or(|w| w == actual)
}

// ---------------------------
// Giras
// ---------------------------

#[derive(Debug, Clone, Default)]
pub struct GiraFilter {
    pub search: String,
    pub estado: Option<GiraEstado>,
    pub unidad_negocio: Option<String>,
}

impl Filter<Gira> for GiraFilter {
    fn matches(&self, g: &Gira) -> bool {
        let s = self.search.as_str();
        let text = contains_ci(&g.motivo, s)
            || contains_ci(&g.task, s)
            || contains_ci(&g.usuario.nombre, s)
            || contains_ci(g.usuario.apellido.as_deref().unwrap_or(""), s)
            || contains_ci(&g.unidad_negocio, s)
            || contains_ci(g.lugar.as_deref().unwrap_or(""), s);

        text && opt_eq(&self.estado, &g.estado) && opt_eq(&self.unidad_negocio, &g.unidad_negocio)
    }
}

// ---------------------------
// Gastos
// ---------------------------

#[derive(Debug, Clone, Default)]
pub struct GastoFilter {
    pub search: String,
    pub tipo: Option<TipoGasto>,
    pub categoria: Option<String>,
    pub moneda: Option<Moneda>,
    pub gira: Option<String>,
}

impl Filter<Gasto> for GastoFilter {
    fn matches(&self, g: &Gasto) -> bool {
        let s = self.search.as_str();
        // RUC is digits; matched verbatim
        let text = contains_ci(&g.razon_social, s)
            || g.ruc.contains(s)
            || contains_ci(&g.descripcion, s)
            || contains_ci(&g.gira.title, s);

        text && opt_eq(&self.tipo, &g.tipo)
            && opt_eq(&self.categoria, &g.categoria)
            && opt_eq(&self.moneda, &g.moneda)
            && opt_eq(&self.gira, &g.gira.id)
    }
}

// ---------------------------
// Usuarios
// ---------------------------

#[derive(Debug, Clone, Default)]
pub struct UsuarioFilter {
    pub search: String,
    pub active: Option<bool>,
    pub area: Option<String>,
}

impl Filter<Usuario> for UsuarioFilter {
    fn matches(&self, u: &Usuario) -> bool {
        let s = self.search.as_str();
        let text = contains_ci(&u.full_name(), s)
            || contains_ci(&u.correo, s)
            || contains_ci(&u.dni, s)
            || contains_ci(&u.cargo, s);

        text && opt_eq(&self.active, &u.active)
            && self
                .area
                .as_ref()
                .is_none_or(|a| u.area.iter().any(|x| x == a))
    }
}

// ---------------------------
// Asistencias
// ---------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidityScope {
    #[default]
    Todos,
    Validas,
    Invalidas,
}

impl ValidityScope {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "todos" | "all" => Some(ValidityScope::Todos),
            "validas" | "válidas" | "valid" => Some(ValidityScope::Validas),
            "invalidas" | "inválidas" | "invalid" => Some(ValidityScope::Invalidas),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AsistenciaFilter {
    pub search: String,
    pub estado: ValidityScope,
    /// Site id.
    pub sede: Option<String>,
}

impl Filter<Asistencia> for AsistenciaFilter {
    fn matches(&self, a: &Asistencia) -> bool {
        let text = contains_ci(&a.usuario.full_name(), &self.search);
        let estado = match self.estado {
            ValidityScope::Todos => true,
            ValidityScope::Validas => a.is_valid(),
            ValidityScope::Invalidas => !a.is_valid(),
        };
        text && estado && opt_eq(&self.sede, &a.sede.id)
    }
}

// ---------------------------
// Sedes
// ---------------------------

#[derive(Debug, Clone, Default)]
pub struct SedeFilter {
    pub search: String,
}

impl Filter<Sede> for SedeFilter {
    fn matches(&self, s: &Sede) -> bool {
        contains_ci(&s.nombre, &self.search) || contains_ci(&s.direccion, &self.search)
    }
}

/// Distinct sites referenced by a day's attendance, in first-seen order.
pub fn sedes_of(asistencias: &[Asistencia]) -> Vec<&Sede> {
    let mut out: Vec<&Sede> = Vec::new();
    for a in asistencias {
        if !out.iter().any(|s| s.id == a.sede.id) {
            out.push(&a.sede);
        }
    }
    out
}

// ---------------------------
// Incidencias
// ---------------------------

/// Date presets of the incident list. Weeks start on Monday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateWindow {
    #[default]
    Todas,
    Hoy,
    Semana,
    Mes,
    Rango(NaiveDate, NaiveDate),
}

impl DateWindow {
    /// Build a window from the preset name and optional `from`/`to` bounds.
    pub fn from_args(
        preset: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<Self> {
        match preset.map(|p| p.trim().to_lowercase()).as_deref() {
            None | Some("todas") | Some("all") => match (from, to) {
                (Some(f), Some(t)) => Ok(DateWindow::Rango(f, t)),
                (None, None) => Ok(DateWindow::Todas),
                _ => Err(AppError::InvalidDate(
                    "a range needs both --from and --to".into(),
                )),
            },
            Some("hoy") | Some("today") => Ok(DateWindow::Hoy),
            Some("semana") | Some("week") => Ok(DateWindow::Semana),
            Some("mes") | Some("month") => Ok(DateWindow::Mes),
            Some("rango") | Some("range") => match (from, to) {
                (Some(f), Some(t)) => Ok(DateWindow::Rango(f, t)),
                _ => Err(AppError::InvalidDate(
                    "a range needs both --from and --to".into(),
                )),
            },
            Some(other) => Err(AppError::InvalidDate(format!("unknown date preset '{other}'"))),
        }
    }

    /// Inclusive by day.
    pub fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            DateWindow::Todas => true,
            DateWindow::Hoy => day == today,
            DateWindow::Semana => day.iso_week() == today.iso_week(),
            DateWindow::Mes => day.year() == today.year() && day.month() == today.month(),
            DateWindow::Rango(from, to) => from <= day && day <= to,
        }
    }
}

/// Incident dates are windowed by their calendar day in `tz`, the zone
/// the list is read in.
#[derive(Debug, Clone)]
pub struct IncidenciaFilter<Tz: TimeZone = Local> {
    pub search: String,
    pub area: Option<String>,
    pub estado: Option<IncidenciaEstado>,
    pub severidad: Option<Severidad>,
    pub fecha: DateWindow,
    /// Reference day for the relative presets.
    pub today: NaiveDate,
    pub tz: Tz,
}

impl<Tz: TimeZone> IncidenciaFilter<Tz> {
    pub fn in_zone(today: NaiveDate, tz: Tz) -> Self {
        Self {
            search: String::new(),
            area: None,
            estado: None,
            severidad: None,
            fecha: DateWindow::Todas,
            today,
            tz,
        }
    }
}

impl<Tz: TimeZone> Filter<Incidencia> for IncidenciaFilter<Tz> {
    fn matches(&self, i: &Incidencia) -> bool {
        let s = self.search.as_str();
        let text = contains_ci(&i.tipo_incidente, s)
            || contains_ci(&i.ubicacion, s)
            || contains_ci(&i.descripcion, s);

        text && opt_eq(&self.area, &i.area_afectada)
            && opt_eq(&self.estado, &i.estado)
            && opt_eq(&self.severidad, &i.grado_severidad)
            && self.fecha.contains(day_in(&i.fecha, &self.tz), self.today)
    }
}
