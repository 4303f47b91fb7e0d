//! Form checks run before any request is sent. Every failing field is
//! reported at once.

use crate::core::geofence::GeoPoint;
use crate::errors::{AppError, AppResult, FieldError};
use crate::models::auth::LoginRequest;
use crate::models::gira::GiraPayload;
use crate::models::incidencia::IncidenciaEstado;
use crate::models::sede::SedePayload;
use crate::models::usuario::UsuarioPayload;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static DNI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}$").expect("dni pattern"));
static CELULAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{9}$").expect("celular pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Collects field errors and turns them into a single result.
#[derive(Debug, Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: &'static str, message: &str) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Returns true when the field is present.
    fn required(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.fail(field, message);
            false
        } else {
            true
        }
    }

    fn finish(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

pub fn validate_login(req: &LoginRequest) -> AppResult<()> {
    let mut c = Checker::default();

    if c.required("email", &req.email, "El correo electrónico es requerido")
        && !is_email(req.email.trim())
    {
        c.fail("email", "Ingresa un correo electrónico válido");
    }

    if req.password.is_empty() {
        c.fail("password", "La contraseña es requerida");
    } else if req.password.chars().count() < MIN_PASSWORD_LEN {
        c.fail(
            "password",
            "La contraseña debe tener al menos 6 caracteres",
        );
    }

    c.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

pub fn validate_usuario(u: &UsuarioPayload, mode: FormMode) -> AppResult<()> {
    let mut c = Checker::default();

    c.required("nombre", &u.nombre, "El nombre es requerido");
    c.required("apellido", &u.apellido, "El apellido es requerido");

    if c.required("dni", &u.dni, "El DNI es requerido") && !DNI_RE.is_match(u.dni.trim()) {
        c.fail("dni", "El DNI debe tener 8 dígitos");
    }

    if !u.celular.trim().is_empty() && !CELULAR_RE.is_match(u.celular.trim()) {
        c.fail("celular", "El celular debe tener 9 dígitos");
    }

    if c.required("correo", &u.correo, "El correo es requerido") && !is_email(u.correo.trim()) {
        c.fail("correo", "El correo no es válido");
    }

    match (&u.password, mode) {
        (None, FormMode::Create) => c.fail("password", "La contraseña es requerida"),
        (Some(p), FormMode::Create) if p.is_empty() => {
            c.fail("password", "La contraseña es requerida")
        }
        (Some(p), _) if !p.is_empty() && p.chars().count() < MIN_PASSWORD_LEN => c.fail(
            "password",
            "La contraseña debe tener al menos 6 caracteres",
        ),
        _ => {}
    }

    c.required("cargo", &u.cargo, "El cargo es requerido");

    if u.area.iter().all(|a| a.trim().is_empty()) {
        c.fail("area", "Debe seleccionar al menos un área");
    }

    c.finish()
}

pub fn validate_gira(g: &GiraPayload) -> AppResult<()> {
    let mut c = Checker::default();

    c.required("task", &g.task, "El Task ID es requerido");
    c.required("semana", &g.semana, "La semana es requerida");
    c.required("usuario", &g.usuario, "El usuario es requerido");
    c.required(
        "unidad_negocio",
        &g.unidad_negocio,
        "La unidad de negocio es requerida",
    );
    c.required("lugar", &g.lugar, "El lugar es requerido");
    c.required("motivo", &g.motivo, "El motivo es requerido");

    match (g.fecha_inicio, g.fecha_fin) {
        (None, fin) => {
            c.fail("fecha_inicio", "La fecha de inicio es requerida");
            if fin.is_none() {
                c.fail("fecha_fin", "La fecha de fin es requerida");
            }
        }
        (Some(_), None) => c.fail("fecha_fin", "La fecha de fin es requerida"),
        (Some(inicio), Some(fin)) if fin <= inicio => c.fail(
            "fecha_fin",
            "La fecha de fin debe ser posterior a la fecha de inicio",
        ),
        _ => {}
    }

    if !g.monto_soles.is_finite() || g.monto_soles < 0.0 {
        c.fail("monto_soles", "El monto no puede ser negativo");
    }
    if !g.monto_dolares.is_finite() || g.monto_dolares < 0.0 {
        c.fail("monto_dolares", "El monto no puede ser negativo");
    }

    c.finish()
}

pub fn validate_sede(s: &SedePayload) -> AppResult<()> {
    let mut c = Checker::default();

    c.required("nombre", &s.nombre, "Complete todos los campos requeridos");
    c.required("direccion", &s.direccion, "Complete todos los campos requeridos");

    // unset coordinates arrive as NaN
    if !s.latitude.is_finite() || !s.longitude.is_finite() {
        c.fail("coordenadas", "Seleccione una ubicación para la sede");
    } else if let Err(e) = GeoPoint::new(s.latitude, s.longitude) {
        c.fail("coordenadas", &e.to_string());
    }

    if !s.radio.is_finite() || s.radio <= 0.0 {
        c.fail("radio", "El radio debe ser mayor a 0 metros");
    }

    c.finish()
}

/// State change requested for an incident. The state must be one of the
/// four known values and the deadline, when given, a `YYYY-MM-DD` date.
pub fn validate_incidencia_update(
    estado: &str,
    deadline: Option<&str>,
) -> AppResult<(IncidenciaEstado, Option<NaiveDate>)> {
    let mut c = Checker::default();

    let parsed = IncidenciaEstado::parse(estado);
    if parsed.is_none() {
        c.fail(
            "estado",
            "Debe ser Pendiente, En Revisión, Resuelto o Cerrado",
        );
    }

    let day = match deadline.map(str::trim).filter(|d| !d.is_empty()) {
        None => None,
        Some(d) => match NaiveDate::parse_from_str(d, "%Y-%m-%d") {
            Ok(day) => Some(day),
            Err(_) => {
                c.fail("deadline", "La fecha límite debe tener formato YYYY-MM-DD");
                None
            }
        },
    };

    match (c.finish(), parsed) {
        (Ok(()), Some(estado)) => Ok((estado, day)),
        (Err(e), _) => Err(e),
        (Ok(()), None) => Err(AppError::Validation(vec![FieldError::new(
            "estado",
            "Estado desconocido",
        )])),
    }
}
