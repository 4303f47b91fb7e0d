//! Colors for state labels in tables.

use crate::models::asistencia::AsistenciaEstado;
use crate::models::gira::GiraEstado;
use crate::models::incidencia::{IncidenciaEstado, Severidad};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

pub const GREY: Colour = Colour::Fixed(244);

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ansi pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

pub fn paint(colour: Colour, s: &str) -> String {
    colour.paint(s).to_string()
}

pub fn gira_estado(e: GiraEstado) -> String {
    let c = match e {
        GiraEstado::Pendiente => Colour::Yellow,
        GiraEstado::EnProceso => Colour::Blue,
        GiraEstado::Completada => Colour::Green,
        GiraEstado::Cancelada => Colour::Red,
    };
    paint(c, e.as_str())
}

pub fn incidencia_estado(e: IncidenciaEstado) -> String {
    let c = match e {
        IncidenciaEstado::Pendiente => Colour::Yellow,
        IncidenciaEstado::EnRevision => Colour::Cyan,
        IncidenciaEstado::Resuelto => Colour::Green,
        IncidenciaEstado::Cerrado => GREY,
    };
    paint(c, e.as_str())
}

pub fn severidad(s: Severidad) -> String {
    let c = match s {
        Severidad::Bajo => Colour::Green,
        Severidad::Medio => Colour::Yellow,
        Severidad::Alto => Colour::RGB(255, 153, 51),
        Severidad::Critico => Colour::Red,
    };
    if s == Severidad::Critico {
        c.bold().paint(s.as_str()).to_string()
    } else {
        paint(c, s.as_str())
    }
}

pub fn asistencia_estado(e: AsistenciaEstado) -> String {
    let c = match e {
        AsistenciaEstado::InvalidEntry | AsistenciaEstado::InvalidExit => Colour::Red,
        AsistenciaEstado::InProgress => Colour::Yellow,
        AsistenciaEstado::Valid => Colour::Green,
    };
    paint(c, e.label())
}

pub fn yes_no(flag: bool, yes: &str, no: &str) -> String {
    if flag {
        paint(Colour::Green, yes)
    } else {
        paint(Colour::Red, no)
    }
}

/// Green when `ok`, red otherwise.
pub fn by_flag(ok: bool, s: &str) -> String {
    paint(if ok { Colour::Green } else { Colour::Red }, s)
}

/// Grey placeholder for a missing value.
pub fn missing() -> String {
    paint(GREY, "-")
}
