//! Typed records exchanged with the backend.
//!
//! Field names follow the backend's JSON (Spanish, `_id`, `createdAt`).
//! Every record that arrives over the network implements [`Validate`] so the
//! API layer can reject bodies that parse but make no sense.

pub mod asistencia;
pub mod auth;
pub mod gasto;
pub mod gira;
pub mod incidencia;
pub mod sede;
pub mod usuario;

use serde::{Deserialize, Deserializer};

/// Post-parse checks applied at the network boundary.
pub trait Validate {
    /// Human name of the record, used in error messages.
    const WHAT: &'static str;

    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    const WHAT: &'static str = T::WHAT;

    fn validate(&self) -> Result<(), String> {
        for (i, item) in self.iter().enumerate() {
            item.validate().map_err(|e| format!("item #{i}: {e}"))?;
        }
        Ok(())
    }
}

pub(crate) fn require_id(id: &str) -> Result<(), String> {
    if id.trim().is_empty() {
        Err("missing _id".to_string())
    } else {
        Ok(())
    }
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        Err(format!("{field} must be a non-negative number, got {value}"))
    } else {
        Ok(())
    }
}

/// Some endpoints send coordinates as strings ("-12.0464"), others as numbers.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got '{s}'"))),
    }
}

pub(crate) fn de_lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match Option::<NumOrStr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrStr::Num(n)) => Ok(Some(n)),
        Some(NumOrStr::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(NumOrStr::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got '{s}'"))),
    }
}
