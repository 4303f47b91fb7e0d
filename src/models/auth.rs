use super::{Validate, require_id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: Option<String>,
    #[serde(default, alias = "email")]
    pub correo: Option<String>,
    #[serde(default)]
    pub rol: Option<String>,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.nombre, self.apellido.as_deref().unwrap_or(""));
        let full = full.trim();
        if full.is_empty() {
            self.correo.clone().unwrap_or_else(|| self.id.clone())
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

impl Validate for LoginResponse {
    const WHAT: &'static str = "login response";

    fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("empty token".to_string());
        }
        require_id(&self.user.id)
    }
}
