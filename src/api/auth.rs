use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::auth::{LoginRequest, LoginResponse};
use tracing::info;

impl ApiClient {
    /// `POST /auth/login`. 401 and 404 get login-specific messages.
    pub fn login(&self, req: &LoginRequest) -> AppResult<LoginResponse> {
        let url = self.url("auth/login")?;
        let resp: LoginResponse = self.post(url, req).map_err(|e| match e {
            AppError::Unauthorized => AppError::Api {
                status: 401,
                message: "Credenciales inválidas. Por favor, intenta nuevamente.".into(),
            },
            AppError::NotFound(_) => AppError::NotFound("Usuario no encontrado.".into()),
            other => other,
        })?;
        info!("logged in as {}", resp.user.id);
        Ok(resp)
    }
}
