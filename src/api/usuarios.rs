use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::usuario::{Usuario, UsuarioPayload};
use tracing::info;

impl ApiClient {
    pub fn list_usuarios(&self) -> AppResult<Vec<Usuario>> {
        self.get(self.url("usuarios")?)
    }

    pub fn get_usuario(&self, id: &str) -> AppResult<Usuario> {
        self.list_usuarios()?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(format!("usuario {id}")))
    }

    pub fn create_usuario(&self, payload: &UsuarioPayload) -> AppResult<()> {
        self.post_unit(self.url("usuarios")?, payload)?;
        info!("usuario {} created", payload.correo);
        Ok(())
    }

    pub fn update_usuario(&self, id: &str, payload: &UsuarioPayload) -> AppResult<()> {
        self.put(self.url(&format!("usuarios/{id}"))?, payload)?;
        info!("usuario {id} updated");
        Ok(())
    }

    pub fn delete_usuario(&self, id: &str) -> AppResult<()> {
        self.delete(self.url(&format!("usuarios/{id}"))?)?;
        info!("usuario {id} deleted");
        Ok(())
    }
}
