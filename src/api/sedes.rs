use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::sede::{Sede, SedePayload};
use tracing::info;

impl ApiClient {
    pub fn list_sedes(&self) -> AppResult<Vec<Sede>> {
        self.get(self.url("sedes")?)
    }

    pub fn get_sede(&self, id: &str) -> AppResult<Sede> {
        self.list_sedes()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("sede {id}")))
    }

    pub fn create_sede(&self, payload: &SedePayload) -> AppResult<()> {
        self.post_unit(self.url("sedes")?, payload)?;
        info!("sede '{}' created", payload.nombre);
        Ok(())
    }

    pub fn update_sede(&self, id: &str, payload: &SedePayload) -> AppResult<()> {
        self.put(self.url(&format!("sedes/{id}"))?, payload)?;
        info!("sede {id} updated");
        Ok(())
    }

    pub fn delete_sede(&self, id: &str) -> AppResult<()> {
        self.delete(self.url(&format!("sedes/{id}"))?)?;
        info!("sede {id} deleted");
        Ok(())
    }
}
