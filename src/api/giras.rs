use super::ApiClient;
use crate::errors::AppResult;
use crate::models::gira::{Gira, GiraPayload};
use tracing::info;

impl ApiClient {
    pub fn list_giras(&self) -> AppResult<Vec<Gira>> {
        self.get(self.url("giras")?)
    }

    /// The backend has no single-trip route; the list is filtered.
    pub fn get_gira(&self, id: &str) -> AppResult<Gira> {
        self.list_giras()?
            .into_iter()
            .find(|g| g.id == id)
            .ok_or_else(|| crate::errors::AppError::NotFound(format!("gira {id}")))
    }

    pub fn create_gira(&self, payload: &GiraPayload) -> AppResult<()> {
        self.post_unit(self.url("giras")?, payload)?;
        info!("gira '{}' created", payload.task);
        Ok(())
    }

    pub fn update_gira(&self, id: &str, payload: &GiraPayload) -> AppResult<()> {
        self.put(self.url(&format!("giras/{id}"))?, payload)?;
        info!("gira {id} updated");
        Ok(())
    }

    pub fn delete_gira(&self, id: &str) -> AppResult<()> {
        self.delete(self.url(&format!("giras/{id}"))?)?;
        info!("gira {id} deleted");
        Ok(())
    }
}
