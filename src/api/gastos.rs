use super::ApiClient;
use crate::errors::AppResult;
use crate::models::gasto::Gasto;

impl ApiClient {
    /// `GET /gastos/gira/:giraId`
    pub fn list_gastos(&self, gira_id: &str) -> AppResult<Vec<Gasto>> {
        self.get(self.url(&format!("gastos/gira/{gira_id}"))?)
    }
}
