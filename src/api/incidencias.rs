use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::incidencia::{Incidencia, IncidenciaEstado, IncidenciaPage, IncidenciaUpdate, Severidad};
use tracing::info;

/// Server-side filters of the incident list.
#[derive(Debug, Clone)]
pub struct IncidenciaQuery {
    pub page: usize,
    pub limit: usize,
    pub estado: Option<IncidenciaEstado>,
    pub severidad: Option<Severidad>,
}

impl Default for IncidenciaQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            estado: None,
            severidad: None,
        }
    }
}

impl ApiClient {
    pub fn list_incidencias(&self, q: &IncidenciaQuery) -> AppResult<IncidenciaPage> {
        let mut url = self.url("incidencias")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &q.page.max(1).to_string());
            pairs.append_pair("limit", &q.limit.max(1).to_string());
            if let Some(e) = q.estado {
                pairs.append_pair("estado", e.as_str());
            }
            if let Some(s) = q.severidad {
                pairs.append_pair("gradoSeveridad", s.as_str());
            }
        }
        self.get(url)
    }

    /// Looks the incident up on the first page large enough to hold all of
    /// them; the backend exposes no single-incident GET.
    pub fn get_incidencia(&self, id: &str) -> AppResult<Incidencia> {
        let first = self.list_incidencias(&IncidenciaQuery::default())?;
        if let Some(i) = first.incidencias.iter().find(|i| i.id == id) {
            return Ok(i.clone());
        }
        let all = self.list_incidencias(&IncidenciaQuery {
            limit: first.total.max(1) as usize,
            ..IncidenciaQuery::default()
        })?;
        all.incidencias
            .into_iter()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("incidencia {id}")))
    }

    pub fn update_incidencia(&self, id: &str, update: &IncidenciaUpdate) -> AppResult<()> {
        self.put(self.url(&format!("incidencias/{id}"))?, update)?;
        info!("incidencia {id} -> {}", update.estado.as_str());
        Ok(())
    }
}
