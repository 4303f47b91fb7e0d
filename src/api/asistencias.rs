use super::ApiClient;
use crate::errors::AppResult;
use crate::models::asistencia::Asistencia;
use crate::utils::date::iso_day_param;
use chrono::NaiveDate;

impl ApiClient {
    /// Attendance of one day, `GET /asistencias/:isoDate`.
    pub fn list_asistencias(&self, day: NaiveDate) -> AppResult<Vec<Asistencia>> {
        self.get(self.url(&format!("asistencias/{}", iso_day_param(day)))?)
    }
}
