// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportTable};
use crate::ui::messages::warning;
use crate::utils::path::absolute_output;
use tracing::info;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` to `file` in the given format.
    ///
    /// - `file` must be an absolute path (`~` is expanded)
    /// - an existing file is only replaced with `force` or after confirmation
    /// - an empty table writes nothing and returns `Ok(false)`
    pub fn export(
        table: &ExportTable,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<bool> {
        let path = absolute_output(file)?;

        if table.is_empty() {
            warning(format!("No records found for '{}'.", table.title));
            return Ok(false);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(table, &path)?,
            ExportFormat::Json => export_json(table, &path)?,
            ExportFormat::Xlsx => export_xlsx(table, &path)?,
            ExportFormat::Pdf => export_pdf(table, &path)?,
        }

        info!(
            rows = table.rows.len(),
            format = format.as_str(),
            path = %path.display(),
            "export written"
        );
        Ok(true)
    }
}
