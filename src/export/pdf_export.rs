// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::pdf::PdfManager;
use crate::export::{ExportTable, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Tables wider than this many columns are laid out in landscape.
const LANDSCAPE_FROM: usize = 7;

pub(crate) fn export_pdf(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    if table.headers.len() >= LANDSCAPE_FROM {
        pdf = pdf.landscape();
    }
    pdf.write_table(&table.title, &table.headers, &table.rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
