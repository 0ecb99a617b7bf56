use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, rows_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{DayRow, notify_export_success};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// PDF export through PdfManager and the shared day-row table.
pub(crate) fn export_pdf(rows: &[DayRow], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = rows_to_table(rows);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
