use crate::core::calendar::build_month;
use crate::db::log::log_op;
use crate::db::pool::DbPool;
use crate::db::queries::load_month_punches;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::month_to_rows;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::status::EmploymentStatus;
use std::io;
use std::path::Path;

/// High-level logic for exporting one employee's month calendar.
/// This is the seam the external document renderer plugs into: it always
/// receives the complete zero-filled day list, punches or not.
pub struct ExportLogic;

impl ExportLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        employee: &str,
        year: i32,
        month: u32,
        status: Option<EmploymentStatus>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let punches = load_month_punches(&pool.conn, employee, year, month, status)?;
        let group = build_month(employee, year, month, &punches);
        let rows = month_to_rows(&group);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = format!("Daily Time Record: {} ({})", employee, group.label);
                export_pdf(&rows, path, &title)?;
            }
        }

        log_op(
            &pool.conn,
            "export",
            employee,
            &format!("{} for {} written to {}", format.as_str(), group.label, file),
        )?;

        Ok(())
    }
}
