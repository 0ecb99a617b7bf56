use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::distinct_employees;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::{month_label, today};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees {
        search,
        month,
        year,
        status,
        page,
    } = cmd
    {
        let month = month.unwrap_or_else(|| today().month());
        let year = year.unwrap_or_else(|| today().year());

        let mut pool = DbPool::new(&cfg.database)?;

        let (names, total) = distinct_employees(
            &pool.conn,
            search.as_deref(),
            year,
            month,
            *status,
            *page,
            cfg.page_size,
        )?;

        if total == 0 {
            info(format!(
                "No employees with punches in {}.",
                month_label(year, month)
            ));
            return Ok(());
        }

        println!("👥 Employees with punches in {}:\n", month_label(year, month));

        let offset = page.saturating_sub(1) * cfg.page_size;
        for (i, name) in names.iter().enumerate() {
            println!("{:>4}. {}", offset + i + 1, name);
        }

        let pages = (total as usize).div_ceil(cfg.page_size).max(1);
        println!("\nPage {} of {} ({} employees)", page, pages, total);
    }
    Ok(())
}
