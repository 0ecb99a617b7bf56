use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{count_batches, list_batches};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batches { page } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let total = count_batches(&pool.conn)?;
        if total == 0 {
            info("No batches on file yet.");
            return Ok(());
        }

        let batches = list_batches(&pool.conn, *page, cfg.page_size)?;
        let pages = (total as usize).div_ceil(cfg.page_size).max(1);

        println!("🗂️  Upload history:\n");

        let mut table = Table::new(&["Id", "Label", "Uploaded", "Records"]);
        for b in &batches {
            table.add_row(vec![
                b.id.to_string(),
                b.label.clone(),
                b.uploaded_at.clone(),
                b.record_count.to_string(),
            ]);
        }
        println!("{}", table.render());

        println!("Page {} of {} ({} batches)", page, pages, total);
    }
    Ok(())
}
