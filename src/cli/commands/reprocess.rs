use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// Parse a stored batch again with the current rules and show the result.
/// The content hash is unchanged, so nothing is persisted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reprocess { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let rules = cfg.name_rules();

        let (batch, parsed) = IngestLogic::reprocess(&mut pool, &rules, *id)?;

        info(format!(
            "Batch {} (\"{}\"): {} lines matched, {} skipped. Nothing was persisted.",
            batch.id, batch.label, parsed.matched_lines, parsed.skipped_lines
        ));

        let grouped = parsed.grouped();
        if !grouped.is_empty() {
            let mut table = Table::new(&["Employee", "Days", "Punches"]);
            for (employee, days) in &grouped {
                let punches: usize = days.values().map(|times| times.len()).sum();
                table.add_row(vec![
                    employee.clone(),
                    days.len().to_string(),
                    punches.to_string(),
                ]);
            }
            println!("\n{}", table.render());
        }
    }
    Ok(())
}
