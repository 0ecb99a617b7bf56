use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;
use std::fs;
use std::io::Read;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ingest { label, file } = cmd {
        let raw = match file {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let rules = cfg.name_rules();

        let summary = IngestLogic::ingest(&mut pool, &rules, &raw, label)?;

        if summary.already_saved {
            warning(format!(
                "This log was already saved as batch {} ({} records). Nothing was persisted.",
                summary.batch_id, summary.record_count
            ));
        } else {
            success(format!(
                "Batch {} saved: {} records ({} inserted, {} duplicates, {} lines skipped).",
                summary.batch_id,
                summary.record_count,
                summary.inserted,
                summary.duplicates,
                summary.parsed.skipped_lines
            ));
        }

        let grouped = summary.parsed.grouped();
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
