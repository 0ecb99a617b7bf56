use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print a batch's stored raw text exactly as submitted, so it can be
/// piped back into `ingest` after a rule change.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Raw { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let raw = IngestLogic::raw_text(&mut pool, *id)?;
        print!("{raw}");
        if !raw.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
