use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::LogParser;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        employee,
        month,
        year,
        format,
        file,
        status,
        force,
    } = cmd
    {
        let rules = cfg.name_rules();
        let canonical = LogParser::new(rules).canonical_name(employee);

        let mut pool = DbPool::new(&cfg.database)?;

        ExportLogic::export(
            &mut pool,
            &canonical,
            *year,
            *month,
            *status,
            format.clone(),
            file,
            *force,
        )?;
    }
    Ok(())
}
