use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot render configuration: {e}")))?;
            println!("{yaml}");
            return Ok(());
        }

        if *check {
            let path = Config::config_file();
            if !path.exists() {
                warning(format!(
                    "No config file at {} (built-in defaults are in effect).",
                    path.display()
                ));
                return Ok(());
            }

            // Config::load panics on malformed YAML, so re-parse by hand here
            let content = std::fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(_) => success(format!("{} parses cleanly.", path.display())),
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "{} is not valid: {e}",
                        path.display()
                    )));
                }
            }
            return Ok(());
        }

        info("Nothing to do: use --print or --check.");
    }
    Ok(())
}
