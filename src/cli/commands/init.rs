use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Writes the default configuration file (config directory included).
/// An existing file is left untouched unless `--force` is given.
pub fn handle(cli: &Cli, config_path: &std::path::Path) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let mut cfg = Config::default();
        if let Some(c) = &cli.customers_file {
            cfg.customers_file = c.clone();
        }
        if let Some(t) = &cli.trainings_file {
            cfg.trainings_file = t.clone();
        }

        info("Initializing rTrainer…");

        if cfg.write_to(config_path, *force)? {
            success(format!("Config file: {}", config_path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
        }

        println!("📄 Customers : {}", cfg.customers_file);
        println!("📄 Trainings : {}", cfg.trainings_file);
    }
    Ok(())
}
