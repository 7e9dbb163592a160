use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{CSV_MIME, ExportSource, exclusion_set, resolve_path, save_text, serialize};
use crate::models::store::{customer_records, read_document, training_records};
use crate::ui::messages::{info, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        source,
        file,
        force,
    } = cmd
    {
        let records = match source {
            ExportSource::Customers => {
                customer_records(read_document(Path::new(&cfg.customers_file))?)?
            }
            ExportSource::Trainings => {
                training_records(read_document(Path::new(&cfg.trainings_file))?)?
            }
        };

        if records.is_empty() {
            warning(format!("No {} found. Nothing to export.", source.as_str()));
            return Ok(());
        }

        let target = file
            .clone()
            .unwrap_or_else(|| source.default_file_name());
        let path = resolve_path(&target)?;

        info(format!(
            "Exporting {} {} to CSV: {}",
            records.len(),
            source.as_str(),
            path.display()
        ));

        let exclude = exclusion_set(&cfg.export_exclude);
        let text = serialize(&records, &exclude);
        save_text(&text, &path, CSV_MIME, *force)?;
    }
    Ok(())
}
