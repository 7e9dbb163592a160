use super::grid::{build_query, show};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::training_columns;
use crate::errors::AppResult;
use crate::models::store::load_trainings;
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trainings {
        filters,
        sort,
        page,
    } = cmd
    {
        let query = build_query(filters, sort)?;
        let trainings = load_trainings(Path::new(&cfg.trainings_file))?;

        let undated = trainings.items.iter().filter(|t| t.start().is_none()).count();
        if undated > 0 {
            warning(format!("{undated} training(s) without a valid date"));
        }

        show(
            "Trainings",
            &training_columns(),
            &trainings.items,
            &query,
            *page,
            cfg.page_size,
        )?;
    }
    Ok(())
}
