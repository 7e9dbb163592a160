use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{chart_color, minutes_by_activity};
use crate::errors::AppResult;
use crate::models::store::load_trainings;
use crate::ui::messages::{header, info};
use crate::utils::colors::paint_hex;
use crate::utils::formatting::{bar, bold, pad_right};
use crate::utils::mins2readable;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let trainings = load_trainings(Path::new(&cfg.trainings_file))?;
        let totals = minutes_by_activity(&trainings.items);

        header("Training Statistics");

        if totals.is_empty() {
            info("No trainings to summarize.");
            return Ok(());
        }

        println!("Total time (in minutes) booked for each activity type\n");

        let label_width = totals
            .iter()
            .map(|t| UnicodeWidthStr::width(t.activity.as_str()))
            .max()
            .unwrap_or(0);
        let max = totals.iter().map(|t| t.minutes).max().unwrap_or(0);

        for (i, t) in totals.iter().enumerate() {
            println!(
                "{}  {:>6} min  {}  {}",
                pad_right(&t.activity, label_width),
                t.minutes,
                pad_right(&mins2readable(t.minutes, false, false), 8),
                paint_hex(&bar(t.minutes, max, BAR_WIDTH), chart_color(i))
            );
        }

        let total = totals
            .iter()
            .fold(0i64, |acc, t| acc.saturating_add(t.minutes));
        println!("\n{} {} min", bold("Total:"), total);
    }
    Ok(())
}
