use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarEvent, CalendarProjector, events_between};
use crate::errors::{AppError, AppResult};
use crate::export::{JSON_MIME, resolve_path, save_text};
use crate::models::store::load_trainings;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{CYAN, RESET, paint_hex};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        from,
        to,
        json,
        file,
        force,
    } = cmd
    {
        let from = parse_bound(from)?;
        let to = parse_bound(to)?;

        let trainings = load_trainings(Path::new(&cfg.trainings_file))?;
        let projector = CalendarProjector::new(cfg.palette());

        for t in projector.unplaced(&trainings.items) {
            warning(format!(
                "Training '{}' has no valid date or duration, not placed on the calendar",
                t.id_string()
            ));
        }

        let events = projector.project(&trainings.items);
        let mut selected = events_between(&events, from, to);
        selected.sort_by_key(|e| e.start);

        if *json || file.is_some() {
            let doc = serde_json::to_string_pretty(&selected)?;
            match file {
                Some(f) => save_text(&doc, &resolve_path(f)?, JSON_MIME, *force)?,
                None => println!("{doc}"),
            }
            return Ok(());
        }

        print_agenda(&selected);
    }
    Ok(())
}

fn parse_bound(raw: &Option<String>) -> AppResult<Option<NaiveDate>> {
    raw.as_deref()
        .map(|s| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())))
        .transpose()
}

fn print_agenda(events: &[&CalendarEvent]) {
    header("Calendar");

    if events.is_empty() {
        info("No trainings in the selected period.");
        return;
    }

    let mut current_day: Option<NaiveDate> = None;
    for ev in events {
        let day = ev.start.date_naive();
        if current_day != Some(day) {
            println!("{CYAN}{}{RESET}", day.format("%a %d.%m.%Y"));
            current_day = Some(day);
        }
        println!(
            "  {}  {} {}  ({} min)",
            ev.time_range(),
            paint_hex("●", &ev.background_color),
            ev.title,
            ev.extended_props.duration
        );
    }
}
