//! Calendar projection: one timed, colored event per training.

use crate::models::{CustomerRef, Training};
use crate::utils::date::{Timestamp, format_clock};
use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

pub const FALLBACK_COLOR: &str = "#3788d8";

/// Keyword → color table, in match order.
pub const DEFAULT_ACTIVITY_COLORS: [(&str, &str); 10] = [
    ("gym", "#4CAF50"),
    ("jogging", "#2196F3"),
    ("spinning", "#F44336"),
    ("zumba", "#FF9800"),
    ("fitness", "#9C27B0"),
    ("yoga", "#00BCD4"),
    ("swimming", "#3F51B5"),
    ("boxing", "#795548"),
    ("cycling", "#607D8B"),
    ("pilates", "#E91E63"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityColor {
    pub keyword: String,
    pub color: String,
}

impl ActivityColor {
    pub fn new(keyword: &str, color: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            color: color.to_string(),
        }
    }
}

/// Ordered, immutable activity color table.
///
/// Matching is a case-insensitive substring test and the first keyword in
/// table order wins, so `"fitness yoga"` resolves to `fitness`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPalette {
    entries: Vec<ActivityColor>,
    fallback: String,
}

impl Default for ActivityPalette {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACTIVITY_COLORS
                .iter()
                .map(|(k, c)| ActivityColor::new(k, c))
                .collect(),
            FALLBACK_COLOR,
        )
    }
}

impl ActivityPalette {
    pub fn new(entries: Vec<ActivityColor>, fallback: &str) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.keyword.is_empty())
            .map(|e| ActivityColor {
                keyword: e.keyword.to_lowercase(),
                color: e.color,
            })
            .collect();
        Self {
            entries,
            fallback: fallback.to_string(),
        }
    }

    pub fn entries(&self) -> &[ActivityColor] {
        &self.entries
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn color_for(&self, activity: Option<&str>) -> &str {
        let Some(activity) = activity.filter(|a| !a.is_empty()) else {
            return &self.fallback;
        };
        let lower = activity.to_lowercase();
        self.entries
            .iter()
            .find(|e| lower.contains(e.keyword.as_str()))
            .map(|e| e.color.as_str())
            .unwrap_or(&self.fallback)
    }
}

/// Source fields kept on the event for the detail popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    pub activity: Option<String>,
    pub customer: Option<CustomerRef>,
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: Timestamp,
    pub end: Timestamp,
    pub background_color: String,
    pub border_color: String,
    pub extended_props: EventDetails,
}

impl CalendarEvent {
    pub fn time_range(&self) -> String {
        format_event_time(Some(&self.start), Some(&self.end))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalendarProjector {
    palette: ActivityPalette,
}

impl CalendarProjector {
    pub fn new(palette: ActivityPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &ActivityPalette {
        &self.palette
    }

    /// Events for every placeable training, in input order.
    ///
    /// A training without a parsable date or a positive duration has no
    /// place on the calendar and is left out; see [`Self::unplaced`].
    pub fn project(&self, trainings: &[Training]) -> Vec<CalendarEvent> {
        trainings.iter().filter_map(|t| self.place(t)).collect()
    }

    /// Trainings that [`Self::project`] leaves out.
    pub fn unplaced<'a>(&self, trainings: &'a [Training]) -> Vec<&'a Training> {
        trainings.iter().filter(|t| placement(t).is_none()).collect()
    }

    fn place(&self, training: &Training) -> Option<CalendarEvent> {
        let (start, end, duration) = placement(training)?;
        let color = self.palette.color_for(training.activity.as_deref()).to_string();

        Some(CalendarEvent {
            id: training.id_string(),
            title: training.title(),
            start,
            end,
            background_color: color.clone(),
            border_color: color,
            extended_props: EventDetails {
                activity: training.activity.clone(),
                customer: training.customer.clone(),
                duration,
            },
        })
    }
}

fn placement(training: &Training) -> Option<(Timestamp, Timestamp, i64)> {
    let start = training.start()?;
    let duration = training.duration.filter(|d| *d > 0)?;
    let end = start.checked_add_signed(TimeDelta::try_minutes(duration)?)?;
    Some((start, end, duration))
}

/// `"HH:mm – HH:mm"`; empty when either side is missing.
pub fn format_event_time(start: Option<&Timestamp>, end: Option<&Timestamp>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} \u{2013} {}", format_clock(s), format_clock(e)),
        _ => String::new(),
    }
}

/// Events starting on a day within the inclusive `[from, to]` window.
pub fn events_between(
    events: &[CalendarEvent],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| {
            let day = e.start.date_naive();
            from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t)
        })
        .collect()
}
