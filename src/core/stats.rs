//! Aggregate statistics: total minutes booked per activity.

use crate::models::Training;
use serde::Serialize;

/// Bar colors of the statistics chart, cycled by bar index.
pub const CHART_COLORS: [&str; 8] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE", "#00C49F", "#FFBB28", "#FF8042",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityTotal {
    pub activity: String,
    pub minutes: i64,
}

/// Group by exact activity label (absent → `""`) in first-seen order and sum
/// the durations (absent → 0). Sums saturate at `i64::MAX`.
pub fn minutes_by_activity(trainings: &[Training]) -> Vec<ActivityTotal> {
    let mut totals: Vec<ActivityTotal> = Vec::new();

    for t in trainings {
        let minutes = t.duration.unwrap_or(0);
        match totals.iter_mut().find(|a| a.activity == t.activity_str()) {
            Some(total) => total.minutes = total.minutes.saturating_add(minutes),
            None => totals.push(ActivityTotal {
                activity: t.activity_str().to_string(),
                minutes,
            }),
        }
    }

    totals
}

pub fn chart_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}
