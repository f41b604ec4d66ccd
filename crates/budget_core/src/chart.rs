//! Down-sampling a payoff schedule for display
//!
//! Short schedules are shown month by month. Medium ones keep every month but
//! mark year boundaries. Long ones keep every third month plus the first and
//! last entry so the payoff point is never dropped.

use serde::{Deserialize, Serialize};

use crate::simulation::{PayoffSchedule, ScheduleEntry};

const MONTHLY_LIMIT: u32 = 24;
const YEAR_MARKER_LIMIT: u32 = 60;
const SAMPLE_STRIDE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: u32,
    pub label: String,
    pub total_balance: f64,
    pub year_marker: bool,
}

impl ChartPoint {
    fn from_entry(entry: &ScheduleEntry, mark_years: bool) -> Self {
        let year_marker = mark_years && entry.month > 0 && entry.month % 12 == 0;
        let label = if year_marker {
            format!("Yr {}", entry.month / 12)
        } else {
            format!("Mo {}", entry.month)
        };
        Self {
            month: entry.month,
            label,
            total_balance: entry.total_balance,
            year_marker,
        }
    }
}

#[must_use]
pub fn sample_schedule(schedule: &PayoffSchedule) -> Vec<ChartPoint> {
    let span = schedule.last().map_or(0, |e| e.month);

    if span <= MONTHLY_LIMIT {
        return schedule
            .entries
            .iter()
            .map(|e| ChartPoint::from_entry(e, false))
            .collect();
    }

    if span <= YEAR_MARKER_LIMIT {
        return schedule
            .entries
            .iter()
            .map(|e| ChartPoint::from_entry(e, true))
            .collect();
    }

    schedule
        .entries
        .iter()
        .filter(|e| e.month % SAMPLE_STRIDE == 0 || e.month == span)
        .map(|e| ChartPoint::from_entry(e, true))
        .collect()
}
