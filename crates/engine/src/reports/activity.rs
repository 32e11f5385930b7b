use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::{Activity, Category};

use super::{BreakdownItem, breakdown, start_of_today, start_of_week};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ActivityStats {
    pub total_minutes: i64,
    /// Whole hours contained in `total_minutes`.
    pub total_hours: i64,
    /// Number of completed activities.
    pub activity_count: usize,
    /// Mean rating over rated completed activities, `0.0` when none is rated.
    pub average_rating: f64,
    pub today_minutes: i64,
    pub week_minutes: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityReport {
    pub stats: ActivityStats,
    pub time_breakdown: Vec<BreakdownItem<i64>>,
}

fn completed(activities: &[Activity]) -> impl Iterator<Item = &Activity> {
    activities.iter().filter(|a| a.end_time.is_some())
}

fn minutes<'a>(activities: impl Iterator<Item = &'a Activity>) -> i64 {
    activities.map(|a| a.duration.unwrap_or(0)).sum()
}

/// Totals over completed activities. Open activities are ignored.
pub fn activity_stats<Tz: TimeZone>(activities: &[Activity], now: &DateTime<Tz>) -> ActivityStats {
    let today = start_of_today(now);
    let week = start_of_week(now);

    let total_minutes = minutes(completed(activities));
    let (rating_sum, rated) = completed(activities)
        .filter_map(|a| a.rating)
        .fold((0u32, 0u32), |(sum, count), rating| {
            (sum + u32::from(rating.get()), count + 1)
        });

    ActivityStats {
        total_minutes,
        total_hours: total_minutes.div_euclid(60),
        activity_count: completed(activities).count(),
        average_rating: if rated == 0 {
            0.0
        } else {
            f64::from(rating_sum) / f64::from(rated)
        },
        today_minutes: minutes(completed(activities).filter(|a| a.start_time >= today)),
        week_minutes: minutes(completed(activities).filter(|a| a.start_time >= week)),
    }
}

/// Minutes summed per category over completed activities, largest first.
pub fn time_breakdown(activities: &[Activity], categories: &[Category]) -> Vec<BreakdownItem<i64>> {
    breakdown(
        completed(activities).map(|a| (a.category_id, a.duration.unwrap_or(0))),
        categories,
    )
}

pub fn activity_report<Tz: TimeZone>(
    activities: &[Activity],
    categories: &[Category],
    now: &DateTime<Tz>,
) -> ActivityReport {
    ActivityReport {
        stats: activity_stats(activities, now),
        time_breakdown: time_breakdown(activities, categories),
    }
}
