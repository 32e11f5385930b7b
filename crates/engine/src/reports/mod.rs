//! Aggregations behind the reporting views.
//!
//! Every function here is pure: it takes a snapshot of rows plus the current
//! instant and returns a value, without touching the store. "Local" day,
//! week and month boundaries come from the time zone attached to `now`.
//! Weeks start on Sunday.

use std::{collections::BTreeMap, ops::Add};

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    Category,
    categories::{FALLBACK_CATEGORY_COLOR, FALLBACK_CATEGORY_NAME},
};

mod activity;
mod diary;
mod finance;
mod home;

pub use activity::{ActivityReport, ActivityStats, activity_report, activity_stats, time_breakdown};
pub use diary::{DiaryReport, STREAK_LIMIT_DAYS, diary_report, mood_counts, streak};
pub use finance::{
    Balance, FinanceReport, MonthlyStats, balance, expense_breakdown, finance_report,
    monthly_stats,
};
pub use home::{HomeSummary, home_summary};

/// One row of a per-category breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreakdownItem<V> {
    pub category_id: Uuid,
    pub name: String,
    pub color: String,
    pub value: V,
}

/// Sum `rows` per category and join the category display data.
///
/// Sorted by value descending; equal values are ordered by category id.
pub(crate) fn breakdown<V>(
    rows: impl IntoIterator<Item = (Uuid, V)>,
    categories: &[Category],
) -> Vec<BreakdownItem<V>>
where
    V: Copy + Default + Ord + Add<Output = V>,
{
    let mut totals: BTreeMap<Uuid, V> = BTreeMap::new();
    for (category_id, value) in rows {
        let total = totals.entry(category_id).or_default();
        *total = *total + value;
    }

    let mut items: Vec<BreakdownItem<V>> = totals
        .into_iter()
        .map(|(category_id, value)| {
            let category = categories.iter().find(|c| c.id == category_id);
            BreakdownItem {
                category_id,
                name: category.map_or_else(|| FALLBACK_CATEGORY_NAME.to_string(), |c| c.name.clone()),
                color: category
                    .map_or_else(|| FALLBACK_CATEGORY_COLOR.to_string(), |c| c.color.clone()),
                value,
            }
        })
        .collect();

    items.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    items
}

/// First instant of `date` in `tz`, as UTC.
///
/// When local midnight does not exist (DST gap) the first valid instant of
/// that morning is used.
pub(crate) fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .map_or_else(
            || Utc.from_utc_datetime(&midnight),
            |dt| dt.with_timezone(&Utc),
        )
}

pub(crate) fn start_of_today<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    start_of_day(&now.timezone(), now.date_naive())
}

pub(crate) fn start_of_week<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let today = now.date_naive();
    let offset = Days::new(u64::from(today.weekday().num_days_from_sunday()));
    let sunday = today.checked_sub_days(offset).unwrap_or(today);
    start_of_day(&now.timezone(), sunday)
}

pub(crate) fn start_of_month<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let today = now.date_naive();
    let first = today.with_day(1).unwrap_or(today);
    start_of_day(&now.timezone(), first)
}
