use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use crate::{DiaryEntry, Mood};

use super::start_of_month;

/// How far back the streak walk goes.
pub const STREAK_LIMIT_DAYS: u32 = 365;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiaryReport {
    pub entry_count: usize,
    pub monthly_entry_count: usize,
    pub mood_counts: BTreeMap<Mood, u32>,
    pub streak: u32,
}

/// How many entries carry each mood. Entries without a mood are skipped.
pub fn mood_counts(entries: &[DiaryEntry]) -> BTreeMap<Mood, u32> {
    let mut counts = BTreeMap::new();
    for mood in entries.iter().filter_map(|e| e.mood) {
        *counts.entry(mood).or_insert(0) += 1;
    }
    counts
}

/// Consecutive local days with at least one entry, counted backwards.
///
/// Today counts when it already has an entry; otherwise the walk starts from
/// yesterday. The first day without entries ends the streak.
pub fn streak<Tz: TimeZone>(entries: &[DiaryEntry], now: &DateTime<Tz>) -> u32 {
    let tz = now.timezone();
    let days: HashSet<NaiveDate> = entries
        .iter()
        .map(|e| e.created_at.with_timezone(&tz).date_naive())
        .collect();

    let mut day = now.date_naive();
    let mut streak = 0;
    for step in 0..STREAK_LIMIT_DAYS {
        if days.contains(&day) {
            streak += 1;
        } else if step > 0 {
            break;
        }
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

pub fn diary_report<Tz: TimeZone>(entries: &[DiaryEntry], now: &DateTime<Tz>) -> DiaryReport {
    let month = start_of_month(now);
    DiaryReport {
        entry_count: entries.len(),
        monthly_entry_count: entries.iter().filter(|e| e.created_at >= month).count(),
        mood_counts: mood_counts(entries),
        streak: streak(entries, now),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use chrono_tz::Tz;
    use uuid::Uuid;

    use super::*;
    use crate::reports::fixtures::at;

    fn entry(created_at: DateTime<Utc>, mood: Option<Mood>) -> DiaryEntry {
        DiaryEntry {
            id: Uuid::new_v4(),
            content: "dear diary".to_string(),
            mood,
            created_at,
        }
    }

    fn days_ago(now: &DateTime<Tz>, days: i64) -> DateTime<Utc> {
        (now.clone() - TimeDelta::days(days)).with_timezone(&Utc)
    }

    #[test]
    fn today_and_yesterday_make_two() {
        let now = at(Tz::UTC, 2026, 10, 18, 20, 0);
        let entries = vec![entry(days_ago(&now, 0), None), entry(days_ago(&now, 1), None)];
        assert_eq!(streak(&entries, &now), 2);
    }

    #[test]
    fn missing_today_starts_from_yesterday() {
        let now = at(Tz::UTC, 2026, 10, 18, 8, 0);
        let entries = vec![
            entry(days_ago(&now, 1), None),
            entry(days_ago(&now, 2), None),
            entry(days_ago(&now, 2), None),
        ];
        assert_eq!(streak(&entries, &now), 2);
    }

    #[test]
    fn a_gap_breaks_the_streak() {
        let now = at(Tz::UTC, 2026, 10, 18, 8, 0);
        assert_eq!(streak(&[entry(days_ago(&now, 3), None)], &now), 0);
        assert_eq!(streak(&[], &now), 0);
    }

    #[test]
    fn days_are_local() {
        // 23:30 UTC on the 17th is already the 18th in Algiers.
        let now = at(Tz::Africa__Algiers, 2026, 10, 18, 9, 0);
        let late = Utc.with_ymd_and_hms(2026, 10, 17, 23, 30, 0).unwrap();
        let day_before = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        assert_eq!(streak(&[entry(late, None), entry(day_before, None)], &now), 2);
    }

    #[test]
    fn streak_is_bounded() {
        let now = at(Tz::UTC, 2026, 10, 18, 8, 0);
        let entries: Vec<_> = (0..400).map(|d| entry(days_ago(&now, d), None)).collect();
        assert_eq!(streak(&entries, &now), STREAK_LIMIT_DAYS);
    }

    #[test]
    fn mood_counts_skip_entries_without_mood() {
        let now = Utc::now();
        let entries = vec![
            entry(now, Some(Mood::Happy)),
            entry(now, Some(Mood::Happy)),
            entry(now, Some(Mood::Sad)),
            entry(now, None),
        ];
        let counts = mood_counts(&entries);
        assert_eq!(counts.get(&Mood::Happy), Some(&2));
        assert_eq!(counts.get(&Mood::Sad), Some(&1));
        assert_eq!(counts.get(&Mood::Neutral), None);
        assert_eq!(counts.values().sum::<u32>(), 3);
    }

    #[test]
    fn report_counts_month_entries() {
        let now = at(Tz::UTC, 2026, 10, 18, 8, 0);
        let entries = vec![
            entry(days_ago(&now, 0), Some(Mood::Productive)),
            entry(days_ago(&now, 30), None),
        ];
        let report = diary_report(&entries, &now);
        assert_eq!(report.entry_count, 2);
        assert_eq!(report.monthly_entry_count, 1);
        assert_eq!(report.streak, 1);
    }
}
